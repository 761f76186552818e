use serde::{Deserialize, Serialize};

use crate::engine::history::{HistoryLog, TextForm};
use crate::engine::{DeckStatus, DispenserSession, RandomSource};
use crate::infra::clock::Clock;

use super::dto::{map_event_to_dto, EventDto};
use super::errors::ApiError;

/// Формат экспорта журнала.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExportFormat {
    Text(TextForm),
    Json,
}

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Сколько карт осталось / сколько всего.
    GetStatus,

    /// Журнал, новые первыми.
    GetHistory,

    /// Журнал одной строкой для копирования/сохранения.
    ExportHistory { format: ExportFormat },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Status(DeckStatus),
    History(Vec<EventDto>),
    Export(String),
}

pub fn run_query<R: RandomSource, C: Clock>(
    session: &DispenserSession<R, C>,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetStatus => Ok(QueryResponse::Status(session.status())),
        Query::GetHistory => Ok(QueryResponse::History(build_history_view(session.history()))),
        Query::ExportHistory { format } => {
            let text = match format {
                ExportFormat::Text(form) => export_history_text(session.history(), form),
                ExportFormat::Json => export_history_json(session.history())?,
            };
            Ok(QueryResponse::Export(text))
        }
    }
}

/// DTO всего журнала.
pub fn build_history_view(history: &HistoryLog) -> Vec<EventDto> {
    history.iter().map(map_event_to_dto).collect()
}

/// Текстовый экспорт: строка на событие, новые первыми.
///
/// Формат строки: `#<id> <текст>`; события Shuffle всегда
/// выводятся описанием.
pub fn export_history_text(history: &HistoryLog, form: TextForm) -> String {
    history
        .iter()
        .map(|event| format!("#{} {}", event.id, event.render(form)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export_history_json(history: &HistoryLog) -> Result<String, ApiError> {
    serde_json::to_string_pretty(&build_history_view(history))
        .map_err(|e| ApiError::Internal(format!("Не удалось сериализовать журнал: {e}")))
}
