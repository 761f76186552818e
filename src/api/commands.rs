use serde::{Deserialize, Serialize};

use crate::domain::settings::DispenserSettings;
use crate::domain::template::DeckTemplate;
use crate::engine::{DispenserSession, RandomSource};
use crate::infra::clock::Clock;

use super::dto::{map_event_to_dto, CommandResponse};
use super::errors::ApiError;

/// Команда верхнего уровня: всё, что меняет состояние сессии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Пересобрать колоду из шаблона и перемешать.
    Configure(ConfigureCommand),

    /// Применить настройки целиком (джокеры, колоды, флаги журнала).
    ApplySettings(DispenserSettings),

    /// Вытянуть N карт атомарно.
    Draw(DrawCommand),

    /// Вытянуть одну карту (пустая колода — не ошибка).
    DrawOne,

    /// Полный сброс колоды.
    Shuffle,

    /// Очистить журнал.
    ClearHistory,
}

/// Команда конфигурации.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigureCommand {
    pub template: DeckTemplate,
    /// Количество колод (≥ 1).
    pub deck_count: u32,
}

/// Вытянуть `count` карт.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrawCommand {
    /// Сколько карт (≥ 1).
    pub count: usize,
}

/// Выполнить команду над сессией.
pub fn dispatch<R: RandomSource, C: Clock>(
    session: &mut DispenserSession<R, C>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::Configure(ConfigureCommand {
            template,
            deck_count,
        }) => {
            let status = session.configure(template, deck_count)?;
            Ok(CommandResponse::Configured(status))
        }

        Command::ApplySettings(settings) => match session.apply_settings(settings)? {
            Some(status) => Ok(CommandResponse::Configured(status)),
            None => Ok(CommandResponse::SettingsUpdated),
        },

        Command::Draw(DrawCommand { count }) => {
            let event = session.draw(count)?;
            Ok(CommandResponse::Drawn(map_event_to_dto(&event)))
        }

        Command::DrawOne => Ok(match session.draw_one() {
            Some(event) => CommandResponse::Drawn(map_event_to_dto(&event)),
            None => CommandResponse::NothingDrawn,
        }),

        Command::Shuffle => {
            let event = session.shuffle();
            Ok(CommandResponse::Shuffled(event.as_ref().map(map_event_to_dto)))
        }

        Command::ClearHistory => {
            session.clear_history();
            Ok(CommandResponse::HistoryCleared)
        }
    }
}
