//! Раздатчик игральных карт.
//!
//! Ядро: шаблон колоды → пул карт, машина состояний draw/shuffle
//! и ограниченный журнал событий (50 записей, новые первыми).
//! Отрисовка карт, буфер обмена и хранение настроек — забота хоста;
//! он вызывает `api::dispatch` / `api::run_query` или напрямую `DispenserSession`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{dispatch, run_query, ApiError, Command, CommandResponse, Query, QueryResponse};
pub use domain::{Card, CardFace, Deck, DeckTemplate, DispenserSettings, Rank, Suit};
pub use engine::{DeckStatus, DispenserSession, EngineError, Event, EventKind, HistoryLog, TextForm};
