//! Ядро раздатчика: журнал событий и сессия поверх колоды.
//!
//! Высокоуровневый объект: `DispenserSession`
//! Основные операции:
//!   - `configure` – пересобрать колоду из шаблона и перемешать
//!   - `draw` – атомарно вытянуть N карт
//!   - `shuffle` – полный сброс колоды

pub mod errors;
pub mod history;
pub mod session;

pub use errors::EngineError;
pub use history::{Event, EventKind, HistoryLog, TextForm};
pub use session::{DeckStatus, DispenserSession};

/// RNG интерфейс для перемешивания колоды.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
