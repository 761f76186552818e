//! Внешний API раздатчика.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (конфигурация, вытягивание, перемешивание);
//! - запросы (queries.rs) — только чтение и экспорт журнала;
//! - DTO (dto.rs) — удобные структуры для слоя отображения;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
