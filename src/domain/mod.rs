//! Доменная модель раздатчика: карты, шаблоны колод, колода, настройки.

pub mod card;
pub mod deck;
pub mod settings;
pub mod template;

// Базовые идентификаторы
pub type CardId = u64;
pub type EventId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use settings::*;
pub use template::*;
