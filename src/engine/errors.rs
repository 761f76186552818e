use thiserror::Error;

/// Ошибки ядра раздатчика карт.
///
/// Во время работы восстанавливаемая ошибка ровно одна — `NotEnoughCards`.
/// Остальные варианты отсекают некорректный ввод на границе.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недостаточно карт: запрошено {requested}, осталось {remaining}")]
    NotEnoughCards { requested: usize, remaining: usize },

    #[error("Нужно вытянуть хотя бы одну карту")]
    InvalidDrawCount,

    #[error("Количество колод должно быть не меньше 1 (получено {0})")]
    InvalidDeckCount(u32),

    #[error("Некорректные настройки: {0}")]
    InvalidSettings(String),
}
