use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что видит слой отображения).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON, 0 колод, 0 карт).
    BadRequest(String),

    /// Ошибка ядра (например, не хватает карт).
    EngineError(String),

    /// Внутренняя ошибка (например, сериализация).
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotEnoughCards { .. } => ApiError::EngineError(err.to_string()),
            EngineError::InvalidDrawCount
            | EngineError::InvalidDeckCount(_)
            | EngineError::InvalidSettings(_) => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}
