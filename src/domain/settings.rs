use serde::{Deserialize, Serialize};

use crate::domain::template::DeckTemplate;
use crate::engine::EngineError;

/// Ёмкость журнала событий.
pub const HISTORY_CAPACITY: usize = 50;

/// Настройки раздатчика, которые хост передаёт в ядро явно.
///
/// Хранение (файлы, user defaults и т.п.) — забота хоста,
/// ядро только принимает и валидирует структуру.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DispenserSettings {
    /// Сколько колод смешано в одну (≥ 1).
    pub deck_count: u32,
    /// Переключатель джокеров поверх базового шаблона.
    pub include_jokers: bool,
    /// Сколько джокеров добавлять в каждую колоду, если они включены.
    pub jokers_per_deck: u32,
    pub history_enabled: bool,
    /// Перемешивание очищает журнал вместо записи события Shuffle.
    pub clear_history_on_shuffle: bool,
}

impl Default for DispenserSettings {
    fn default() -> Self {
        Self {
            deck_count: 1,
            include_jokers: false,
            jokers_per_deck: 2,
            history_enabled: true,
            clear_history_on_shuffle: false,
        }
    }
}

impl DispenserSettings {
    /// Проверка на границе: ядро не принимает `deck_count == 0`.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.deck_count < 1 {
            return Err(EngineError::InvalidDeckCount(self.deck_count));
        }
        Ok(())
    }

    /// Разобрать настройки из JSON (отсутствующие поля — по умолчанию).
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::InvalidSettings(e.to_string()))
    }

    /// Итоговый шаблон: базовый + переключатель джокеров.
    ///
    /// Если джокеры выключены, их количество в шаблоне обнуляется.
    pub fn effective_template(&self, base: &DeckTemplate) -> DeckTemplate {
        let jokers = if self.include_jokers {
            self.jokers_per_deck
        } else {
            0
        };
        base.clone().with_jokers(jokers)
    }
}
