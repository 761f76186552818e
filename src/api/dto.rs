use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::{CardId, EventId};
use crate::engine::history::{Event, EventKind};
use crate::engine::DeckStatus;

/// DTO карты: данные + обе текстовые формы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub id: CardId,
    /// Символ ранга ("K", "10"); `None` у джокера.
    pub rank: Option<String>,
    /// Имя масти ("Hearts"); `None` у джокера.
    pub suit: Option<String>,
    pub is_joker: bool,
    /// "King of Hearts"
    pub description: String,
    /// "K♥"
    pub symbol: String,
}

/// Вид события для фронта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventKindDto {
    Draw,
    Shuffle,
}

/// DTO одного события журнала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventDto {
    pub id: EventId,
    pub timestamp_ms: u64,
    pub kind: EventKindDto,
    /// Пусто для Shuffle.
    pub cards: Vec<CardDto>,
    pub deck_count: u32,
    pub remaining_cards: usize,
    pub description: String,
    /// Компактные символы карт; у Shuffle отсутствуют.
    pub compact: Option<String>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Колода пересобрана (configure / смена настроек состава).
    Configured(DeckStatus),

    /// Настройки приняты, состав колоды не менялся.
    SettingsUpdated,

    /// Карты вытянуты.
    Drawn(EventDto),

    /// Колода пуста — вытягивать нечего (не ошибка).
    NothingDrawn,

    /// Колода перемешана; `None`, если журнал был очищен вместо записи.
    Shuffled(Option<EventDto>),

    HistoryCleared,
}

pub fn map_card_to_dto(card: &Card) -> CardDto {
    CardDto {
        id: card.id(),
        rank: card.rank().map(|r| r.symbol().to_string()),
        suit: card.suit().map(|s| s.name().to_string()),
        is_joker: card.is_joker(),
        description: card.describe(),
        symbol: card.symbol(),
    }
}

pub fn map_event_to_dto(event: &Event) -> EventDto {
    let kind = match event.kind {
        EventKind::Draw { .. } => EventKindDto::Draw,
        EventKind::Shuffle => EventKindDto::Shuffle,
    };

    EventDto {
        id: event.id,
        timestamp_ms: event.timestamp_ms,
        kind,
        cards: event.cards().iter().map(map_card_to_dto).collect(),
        deck_count: event.deck_count,
        remaining_cards: event.remaining_cards,
        description: event.description(),
        compact: event.compact_cards(),
    }
}
