use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::settings::HISTORY_CAPACITY;
use crate::domain::EventId;

/// Какая из двух текстовых форм нужна.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TextForm {
    /// "King of Hearts, Two of Clubs"
    Verbose,
    /// "K♥ 2♣"
    Compact,
}

/// Тип события.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventKind {
    /// Вытянуты карты (одна или пачка), в порядке вытягивания.
    Draw { cards: Vec<Card> },

    /// Колода пересобрана и перемешана.
    Shuffle,
}

/// Запись в журнале: что произошло и снимок колоды сразу после этого.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    /// Unix-время в миллисекундах.
    pub timestamp_ms: u64,
    pub deck_count: u32,
    /// Сколько карт осталось после события.
    pub remaining_cards: usize,
    pub kind: EventKind,
}

impl Event {
    pub fn is_draw(&self) -> bool {
        matches!(self.kind, EventKind::Draw { .. })
    }

    pub fn is_shuffle(&self) -> bool {
        matches!(self.kind, EventKind::Shuffle)
    }

    /// Вытянутые карты; пусто для Shuffle.
    pub fn cards(&self) -> &[Card] {
        match &self.kind {
            EventKind::Draw { cards } => cards,
            EventKind::Shuffle => &[],
        }
    }

    /// Многословное описание события.
    pub fn description(&self) -> String {
        match &self.kind {
            EventKind::Draw { cards } => cards
                .iter()
                .map(Card::describe)
                .collect::<Vec<_>>()
                .join(", "),
            EventKind::Shuffle => format!("Deck shuffled ({} deck(s))", self.deck_count),
        }
    }

    /// Компактные символы карт; у Shuffle такой формы нет.
    pub fn compact_cards(&self) -> Option<String> {
        match &self.kind {
            EventKind::Draw { cards } => Some(
                cards
                    .iter()
                    .map(Card::symbol)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            EventKind::Shuffle => None,
        }
    }

    /// Текст в нужной форме. Для Shuffle компактная форма = описание.
    pub fn render(&self, form: TextForm) -> String {
        match form {
            TextForm::Verbose => self.description(),
            TextForm::Compact => self
                .compact_cards()
                .unwrap_or_else(|| self.description()),
        }
    }
}

/// Журнал событий: новые в начале, не больше `HISTORY_CAPACITY` записей.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct HistoryLog {
    events: VecDeque<Event>,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Добавить событие в начало; самое старое вытесняется при переполнении.
    pub fn record(&mut self, event: Event) {
        self.events.push_front(event);
        while self.events.len() > HISTORY_CAPACITY {
            self.events.pop_back();
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }

    /// Самое свежее событие.
    pub fn latest(&self) -> Option<&Event> {
        self.events.front()
    }

    /// От новых к старым.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Копия журнала (новые первыми).
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.iter().cloned().collect()
    }
}
