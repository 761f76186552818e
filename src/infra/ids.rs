use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{CardId, EventId};

/// Простая генерация ID на основе монотонных счётчиков.
///
/// Один генератор живёт в сессии, поэтому id карт уникальны
/// и между пересборками колоды.
#[derive(Debug)]
pub struct IdGenerator {
    card_counter: AtomicU64,
    event_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            card_counter: AtomicU64::new(1),
            event_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_card_id(&self) -> CardId {
        self.card_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_event_id(&self) -> EventId {
        self.event_counter.fetch_add(1, Ordering::Relaxed)
    }
}
