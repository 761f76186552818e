use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::card::{Card, CardFace};
use crate::domain::template::DeckTemplate;
use crate::engine::{EngineError, RandomSource};
use crate::infra::ids::IdGenerator;

/// Колода (или несколько колод, смешанных в одну "шузу").
///
/// `pool` — ещё не вытянутые карты, верх колоды = конец вектора.
/// Шаблон и количество колод неизменны на всё время жизни `Deck`;
/// смена конфигурации = новая колода.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Deck {
    template: DeckTemplate,
    deck_count: u32,
    /// Полный набор карт (с фиксированными id), из которого пересобирается пул.
    full_set: Vec<Card>,
    pool: Vec<Card>,
}

impl Deck {
    /// Собрать `deck_count` копий шаблона и сразу перемешать.
    ///
    /// Ошибка только при `deck_count == 0`.
    pub fn new<R: RandomSource>(
        template: DeckTemplate,
        deck_count: u32,
        ids: &IdGenerator,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        if deck_count < 1 {
            return Err(EngineError::InvalidDeckCount(deck_count));
        }

        let faces = template.faces();
        let mut full_set = Vec::with_capacity(faces.len() * deck_count as usize);
        for _ in 0..deck_count {
            full_set.extend(faces.iter().map(|&face| Card::new(ids.next_card_id(), face)));
        }

        let mut deck = Deck {
            template,
            deck_count,
            pool: Vec::with_capacity(full_set.len()),
            full_set,
        };
        deck.shuffle(rng);
        Ok(deck)
    }

    /// Полный сброс: все карты возвращаются в колоду и перемешиваются.
    /// Это не перетасовка остатка.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        self.pool.clear();
        self.pool.extend_from_slice(&self.full_set);
        rng.shuffle(&mut self.pool);
    }

    /// Взять одну карту сверху. `None`, если колода пуста.
    pub fn draw(&mut self) -> Option<Card> {
        self.pool.pop()
    }

    /// Взять `count` карт сверху атомарно: либо все, либо ни одной.
    ///
    /// Карты возвращаются в порядке вытягивания (первая — бывшая верхняя).
    pub fn draw_cards(&mut self, count: usize) -> Result<Vec<Card>, EngineError> {
        let remaining = self.pool.len();
        if count > remaining {
            return Err(EngineError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        let mut drawn = self.pool.split_off(remaining - count);
        drawn.reverse();
        Ok(drawn)
    }

    /// Верхняя карта без извлечения.
    pub fn peek_top(&self) -> Option<&Card> {
        self.pool.last()
    }

    pub fn remaining_cards(&self) -> usize {
        self.pool.len()
    }

    pub fn total_possible_cards(&self) -> usize {
        self.full_set.len()
    }

    pub fn drawn_count(&self) -> usize {
        self.full_set.len() - self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn template(&self) -> &DeckTemplate {
        &self.template
    }

    pub fn deck_count(&self) -> u32 {
        self.deck_count
    }

    /// Оставшиеся карты, последняя — верхняя.
    pub fn cards(&self) -> &[Card] {
        &self.pool
    }

    /// Мультимножество лиц оставшихся карт.
    pub fn composition(&self) -> BTreeMap<CardFace, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.pool {
            *counts.entry(card.face()).or_insert(0) += 1;
        }
        counts
    }
}
