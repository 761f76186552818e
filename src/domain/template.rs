use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::card::{CardFace, Rank, Suit};

/// Рецепт одной физической колоды.
///
/// Чистые данные: какие ранги и сколько копий каждого,
/// какие масти участвуют и сколько джокеров.
/// Пустой шаблон валиден и даёт пустую колоду.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckTemplate {
    /// Ранг -> сколько раз он встречается в каждой масти.
    pub rank_counts: BTreeMap<Rank, u32>,
    pub included_suits: BTreeSet<Suit>,
    pub number_of_jokers: u32,
}

/// Имена пресетов, которые понимает `DeckTemplate::preset`.
pub const PRESET_NAMES: [&str; 6] = [
    "standard",
    "jokers",
    "no-faces",
    "piquet",
    "euchre",
    "empty",
];

impl DeckTemplate {
    pub fn new(
        rank_counts: BTreeMap<Rank, u32>,
        included_suits: BTreeSet<Suit>,
        number_of_jokers: u32,
    ) -> Self {
        Self {
            rank_counts,
            included_suits,
            number_of_jokers,
        }
    }

    /// Пустой шаблон (0 карт).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Стандартные 52 карты: 13 рангов × 4 масти, без джокеров.
    pub fn standard_52() -> Self {
        Self {
            rank_counts: Rank::ALL.iter().map(|&r| (r, 1)).collect(),
            included_suits: Suit::ALL.iter().copied().collect(),
            number_of_jokers: 0,
        }
    }

    /// 52 + 2 джокера.
    pub fn standard_54() -> Self {
        Self::standard_52().with_jokers(2)
    }

    /// Без картинок: A, 2..10 во всех мастях (40 карт).
    pub fn no_face_cards() -> Self {
        Rank::ALL
            .iter()
            .filter(|r| r.is_face())
            .fold(Self::standard_52(), |t, &r| t.without_rank(r))
    }

    /// Пикет: 7..10, J, Q, K, A (32 карты).
    pub fn piquet_32() -> Self {
        [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]
            .iter()
            .fold(Self::standard_52(), |t, &r| t.without_rank(r))
    }

    /// Юкер: 9..10, J, Q, K, A (24 карты).
    pub fn euchre_24() -> Self {
        Self::piquet_32()
            .without_rank(Rank::Seven)
            .without_rank(Rank::Eight)
    }

    /// Пресет по имени (см. `PRESET_NAMES`).
    pub fn preset(name: &str) -> Option<Self> {
        let template = match name {
            "standard" => Self::standard_52(),
            "jokers" => Self::standard_54(),
            "no-faces" => Self::no_face_cards(),
            "piquet" => Self::piquet_32(),
            "euchre" => Self::euchre_24(),
            "empty" => Self::empty(),
            _ => return None,
        };
        Some(template)
    }

    /// Задать количество копий ранга (0 эквивалентен удалению).
    pub fn with_rank_count(mut self, rank: Rank, count: u32) -> Self {
        if count == 0 {
            self.rank_counts.remove(&rank);
        } else {
            self.rank_counts.insert(rank, count);
        }
        self
    }

    pub fn without_rank(mut self, rank: Rank) -> Self {
        self.rank_counts.remove(&rank);
        self
    }

    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.included_suits.insert(suit);
        self
    }

    pub fn without_suit(mut self, suit: Suit) -> Self {
        self.included_suits.remove(&suit);
        self
    }

    pub fn with_jokers(mut self, jokers: u32) -> Self {
        self.number_of_jokers = jokers;
        self
    }

    /// Сколько карт одной масти даёт шаблон.
    pub fn cards_per_suit(&self) -> usize {
        self.rank_counts.values().map(|&c| c as usize).sum()
    }

    /// `|масти| × Σ копий рангов + джокеры`.
    pub fn total_cards_per_deck(&self) -> usize {
        self.included_suits.len() * self.cards_per_suit() + self.number_of_jokers as usize
    }

    /// Лица карт одной колоды в каноническом порядке:
    /// масть за мастью, ранги по возрастанию, затем джокеры.
    pub fn faces(&self) -> Vec<CardFace> {
        let mut faces = Vec::with_capacity(self.total_cards_per_deck());
        for &suit in &self.included_suits {
            for (&rank, &count) in &self.rank_counts {
                for _ in 0..count {
                    faces.push(CardFace::regular(rank, suit));
                }
            }
        }
        faces.extend((0..self.number_of_jokers).map(|_| CardFace::Joker));
        faces
    }
}
