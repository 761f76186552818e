use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::CardId;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    /// Все масти в каноническом порядке.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Красная масть (бубны/черви) — пригодится слою отображения.
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

/// Ранг карты. Туз идёт первым, как в классической колоде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Все ранги: A, 2..10, J, Q, K.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Полное имя ранга для "многословного" текста ("King of Hearts").
    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// Короткий символ ранга для компактного вида ("K♥", "10♠").
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Картинка (валет, дама, король).
    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// "Лицо" карты без идентичности: что на ней нарисовано.
///
/// У джокера нет ни ранга, ни масти — поэтому отдельный вариант,
/// а не пустые строки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum CardFace {
    Regular { rank: Rank, suit: Suit },
    Joker,
}

impl CardFace {
    pub const fn regular(rank: Rank, suit: Suit) -> Self {
        CardFace::Regular { rank, suit }
    }

    /// Многословное описание: "King of Hearts", "Joker".
    pub fn describe(&self) -> String {
        match self {
            CardFace::Regular { rank, suit } => format!("{} of {}", rank.name(), suit.name()),
            CardFace::Joker => "Joker".to_string(),
        }
    }

    /// Компактный вид: "K♥", "10♠", "🃏".
    pub fn symbol(&self) -> String {
        match self {
            CardFace::Regular { rank, suit } => format!("{}{}", rank.symbol(), suit.symbol()),
            CardFace::Joker => "🃏".to_string(),
        }
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}

/// Физическая карта в колоде.
///
/// Две карты с одинаковым лицом (мульти-колода) — всё равно разные карты:
/// их различает `id`. После создания карта не меняется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    face: CardFace,
}

impl Card {
    pub const fn new(id: CardId, face: CardFace) -> Self {
        Self { id, face }
    }

    pub const fn joker(id: CardId) -> Self {
        Self {
            id,
            face: CardFace::Joker,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    /// Ранг; `None` для джокера.
    pub fn rank(&self) -> Option<Rank> {
        match self.face {
            CardFace::Regular { rank, .. } => Some(rank),
            CardFace::Joker => None,
        }
    }

    /// Масть; `None` для джокера.
    pub fn suit(&self) -> Option<Suit> {
        match self.face {
            CardFace::Regular { suit, .. } => Some(suit),
            CardFace::Joker => None,
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self.face, CardFace::Joker)
    }

    pub fn describe(&self) -> String {
        self.face.describe()
    }

    pub fn symbol(&self) -> String {
        self.face.symbol()
    }
}

impl fmt::Display for Card {
    /// Компактный вид, как у `CardFace`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.face, f)
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "A" | "ACE" => Rank::Ace,
            "2" | "TWO" => Rank::Two,
            "3" | "THREE" => Rank::Three,
            "4" | "FOUR" => Rank::Four,
            "5" | "FIVE" => Rank::Five,
            "6" | "SIX" => Rank::Six,
            "7" | "SEVEN" => Rank::Seven,
            "8" | "EIGHT" => Rank::Eight,
            "9" | "NINE" => Rank::Nine,
            "10" | "T" | "TEN" => Rank::Ten,
            "J" | "JACK" => Rank::Jack,
            "Q" | "QUEEN" => Rank::Queen,
            "K" | "KING" => Rank::King,
            _ => return Err(format!("Invalid rank: {s}")),
        };
        Ok(rank)
    }
}

impl FromStr for Suit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s.to_ascii_lowercase().as_str() {
            "c" | "♣" | "clubs" => Suit::Clubs,
            "d" | "♦" | "diamonds" => Suit::Diamonds,
            "h" | "♥" | "hearts" => Suit::Hearts,
            "s" | "♠" | "spades" => Suit::Spades,
            _ => return Err(format!("Invalid suit: {s}")),
        };
        Ok(suit)
    }
}

/// Парсинг компактного вида: "K♥", "10s", "Ah", "🃏" / "JK" для джокера.
impl FromStr for CardFace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "🃏" || s.eq_ignore_ascii_case("jk") || s.eq_ignore_ascii_case("joker") {
            return Ok(CardFace::Joker);
        }

        // Масть — последний символ (может быть многобайтным, например '♥').
        let (split_at, _) = s
            .char_indices()
            .last()
            .ok_or_else(|| "Card string must not be empty".to_string())?;
        if split_at == 0 {
            return Err(format!("Card string too short: {s}"));
        }

        let rank: Rank = s[..split_at].parse()?;
        let suit: Suit = s[split_at..].parse()?;
        Ok(CardFace::regular(rank, suit))
    }
}
