//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use card_dispenser::domain::*;
use card_dispenser::engine::EngineError;
use card_dispenser::infra::{DeterministicRng, IdGenerator};

fn build(template: DeckTemplate, n: u32, seed: u64) -> Deck {
    let ids = IdGenerator::new();
    let mut rng = DeterministicRng::from_u64(seed);
    Deck::new(template, n, &ids, &mut rng).expect("deck")
}

/// CardFace: Display + FromStr roundtrip.
#[test]
fn card_face_display_and_parse_roundtrip() {
    let faces = [
        CardFace::regular(Rank::Ace, Suit::Hearts),
        CardFace::regular(Rank::Ten, Suit::Spades),
        CardFace::regular(Rank::Two, Suit::Clubs),
        CardFace::regular(Rank::Queen, Suit::Diamonds),
        CardFace::Joker,
    ];

    for face in faces {
        let s = face.to_string();
        let parsed: CardFace = s.parse().expect("parse CardFace from Display string");
        assert_eq!(parsed, face);
    }

    // ASCII-вариант мастей тоже принимается
    assert_eq!(
        "10s".parse::<CardFace>(),
        Ok(CardFace::regular(Rank::Ten, Suit::Spades))
    );
    assert_eq!(
        "Kh".parse::<CardFace>(),
        Ok(CardFace::regular(Rank::King, Suit::Hearts))
    );

    // Неверные строки
    assert!("".parse::<CardFace>().is_err());
    assert!("A".parse::<CardFace>().is_err());
    assert!("1c".parse::<CardFace>().is_err());
    assert!("Ax".parse::<CardFace>().is_err());
}

#[test]
fn suit_colors() {
    assert!(Suit::Hearts.is_red());
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Clubs.is_red());
    assert!(!Suit::Spades.is_red());
}

#[test]
fn standard_deck_single_copy() {
    let deck = build(DeckTemplate::standard_52(), 1, 1);
    assert_eq!(deck.total_possible_cards(), 52);
    assert_eq!(deck.remaining_cards(), 52);

    // каждое лицо ровно один раз, id уникальны
    let comp = deck.composition();
    assert_eq!(comp.len(), 52);
    assert!(comp.values().all(|&n| n == 1));
    let ids: HashSet<_> = deck.cards().iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), 52);
}

#[test]
fn two_decks_with_jokers_has_108_cards() {
    let deck = build(DeckTemplate::standard_54(), 2, 3);
    assert_eq!(deck.total_possible_cards(), 108);
    assert_eq!(deck.remaining_cards(), 108);
    assert_eq!(deck.composition().get(&CardFace::Joker), Some(&4));
    assert_eq!(
        deck.composition()
            .get(&CardFace::regular(Rank::King, Suit::Hearts)),
        Some(&2)
    );
}

#[test]
fn over_draw_is_atomic() {
    let mut deck = build(DeckTemplate::standard_52(), 1, 5);
    assert_eq!(deck.draw_cards(5).unwrap().len(), 5);
    assert_eq!(deck.remaining_cards(), 47);

    let before = deck.cards().to_vec();
    let err = deck.draw_cards(50).unwrap_err();
    assert_eq!(
        err,
        EngineError::NotEnoughCards {
            requested: 50,
            remaining: 47
        }
    );
    assert_eq!(deck.cards(), before.as_slice());
}

#[test]
fn draw_until_empty_then_none() {
    let mut deck = build(DeckTemplate::euchre_24(), 1, 8);
    let mut seen = HashSet::new();
    while let Some(card) = deck.draw() {
        assert!(seen.insert(card.id()));
    }
    assert_eq!(seen.len(), 24);
    assert!(deck.is_empty());
    assert!(deck.draw().is_none());
    assert_eq!(deck.drawn_count(), 24);
}

#[test]
fn shuffle_is_a_full_reset() {
    let mut deck = build(DeckTemplate::standard_52(), 1, 13);
    let full = deck.composition();
    deck.draw_cards(30).unwrap();

    let mut rng = DeterministicRng::from_u64(14);
    deck.shuffle(&mut rng);

    assert_eq!(deck.remaining_cards(), 52);
    assert_eq!(deck.composition(), full);
}

#[test]
fn rebuild_keeps_multiset_but_not_identities() {
    let ids = IdGenerator::new();
    let mut rng = DeterministicRng::from_u64(21);
    let a = Deck::new(DeckTemplate::no_face_cards(), 3, &ids, &mut rng).unwrap();
    let b = Deck::new(DeckTemplate::no_face_cards(), 3, &ids, &mut rng).unwrap();

    assert_eq!(a.composition(), b.composition());

    let ids_a: HashSet<_> = a.cards().iter().map(|c| c.id()).collect();
    assert!(b.cards().iter().all(|c| !ids_a.contains(&c.id())));
    assert_ne!(
        a.cards().iter().map(|c| c.face()).collect::<Vec<_>>(),
        b.cards().iter().map(|c| c.face()).collect::<Vec<_>>()
    );
}

#[test]
fn custom_template_counts() {
    let mut counts = std::collections::BTreeMap::new();
    counts.insert(Rank::Ace, 2);
    counts.insert(Rank::Seven, 0);
    let suits = [Suit::Hearts, Suit::Spades].into_iter().collect();
    let template = DeckTemplate::new(counts, suits, 1);

    assert_eq!(template.total_cards_per_deck(), 5);
    let deck = build(template, 2, 2);
    assert_eq!(deck.total_possible_cards(), 10);
    assert_eq!(deck.deck_count(), 2);
    assert!(deck
        .cards()
        .iter()
        .all(|c| c.is_joker() || c.rank() == Some(Rank::Ace)));
}

/// Колода отдаётся наружу только как снимок: полный набор и остаток.
#[test]
fn deck_snapshot_serializes_full_set_and_pool() {
    let mut deck = build(DeckTemplate::standard_52(), 1, 8);
    deck.draw_cards(2).unwrap();

    let json = serde_json::to_value(&deck).expect("serializable");
    assert_eq!(json["deck_count"], 1);
    assert_eq!(json["full_set"].as_array().map(Vec::len), Some(52));
    assert_eq!(json["pool"].as_array().map(Vec::len), Some(50));
}
