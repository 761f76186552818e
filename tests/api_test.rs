//! Тесты внешнего API: dispatch / run_query / экспорт журнала.

use card_dispenser::api::*;
use card_dispenser::domain::{Card, CardFace, DeckTemplate, DispenserSettings, Rank, Suit};
use card_dispenser::engine::{DispenserSession, Event, EventKind, HistoryLog, TextForm};
use card_dispenser::infra::{DeterministicRng, FixedClock};

fn session() -> DispenserSession<DeterministicRng, FixedClock> {
    DispenserSession::with_sources(
        DeckTemplate::standard_52(),
        DispenserSettings::default(),
        DeterministicRng::from_u64(2024),
        FixedClock::new(5_000),
    )
    .unwrap()
}

fn draw_event(id: u64, faces: &[CardFace], remaining: usize) -> Event {
    Event {
        id,
        timestamp_ms: 0,
        deck_count: 1,
        remaining_cards: remaining,
        kind: EventKind::Draw {
            cards: faces
                .iter()
                .enumerate()
                .map(|(i, &f)| Card::new(i as u64 + 1, f))
                .collect(),
        },
    }
}

#[test]
fn dispatch_draw_and_status() {
    let mut s = session();

    let resp = dispatch(&mut s, Command::Draw(DrawCommand { count: 5 })).unwrap();
    let CommandResponse::Drawn(event) = resp else {
        panic!("expected Drawn, got {resp:?}");
    };
    assert_eq!(event.kind, EventKindDto::Draw);
    assert_eq!(event.cards.len(), 5);
    assert_eq!(event.remaining_cards, 47);
    assert!(event.compact.is_some());
    assert_eq!(event.timestamp_ms, 5_000);

    let status = run_query(&s, Query::GetStatus).unwrap();
    assert_eq!(
        status,
        QueryResponse::Status(card_dispenser::engine::DeckStatus {
            deck_count: 1,
            remaining_cards: 47,
            total_possible_cards: 52,
        })
    );
}

#[test]
fn dispatch_over_draw_reports_engine_error() {
    let mut s = session();
    dispatch(&mut s, Command::Draw(DrawCommand { count: 47 })).unwrap();

    let err = dispatch(&mut s, Command::Draw(DrawCommand { count: 6 })).unwrap_err();
    assert!(matches!(err, ApiError::EngineError(_)));
    assert_eq!(s.remaining_cards(), 5);
}

#[test]
fn dispatch_rejects_bad_input() {
    let mut s = session();
    assert!(matches!(
        dispatch(&mut s, Command::Draw(DrawCommand { count: 0 })),
        Err(ApiError::BadRequest(_))
    ));
    assert_eq!(
        run_query(
            &s,
            Query::ExportHistory {
                format: ExportFormat::Text(TextForm::Compact),
            }
        ),
        Ok(QueryResponse::Export(String::new()))
    );
    assert!(matches!(
        dispatch(
            &mut s,
            Command::Configure(ConfigureCommand {
                template: DeckTemplate::standard_52(),
                deck_count: 0,
            })
        ),
        Err(ApiError::BadRequest(_))
    ));
    assert!(s.history().is_empty());
}

#[test]
fn dispatch_configure_shuffle_and_clear() {
    let mut s = session();

    let resp = dispatch(
        &mut s,
        Command::Configure(ConfigureCommand {
            template: DeckTemplate::standard_54(),
            deck_count: 2,
        }),
    )
    .unwrap();
    match resp {
        CommandResponse::Configured(status) => assert_eq!(status.total_possible_cards, 108),
        other => panic!("unexpected {other:?}"),
    }

    let resp = dispatch(&mut s, Command::Shuffle).unwrap();
    match resp {
        CommandResponse::Shuffled(Some(ev)) => {
            assert_eq!(ev.kind, EventKindDto::Shuffle);
            assert!(ev.cards.is_empty());
            assert_eq!(ev.compact, None);
            assert_eq!(ev.description, "Deck shuffled (2 deck(s))");
        }
        other => panic!("unexpected {other:?}"),
    }

    assert_eq!(
        dispatch(&mut s, Command::ClearHistory).unwrap(),
        CommandResponse::HistoryCleared
    );
    assert!(s.history().is_empty());
}

#[test]
fn dispatch_settings_and_draw_one() {
    let mut s = session();
    let settings = DispenserSettings {
        clear_history_on_shuffle: true,
        ..DispenserSettings::default()
    };
    assert_eq!(
        dispatch(&mut s, Command::ApplySettings(settings)).unwrap(),
        CommandResponse::SettingsUpdated
    );

    assert!(matches!(
        dispatch(&mut s, Command::DrawOne).unwrap(),
        CommandResponse::Drawn(_)
    ));
    assert_eq!(
        dispatch(&mut s, Command::Shuffle).unwrap(),
        CommandResponse::Shuffled(None)
    );
    assert!(s.history().is_empty());

    let mut empty = DispenserSession::with_sources(
        DeckTemplate::empty(),
        DispenserSettings::default(),
        DeterministicRng::from_u64(1),
        FixedClock::default(),
    )
    .unwrap();
    assert_eq!(
        dispatch(&mut empty, Command::DrawOne).unwrap(),
        CommandResponse::NothingDrawn
    );
}

#[test]
fn card_dto_fields() {
    let king = map_card_to_dto(&Card::new(9, CardFace::regular(Rank::King, Suit::Hearts)));
    assert_eq!(king.rank.as_deref(), Some("K"));
    assert_eq!(king.suit.as_deref(), Some("Hearts"));
    assert!(!king.is_joker);
    assert_eq!(king.description, "King of Hearts");
    assert_eq!(king.symbol, "K♥");

    let joker = map_card_to_dto(&Card::joker(10));
    assert_eq!(joker.rank, None);
    assert_eq!(joker.suit, None);
    assert!(joker.is_joker);
}

#[test]
fn text_export_newest_first() {
    let mut log = HistoryLog::new();
    log.record(draw_event(
        1,
        &[
            CardFace::regular(Rank::King, Suit::Hearts),
            CardFace::regular(Rank::Ten, Suit::Spades),
        ],
        50,
    ));
    log.record(Event {
        id: 2,
        timestamp_ms: 0,
        deck_count: 1,
        remaining_cards: 52,
        kind: EventKind::Shuffle,
    });
    log.record(draw_event(3, &[CardFace::Joker], 51));

    assert_eq!(
        export_history_text(&log, TextForm::Verbose),
        "#3 Joker\n#2 Deck shuffled (1 deck(s))\n#1 King of Hearts, Ten of Spades"
    );
    assert_eq!(
        export_history_text(&log, TextForm::Compact),
        "#3 🃏\n#2 Deck shuffled (1 deck(s))\n#1 K♥ 10♠"
    );
    assert_eq!(export_history_text(&HistoryLog::new(), TextForm::Verbose), "");
}

#[test]
fn json_export_parses_back() {
    let mut s = session();
    dispatch(&mut s, Command::Draw(DrawCommand { count: 2 })).unwrap();
    dispatch(&mut s, Command::Shuffle).unwrap();

    let QueryResponse::Export(json) = run_query(
        &s,
        Query::ExportHistory {
            format: ExportFormat::Json,
        },
    )
    .unwrap() else {
        panic!("expected export");
    };

    let parsed: Vec<EventDto> = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].kind, EventKindDto::Shuffle);
    assert_eq!(parsed[1].cards.len(), 2);

    let QueryResponse::History(view) = run_query(&s, Query::GetHistory).unwrap() else {
        panic!("expected history");
    };
    assert_eq!(view, parsed);
}

#[test]
fn engine_errors_map_to_api_errors() {
    use card_dispenser::engine::EngineError;

    assert!(matches!(
        ApiError::from(EngineError::NotEnoughCards {
            requested: 3,
            remaining: 1
        }),
        ApiError::EngineError(_)
    ));
    assert!(matches!(
        ApiError::from(EngineError::InvalidDeckCount(0)),
        ApiError::BadRequest(_)
    ));
    assert!(matches!(
        ApiError::from(EngineError::InvalidDrawCount),
        ApiError::BadRequest(_)
    ));
}
