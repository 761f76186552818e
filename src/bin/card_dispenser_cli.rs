// src/bin/card_dispenser_cli.rs

use std::io::{self, BufRead, Write};

use card_dispenser::api::{
    dispatch, run_query, ApiError, Command, CommandResponse, ConfigureCommand, DrawCommand,
    EventDto, ExportFormat, Query, QueryResponse,
};
use card_dispenser::domain::{DeckTemplate, DispenserSettings, PRESET_NAMES};
use card_dispenser::engine::{DispenserSession, TextForm};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Команды:
  draw [N]                   вытянуть N карт (по умолчанию 1)
  shuffle                    полный сброс колоды
  decks N                    количество колод
  jokers on|off              джокеры
  preset NAME                шаблон колоды
  history                    показать журнал
  history on|off             включить/выключить журнал
  clear-on-shuffle on|off    очищать журнал при перемешивании
  clear                      очистить журнал
  export text|compact|json   экспорт журнала
  status                     сколько карт осталось
  help / quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("card_dispenser_cli: стандартная колода, 1 шт. Введите `help`.");

    let mut session = match DispenserSession::new(
        DeckTemplate::standard_52(),
        DispenserSettings::default(),
    ) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Не удалось создать сессию: {err}");
            return;
        }
    };
    // Отдельная копия настроек: команды jokers/decks меняют её и применяют целиком.
    let mut settings = session.settings().clone();

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let words: Vec<&str> = line.split_whitespace().collect();

        let result = match words.as_slice() {
            [] => Ok(()),
            ["quit"] | ["exit"] => break,
            ["help"] => {
                println!("{HELP}");
                Ok(())
            }
            ["draw"] => run(&mut session, Command::DrawOne),
            ["draw", n] => match n.parse::<usize>() {
                Ok(count) => run(&mut session, Command::Draw(DrawCommand { count })),
                Err(_) => Err(ApiError::BadRequest(format!("Не число: {n}"))),
            },
            ["shuffle"] => run(&mut session, Command::Shuffle),
            ["clear"] => run(&mut session, Command::ClearHistory),
            ["decks", n] => match n.parse::<u32>() {
                Ok(deck_count) => {
                    settings.deck_count = deck_count;
                    run(&mut session, Command::ApplySettings(settings.clone()))
                }
                Err(_) => Err(ApiError::BadRequest(format!("Не число: {n}"))),
            },
            ["jokers", flag] => on_off(flag).and_then(|on| {
                settings.include_jokers = on;
                run(&mut session, Command::ApplySettings(settings.clone()))
            }),
            ["history", flag] => on_off(flag).and_then(|on| {
                settings.history_enabled = on;
                run(&mut session, Command::ApplySettings(settings.clone()))
            }),
            ["clear-on-shuffle", flag] => on_off(flag).and_then(|on| {
                settings.clear_history_on_shuffle = on;
                run(&mut session, Command::ApplySettings(settings.clone()))
            }),
            ["preset", name] => match DeckTemplate::preset(name) {
                Some(template) => {
                    let deck_count = settings.deck_count;
                    let res = run(
                        &mut session,
                        Command::Configure(ConfigureCommand {
                            template,
                            deck_count,
                        }),
                    );
                    settings = session.settings().clone();
                    res
                }
                None => Err(ApiError::BadRequest(format!(
                    "Неизвестный пресет {name}; доступны: {}",
                    PRESET_NAMES.join(", ")
                ))),
            },
            ["history"] => query(&session, Query::GetHistory),
            ["status"] => query(&session, Query::GetStatus),
            ["export", fmt] => {
                let format = match *fmt {
                    "text" => Some(ExportFormat::Text(TextForm::Verbose)),
                    "compact" => Some(ExportFormat::Text(TextForm::Compact)),
                    "json" => Some(ExportFormat::Json),
                    _ => None,
                };
                match format {
                    Some(format) => query(&session, Query::ExportHistory { format }),
                    None => Err(ApiError::BadRequest(format!("Неизвестный формат: {fmt}"))),
                }
            }
            _ => Err(ApiError::BadRequest(format!("Неизвестная команда: {line}"))),
        };

        if let Err(err) = result {
            println!("Ошибка: {err:?}");
        }
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn on_off(flag: &str) -> Result<bool, ApiError> {
    match flag {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(ApiError::BadRequest(format!("Ожидалось on|off, получено {flag}"))),
    }
}

fn run(session: &mut DispenserSession, command: Command) -> Result<(), ApiError> {
    match dispatch(session, command)? {
        CommandResponse::Configured(status) => println!(
            "Колода пересобрана: {} колод(ы), {}/{} карт",
            status.deck_count, status.remaining_cards, status.total_possible_cards
        ),
        CommandResponse::SettingsUpdated => println!("Настройки применены"),
        CommandResponse::Drawn(event) => print_event(&event),
        CommandResponse::NothingDrawn => println!("Колода пуста"),
        CommandResponse::Shuffled(Some(event)) => print_event(&event),
        CommandResponse::Shuffled(None) => println!("Колода перемешана, журнал очищен"),
        CommandResponse::HistoryCleared => println!("Журнал очищен"),
    }
    Ok(())
}

fn query(session: &DispenserSession, query: Query) -> Result<(), ApiError> {
    match run_query(session, query)? {
        QueryResponse::Status(status) => println!(
            "Осталось {} из {} ({} колод(ы))",
            status.remaining_cards, status.total_possible_cards, status.deck_count
        ),
        QueryResponse::History(events) => {
            if events.is_empty() {
                println!("Журнал пуст");
            }
            for event in &events {
                print_event(event);
            }
        }
        QueryResponse::Export(text) => println!("{text}"),
    }
    Ok(())
}

fn print_event(event: &EventDto) {
    match &event.compact {
        Some(compact) => println!(
            "#{} {} [{}] | осталось {}",
            event.id, compact, event.description, event.remaining_cards
        ),
        None => println!(
            "#{} {} | осталось {}",
            event.id, event.description, event.remaining_cards
        ),
    }
}
