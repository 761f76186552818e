use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::deck::Deck;
use crate::domain::settings::DispenserSettings;
use crate::domain::template::DeckTemplate;
use crate::engine::history::{Event, EventKind, HistoryLog};
use crate::engine::{EngineError, RandomSource};
use crate::infra::clock::{Clock, SystemClock};
use crate::infra::ids::IdGenerator;
use crate::infra::rng::SystemRng;

/// Снимок размеров колоды после конфигурации.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckStatus {
    pub deck_count: u32,
    pub remaining_cards: usize,
    pub total_possible_cards: usize,
}

/// Сессия раздатчика: одна колода + журнал + настройки.
///
/// Все изменения синхронные и происходят только в ответ на вызов:
/// `configure`, `draw`, `shuffle`, `apply_settings`.
/// Любая смена шаблона или количества колод = полная пересборка + перемешивание,
/// которая попадает в журнал как обычный Shuffle.
pub struct DispenserSession<R: RandomSource = SystemRng, C: Clock = SystemClock> {
    settings: DispenserSettings,
    /// Шаблон без учёта переключателя джокеров.
    base_template: DeckTemplate,
    deck: Deck,
    history: HistoryLog,
    ids: IdGenerator,
    rng: R,
    clock: C,
}

impl DispenserSession {
    /// Сессия с системным RNG и системными часами.
    pub fn new(template: DeckTemplate, settings: DispenserSettings) -> Result<Self, EngineError> {
        Self::with_sources(template, settings, SystemRng, SystemClock)
    }
}

impl<R: RandomSource, C: Clock> DispenserSession<R, C> {
    /// Сессия с явными источниками случайности и времени (для тестов и реплея).
    ///
    /// Начальная сборка колоды в журнал не пишется.
    pub fn with_sources(
        template: DeckTemplate,
        settings: DispenserSettings,
        mut rng: R,
        clock: C,
    ) -> Result<Self, EngineError> {
        settings.validate()?;

        let ids = IdGenerator::new();
        let effective = settings.effective_template(&template);
        let deck = Deck::new(effective, settings.deck_count, &ids, &mut rng)?;

        debug!(
            deck_count = settings.deck_count,
            total = deck.total_possible_cards(),
            "dispenser session created"
        );

        Ok(Self {
            settings,
            base_template: template,
            deck,
            history: HistoryLog::new(),
            ids,
            rng,
            clock,
        })
    }

    /// Пересобрать колоду из `template` × `deck_count` и перемешать.
    ///
    /// Шаблон берётся как есть; переключатель джокеров в настройках
    /// подстраивается под него. Пересборка журналируется как Shuffle.
    pub fn configure(
        &mut self,
        template: DeckTemplate,
        deck_count: u32,
    ) -> Result<DeckStatus, EngineError> {
        if deck_count < 1 {
            return Err(EngineError::InvalidDeckCount(deck_count));
        }

        self.settings.deck_count = deck_count;
        self.settings.include_jokers = template.number_of_jokers > 0;
        if template.number_of_jokers > 0 {
            self.settings.jokers_per_deck = template.number_of_jokers;
        }
        self.base_template = template.clone();

        self.rebuild(template, deck_count)?;
        Ok(self.status())
    }

    /// Сменить шаблон, сохранив количество колод. Подразумевает `configure`.
    pub fn set_template(&mut self, template: DeckTemplate) -> Result<DeckStatus, EngineError> {
        let deck_count = self.deck.deck_count();
        self.configure(template, deck_count)
    }

    /// Сменить количество колод, сохранив шаблон. Подразумевает `configure`.
    pub fn set_deck_count(&mut self, deck_count: u32) -> Result<DeckStatus, EngineError> {
        let template = self.deck.template().clone();
        self.configure(template, deck_count)
    }

    /// Применить новые настройки целиком.
    ///
    /// Если меняется итоговый шаблон (джокеры) или количество колод —
    /// колода пересобирается и возвращается её статус.
    /// Иначе меняются только флаги журнала и возвращается `None`.
    pub fn apply_settings(
        &mut self,
        settings: DispenserSettings,
    ) -> Result<Option<DeckStatus>, EngineError> {
        settings.validate()?;

        let template = settings.effective_template(&self.base_template);
        let recompose =
            template != *self.deck.template() || settings.deck_count != self.deck.deck_count();
        self.settings = settings;

        if !recompose {
            return Ok(None);
        }

        let deck_count = self.settings.deck_count;
        self.rebuild(template, deck_count)?;
        Ok(Some(self.status()))
    }

    /// Вытянуть `count` карт атомарно.
    ///
    /// `count == 0` отсекается на границе. Если карт не хватает — ошибка,
    /// колода и журнал не меняются.
    pub fn draw(&mut self, count: usize) -> Result<Event, EngineError> {
        if count == 0 {
            return Err(EngineError::InvalidDrawCount);
        }

        let cards = match self.deck.draw_cards(count) {
            Ok(cards) => cards,
            Err(err) => {
                warn!(
                    requested = count,
                    remaining = self.deck.remaining_cards(),
                    "draw rejected"
                );
                return Err(err);
            }
        };

        debug!(
            drawn = cards.len(),
            remaining = self.deck.remaining_cards(),
            "cards drawn"
        );

        let event = self.make_event(EventKind::Draw { cards });
        self.record(&event);
        Ok(event)
    }

    /// Вытянуть одну карту. `None`, если колода пуста (это не ошибка).
    pub fn draw_one(&mut self) -> Option<Event> {
        let card = self.deck.draw()?;
        debug!(card = %card, remaining = self.deck.remaining_cards(), "card drawn");

        let event = self.make_event(EventKind::Draw { cards: vec![card] });
        self.record(&event);
        Some(event)
    }

    /// Полный сброс колоды с перемешиванием.
    ///
    /// При `clear_history_on_shuffle` журнал очищается и события нет;
    /// иначе возвращается событие Shuffle (записанное, если журнал включён).
    pub fn shuffle(&mut self) -> Option<Event> {
        self.deck.shuffle(&mut self.rng);
        debug!(
            deck_count = self.deck.deck_count(),
            remaining = self.deck.remaining_cards(),
            "deck shuffled"
        );
        self.after_shuffle()
    }

    pub fn remaining_cards(&self) -> usize {
        self.deck.remaining_cards()
    }

    pub fn total_possible_cards(&self) -> usize {
        self.deck.total_possible_cards()
    }

    pub fn status(&self) -> DeckStatus {
        DeckStatus {
            deck_count: self.deck.deck_count(),
            remaining_cards: self.deck.remaining_cards(),
            total_possible_cards: self.deck.total_possible_cards(),
        }
    }

    /// Журнал (новые первыми, не больше 50).
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        info!("history cleared");
    }

    pub fn set_history_enabled(&mut self, enabled: bool) {
        self.settings.history_enabled = enabled;
    }

    pub fn set_clear_history_on_shuffle(&mut self, clear: bool) {
        self.settings.clear_history_on_shuffle = clear;
    }

    pub fn settings(&self) -> &DispenserSettings {
        &self.settings
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Новая колода вместо старой + журналирование как у shuffle.
    fn rebuild(&mut self, template: DeckTemplate, deck_count: u32) -> Result<(), EngineError> {
        self.deck = Deck::new(template, deck_count, &self.ids, &mut self.rng)?;
        debug!(
            deck_count,
            total = self.deck.total_possible_cards(),
            "deck reconfigured"
        );
        self.after_shuffle();
        Ok(())
    }

    fn after_shuffle(&mut self) -> Option<Event> {
        if self.settings.clear_history_on_shuffle {
            self.clear_history();
            return None;
        }

        let event = self.make_event(EventKind::Shuffle);
        self.record(&event);
        Some(event)
    }

    fn record(&mut self, event: &Event) {
        if self.settings.history_enabled {
            self.history.record(event.clone());
        }
    }

    fn make_event(&self, kind: EventKind) -> Event {
        Event {
            id: self.ids.next_event_id(),
            timestamp_ms: self.clock.now_ms(),
            deck_count: self.deck.deck_count(),
            remaining_cards: self.deck.remaining_cards(),
            kind,
        }
    }
}
