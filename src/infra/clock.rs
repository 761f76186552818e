use std::cell::Cell;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Источник времени для меток событий.
pub trait Clock {
    /// Текущее Unix-время в миллисекундах.
    fn now_ms(&self) -> u64;
}

/// Системные часы.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // Часы до 1970 года считаем нулём, а не ошибкой.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(saturating_millis)
            .unwrap_or(0)
    }
}

/// Миллисекунды в `u64`; всё, что не влезает, упирается в `u64::MAX`.
fn saturating_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Ручные часы для тестов: время двигается только через `advance`.
#[derive(Clone, Debug, Default)]
pub struct FixedClock {
    now: Cell<u64>,
}

impl FixedClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_moves_only_on_advance() {
        let clock = FixedClock::new(10);
        assert_eq!(clock.now_ms(), 10);
        clock.advance(5);
        assert_eq!(clock.now_ms(), 15);
    }

    #[test]
    fn huge_durations_saturate() {
        assert_eq!(saturating_millis(Duration::from_millis(1_234)), 1_234);
        assert_eq!(saturating_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}
