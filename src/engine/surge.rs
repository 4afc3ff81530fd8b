//! Time-of-day and day-of-week surge pricing.

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDateTime, Timelike, Weekday};
use rand::Rng;

use super::helpers::round_to_cents;

pub const BASE_MULTIPLIER: f64 = 1.0;
pub const PEAK_HOUR_SURCHARGE: f64 = 0.5;
pub const WEEKEND_SURCHARGE: f64 = 0.3;
/// Exclusive upper bound of the random fluctuation.
pub const MAX_FLUCTUATION: f64 = 0.5;
pub const MAX_MULTIPLIER: f64 = 2.0;

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Source of the random part of the multiplier, uniform in `[0, MAX_FLUCTUATION)`.
pub trait Fluctuation: Send + Sync {
    fn draw(&self) -> f64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngFluctuation;

impl Fluctuation for ThreadRngFluctuation {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..MAX_FLUCTUATION)
    }
}

/// Morning 07:00-09:59 and evening 17:00-20:59.
pub fn is_peak_hour(hour: u32) -> bool {
    (7..=9).contains(&hour) || (17..=20).contains(&hour)
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Multiplier for a given moment and an already drawn fluctuation.
pub fn surge_multiplier<T: Datelike + Timelike>(at: &T, fluctuation: f64) -> f64 {
    let mut multiplier = BASE_MULTIPLIER;

    if is_peak_hour(at.hour()) {
        multiplier += PEAK_HOUR_SURCHARGE;
    }

    if is_weekend(at.weekday()) {
        multiplier += WEEKEND_SURCHARGE;
    }

    multiplier += fluctuation;

    round_to_cents(multiplier.min(MAX_MULTIPLIER))
}

/// Derives a fresh multiplier on every call; nothing is memoized.
#[derive(Clone)]
pub struct SurgeModel {
    clock: Arc<dyn Clock>,
    fluctuation: Arc<dyn Fluctuation>,
}

impl SurgeModel {
    pub fn new(clock: Arc<dyn Clock>, fluctuation: Arc<dyn Fluctuation>) -> Self {
        Self { clock, fluctuation }
    }

    pub fn multiplier(&self) -> f64 {
        let now = self.clock.now();
        let multiplier = surge_multiplier(&now, self.fluctuation.draw());

        tracing::debug!("surge multiplier {} at {}", multiplier, now);

        multiplier
    }
}

impl Default for SurgeModel {
    fn default() -> Self {
        Self::new(Arc::new(LocalClock), Arc::new(ThreadRngFluctuation))
    }
}
