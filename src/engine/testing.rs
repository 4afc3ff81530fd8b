//! Stubs shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};

use super::surge::{Clock, Fluctuation, SurgeModel};
use super::Engine;
use crate::{
    entities::Coordinates,
    error::{upstream_error, Error},
    external::{Geocoder, TextGenerator},
};

/// A moment in the week of 2024-01-01, which was a Monday.
pub fn at(weekday: Weekday, hour: u32) -> NaiveDateTime {
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap();

    monday + Duration::days(weekday.num_days_from_monday() as i64)
}

pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub struct FixedFluctuation(pub f64);

impl Fluctuation for FixedFluctuation {
    fn draw(&self) -> f64 {
        self.0
    }
}

pub struct StubGeocoder {
    places: HashMap<String, Coordinates>,
    calls: Arc<AtomicUsize>,
    failing: bool,
}

impl StubGeocoder {
    pub fn bangalore() -> Self {
        let places = [
            ("Koramangala", 12.9352, 77.6245),
            ("MG Road", 12.9756, 77.6050),
            ("Indiranagar", 12.9784, 77.6408),
            ("Whitefield", 12.9698, 77.7500),
        ]
        .into_iter()
        .map(|(name, latitude, longitude)| {
            (
                name.to_lowercase(),
                Coordinates::new(latitude, longitude).unwrap(),
            )
        })
        .collect();

        Self {
            places,
            calls: Arc::new(AtomicUsize::new(0)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::bangalore()
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing {
            return Err(upstream_error());
        }

        Ok(self.places.get(&place.trim().to_lowercase()).copied())
    }
}

pub struct StubGenerator {
    reply: Result<String, Error>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Err(upstream_error()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        self.prompts.lock().unwrap().push(prompt.into());
        self.reply.clone()
    }
}

/// Engine pinned to Tuesday 11:00 with a 0.2 fluctuation, i.e. a 1.2 surge.
pub fn engine_with(geocoder: StubGeocoder, generator: StubGenerator) -> Engine {
    engine_at(geocoder, generator, Weekday::Tue, 11, 0.2)
}

pub fn engine_at(
    geocoder: StubGeocoder,
    generator: StubGenerator,
    weekday: Weekday,
    hour: u32,
    fluctuation: f64,
) -> Engine {
    let surge = SurgeModel::new(
        Arc::new(FixedClock(at(weekday, hour))),
        Arc::new(FixedFluctuation(fluctuation)),
    );

    Engine::new(Arc::new(geocoder), Arc::new(generator)).with_surge_model(surge)
}
