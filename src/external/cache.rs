use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use super::Geocoder;
use crate::{entities::Coordinates, error::Error};

const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Memoizes successful lookups of another [`Geocoder`] for a fixed TTL.
///
/// Misses and failures are never cached, so an unknown name is looked up
/// again on the next request.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: Cache<String, Coordinates>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    pub fn new(inner: G, ttl: Duration) -> Self {
        Self::with_capacity(inner, ttl, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_capacity(inner: G, ttl: Duration, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        Self { inner, cache }
    }

    fn key(place: &str) -> String {
        place.trim().to_lowercase()
    }
}

#[async_trait]
impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, Error> {
        let key = Self::key(place);

        if let Some(coordinates) = self.cache.get(&key).await {
            tracing::debug!("geocode cache hit");
            return Ok(Some(coordinates));
        }

        let resolved = self.inner.geocode(place).await?;

        if let Some(coordinates) = resolved {
            self.cache.insert(key, coordinates).await;
        }

        Ok(resolved)
    }
}
