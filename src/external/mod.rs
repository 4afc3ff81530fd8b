mod cache;
mod nominatim;
mod ollama;

pub use cache::CachedGeocoder;
pub use nominatim::{Nominatim, NominatimConfig};
pub use ollama::{Ollama, OllamaConfig};

use async_trait::async_trait;

use crate::{entities::Coordinates, error::Error};

/// Resolves a free-text place name to coordinates.
///
/// `Ok(None)` means the service answered but had no match for the name.
/// `Err` is reserved for the service itself failing.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, Error>;
}

/// Produces free text from a prompt. Single attempt, no retries.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, Error>;
}
