use std::sync::Arc;

use cabfare::config::Config;
use cabfare::engine::Engine;
use cabfare::error::Error;
use cabfare::external::{CachedGeocoder, Geocoder, Nominatim, Ollama};
use cabfare::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let nominatim = Nominatim::new(config.nominatim.clone())?;
    let geocoder: Arc<dyn Geocoder> = match config.geocode_cache_ttl {
        Some(ttl) => Arc::new(CachedGeocoder::new(nominatim, ttl)),
        None => Arc::new(nominatim),
    };
    let advisor = Arc::new(Ollama::new(config.ollama.clone())?);

    let engine = Engine::new(geocoder, advisor).with_discount(config.discount.clone());

    serve(engine, &config).await
}
