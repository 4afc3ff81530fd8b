mod handlers;

use std::sync::Arc;

use axum::{extract::Extension, http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::handlers::{advisories, distances, fares, root};
use crate::{
    api::API,
    config::Config,
    error::{unexpected_error, Error},
};

pub use handlers::root::WELCOME_MESSAGE;

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router(api: DynAPI, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root::welcome))
        .route("/distance", get(distances::find))
        .route("/fare", get(fares::quote))
        .route("/bmtc", get(advisories::bmtc))
        .route("/best-route", get(advisories::best_route))
        .layer(Extension(api))
        .layer(cors(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Any method and header, with credentials, but only from the listed origins.
///
/// Credentialed responses may not use the `*` wildcard, so methods and headers
/// mirror the preflight request instead.
fn cors(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, config: &Config) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;

    let app = router(api, &config.allowed_origins);

    tracing::info!("listening on {}", config.addr);

    axum::Server::bind(&config.addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        return;
    }

    tracing::info!("shutting down");
}
