use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde::{Deserialize, Serialize};

use super::Geocoder;
use crate::{
    entities::Coordinates,
    error::{upstream_error, Error},
};

#[derive(Clone, Debug)]
pub struct NominatimConfig {
    pub api_base: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            api_base: "https://nominatim.openstreetmap.org".into(),
            user_agent: "cabfare-geocoder".into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Nominatim returns coordinates as decimal strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    display_name: String,
}

impl Place {
    fn coordinates(&self) -> Result<Coordinates, Error> {
        let latitude: f64 = self.lat.parse().map_err(|_| upstream_error())?;
        let longitude: f64 = self.lon.parse().map_err(|_| upstream_error())?;

        Coordinates::new(latitude, longitude).map_err(|_| upstream_error())
    }
}

/// OpenStreetMap geocoding over `/search`.
#[derive(Debug)]
pub struct Nominatim {
    client: reqwest::Client,
    config: NominatimConfig,
}

impl Nominatim {
    pub fn new(config: NominatimConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Geocoder for Nominatim {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, Error> {
        let url = format!("{}/search", self.config.api_base.trim_end_matches('/'));

        let res = self
            .client
            .get(url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .query(&[("q", place)])
            .query(&[("format", "json")])
            .query(&[("limit", "1")])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        // Includes 429 rate limiting and 403 for a refused user agent.
        if status_code != 200 {
            tracing::warn!("nominatim answered {} for {:?}", status_code, place);
            return Err(upstream_error());
        }

        let data: Vec<Place> = res.json().await?;

        match data.first() {
            Some(found) => {
                tracing::debug!("resolved {:?} to {:?}", place, found.display_name);
                Ok(Some(found.coordinates()?))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn geocoder(server: &MockServer) -> Nominatim {
        Nominatim::new(NominatimConfig {
            api_base: server.uri(),
            user_agent: "cabfare-test".into(),
            timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn resolves_first_match() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Koramangala"))
            .and(query_param("format", "json"))
            .and(header("user-agent", "cabfare-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"lat": "12.9352", "lon": "77.6245", "display_name": "Koramangala, Bengaluru"},
                {"lat": "0.0", "lon": "0.0", "display_name": "elsewhere"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let coordinates = geocoder(&server).geocode("Koramangala").await.unwrap();

        assert_eq!(coordinates, Some(Coordinates::new(12.9352, 77.6245).unwrap()));
    }

    #[tokio::test]
    async fn empty_result_is_no_match() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        assert_eq!(geocoder(&server).geocode("Atlantis").await.unwrap(), None);
    }

    #[tokio::test]
    async fn server_failure_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = geocoder(&server).geocode("Indiranagar").await.unwrap_err();

        assert_eq!(err, upstream_error());
    }

    #[tokio::test]
    async fn client_errors_from_nominatim_are_upstream_errors() {
        for status in [403, 429] {
            let server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(path("/search"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;

            let err = geocoder(&server).geocode("Koramangala").await.unwrap_err();

            assert_eq!(err, upstream_error(), "status {}", status);
        }
    }

    #[tokio::test]
    async fn garbled_coordinates_are_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"lat": "north", "lon": "77.6", "display_name": "?"}
            ])))
            .mount(&server)
            .await;

        let err = geocoder(&server).geocode("Whitefield").await.unwrap_err();

        assert_eq!(err.code, 4);
    }
}
