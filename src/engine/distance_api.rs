use super::Engine;

use async_trait::async_trait;
use geo::GeodesicDistance;
use geo_types::Point;

use crate::{
    api::DistanceAPI,
    entities::{Coordinates, Distance, LocationSide},
    error::{invalid_input_error, location_not_found_error, Error},
};

use super::helpers::round_to_cents;

/// Geodesic distance on the WGS84 ellipsoid, in kilometers.
pub fn great_circle_km(origin: Coordinates, destination: Coordinates) -> f64 {
    if origin == destination {
        return 0.0;
    }

    let origin: Point<f64> = origin.into();
    let destination: Point<f64> = destination.into();

    origin.geodesic_distance(&destination) / 1000.0
}

impl Engine {
    /// Resolves both names (one lookup each) and returns the rounded distance.
    #[tracing::instrument(skip(self))]
    pub(super) async fn measure(&self, pickup: &str, dropoff: &str) -> Result<f64, Error> {
        if pickup.trim().is_empty() || dropoff.trim().is_empty() {
            return Err(invalid_input_error());
        }

        let (origin, destination) = futures::join!(
            self.geocoder.geocode(pickup),
            self.geocoder.geocode(dropoff)
        );

        let side = match (origin?, destination?) {
            (Some(origin), Some(destination)) => {
                return Ok(round_to_cents(great_circle_km(origin, destination)));
            }
            (None, Some(_)) => LocationSide::Pickup,
            (Some(_), None) => LocationSide::Dropoff,
            (None, None) => LocationSide::Both,
        };

        tracing::warn!("could not resolve {} location", side);

        Err(location_not_found_error(side))
    }
}

#[async_trait]
impl DistanceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_distance(&self, pickup: &str, dropoff: &str) -> Result<Distance, Error> {
        let distance_km = self.measure(pickup, dropoff).await?;

        Ok(Distance {
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_km,
        })
    }
}
