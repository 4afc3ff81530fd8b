use async_trait::async_trait;

use crate::entities::{Distance, FareQuote};
use crate::error::Error;

#[async_trait]
pub trait DistanceAPI {
    async fn find_distance(&self, pickup: &str, dropoff: &str) -> Result<Distance, Error>;
}

#[async_trait]
pub trait FareAPI {
    async fn quote_fare(
        &self,
        pickup: &str,
        dropoff: &str,
        cab_type: &str,
        coupon_code: Option<&str>,
    ) -> Result<FareQuote, Error>;
}

#[async_trait]
pub trait AdvisoryAPI {
    async fn suggest_bmtc_routes(&self, pickup: &str) -> Result<String, Error>;
    async fn suggest_best_route(&self, pickup: &str, dropoff: &str) -> Result<String, Error>;
}

pub trait API: DistanceAPI + FareAPI + AdvisoryAPI {}
