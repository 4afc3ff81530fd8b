mod advisory_api;
mod distance_api;
mod fare_api;
mod helpers;
pub mod surge;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

pub use advisory_api::{best_route_prompt, bmtc_prompt};
pub use distance_api::great_circle_km;
pub use fare_api::{estimate_fare, MINUTES_PER_KM};
pub use helpers::round_to_cents;
pub use surge::SurgeModel;

use crate::{
    api::API,
    entities::{FlatDiscount, PricingTable},
    external::{Geocoder, TextGenerator},
};

/// Stateless between requests; everything it holds is read-only.
pub struct Engine {
    geocoder: Arc<dyn Geocoder>,
    advisor: Arc<dyn TextGenerator>,
    pricing: PricingTable,
    discount: FlatDiscount,
    surge: SurgeModel,
}

impl Engine {
    pub fn new(geocoder: Arc<dyn Geocoder>, advisor: Arc<dyn TextGenerator>) -> Self {
        Self {
            geocoder,
            advisor,
            pricing: PricingTable::default(),
            discount: FlatDiscount::default(),
            surge: SurgeModel::default(),
        }
    }

    pub fn with_pricing(mut self, pricing: PricingTable) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_discount(mut self, discount: FlatDiscount) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_surge_model(mut self, surge: SurgeModel) -> Self {
        self.surge = surge;
        self
    }
}

impl API for Engine {}
