use super::Engine;

use async_trait::async_trait;

use crate::{
    api::FareAPI,
    entities::{FareQuote, PricingSchedule, VehicleTier},
    error::Error,
};

use super::helpers::round_to_cents;

/// Travel time assumption: 2 minutes per km, i.e. 30 km/h.
pub const MINUTES_PER_KM: f64 = 2.0;

/// Fare for an already rounded distance. Never negative.
pub fn estimate_fare(
    schedule: &PricingSchedule,
    distance_km: f64,
    surge_multiplier: f64,
    discount: Option<f64>,
) -> f64 {
    let estimated_minutes = MINUTES_PER_KM * distance_km;
    let estimate = schedule.base_fare
        + schedule.cost_per_km * distance_km
        + schedule.cost_per_minute * estimated_minutes;

    let mut fare = estimate * surge_multiplier;

    if let Some(amount) = discount {
        fare = (fare - amount).max(0.0);
    }

    round_to_cents(fare)
}

#[async_trait]
impl FareAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn quote_fare(
        &self,
        pickup: &str,
        dropoff: &str,
        cab_type: &str,
        coupon_code: Option<&str>,
    ) -> Result<FareQuote, Error> {
        let distance_km = self.measure(pickup, dropoff).await?;
        let tier: VehicleTier = cab_type.parse()?;

        let surge_multiplier = self.surge.multiplier();
        let discount = self.discount.amount_for(coupon_code);

        let fare = estimate_fare(
            self.pricing.schedule(tier),
            distance_km,
            surge_multiplier,
            discount,
        );

        tracing::info!(
            "quoted {} for {} km by {} at surge {}",
            fare,
            distance_km,
            tier,
            surge_multiplier
        );

        Ok(FareQuote {
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_km,
            cab_type: tier,
            fare,
            surge_multiplier,
        })
    }
}
