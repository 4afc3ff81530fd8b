use serde::{Deserialize, Serialize};

use crate::entities::VehicleTier;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub pickup: String,
    pub dropoff: String,
    pub distance_km: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub pickup: String,
    pub dropoff: String,
    pub distance_km: f64,
    pub cab_type: VehicleTier,
    pub fare: f64,
    pub surge_multiplier: f64,
}
