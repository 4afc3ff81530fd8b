use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{unknown_vehicle_tier_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleTier {
    Mini,
    Sedan,
    Suv,
}

impl VehicleTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mini => "mini",
            Self::Sedan => "sedan",
            Self::Suv => "suv",
        }
    }
}

impl fmt::Display for VehicleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tokens are matched case-insensitively.
impl FromStr for VehicleTier {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_lowercase().as_str() {
            "mini" => Ok(Self::Mini),
            "sedan" => Ok(Self::Sedan),
            "suv" => Ok(Self::Suv),
            _ => Err(unknown_vehicle_tier_error(token)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingSchedule {
    pub base_fare: f64,
    pub cost_per_km: f64,
    pub cost_per_minute: f64,
}

/// Rates for every tier. Built once at startup and only read afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    pub mini: PricingSchedule,
    pub sedan: PricingSchedule,
    pub suv: PricingSchedule,
}

impl PricingTable {
    pub fn schedule(&self, tier: VehicleTier) -> &PricingSchedule {
        match tier {
            VehicleTier::Mini => &self.mini,
            VehicleTier::Sedan => &self.sedan,
            VehicleTier::Suv => &self.suv,
        }
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            mini: PricingSchedule {
                base_fare: 30.0,
                cost_per_km: 8.0,
                cost_per_minute: 1.0,
            },
            sedan: PricingSchedule {
                base_fare: 50.0,
                cost_per_km: 12.0,
                cost_per_minute: 1.5,
            },
            suv: PricingSchedule {
                base_fare: 80.0,
                cost_per_km: 15.0,
                cost_per_minute: 2.0,
            },
        }
    }
}
