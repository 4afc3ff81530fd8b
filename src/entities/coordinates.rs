use std::fmt;

use serde::Serialize;

use crate::error::{invalid_input_error, Error};

/// Latitude and longitude in degrees, range-checked by [`Coordinates::new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid_input_error());
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl From<Coordinates> for geo_types::Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        geo_types::Point::new(coordinates.longitude, coordinates.latitude)
    }
}

/// Which end of a trip a place name belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationSide {
    Pickup,
    Dropoff,
    Both,
}

impl fmt::Display for LocationSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pickup => write!(f, "pickup"),
            Self::Dropoff => write!(f, "dropoff"),
            Self::Both => write!(f, "pickup and dropoff"),
        }
    }
}
