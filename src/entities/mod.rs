mod coordinates;
mod discount;
mod pricing;
mod quote;

pub use coordinates::{Coordinates, LocationSide};
pub use discount::FlatDiscount;
pub use pricing::{PricingSchedule, PricingTable, VehicleTier};
pub use quote::{Distance, FareQuote};
