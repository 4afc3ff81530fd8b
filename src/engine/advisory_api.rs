use super::Engine;

use async_trait::async_trait;

use crate::{
    api::AdvisoryAPI,
    error::{advisory_unavailable_error, invalid_input_error, Error},
};

pub fn bmtc_prompt(pickup: &str) -> String {
    format!(
        "Act as a BMTC bus route expert in Bangalore. Using your knowledge of Bangalore's bus system:

For the location: {pickup}

Provide exactly these details in this format do not write anything else to the output:
Nearest bus stop: [Name the closest BMTC bus stop]
Bus routes: [List 2-3 major bus numbers that serve this area]
Frequency: [State typical waiting time between buses in minutes]
",
        pickup = pickup
    )
}

pub fn best_route_prompt(pickup: &str, dropoff: &str) -> String {
    format!(
        "Act as a traffic expert in Bangalore. Using your knowledge of Bangalore's traffic patterns and best routes:

For the trip from {pickup} to {dropoff}, suggest the best possible cab routes to beat traffic.

Provide exactly these details in this format:
- Best route: [Description of the best route]
- Alternative routes: [List 2-3 alternative routes]
- Traffic tips: [Any additional tips to avoid traffic]
",
        pickup = pickup,
        dropoff = dropoff
    )
}

impl Engine {
    /// Single attempt. Failures and blank text both count as unavailable.
    async fn advise(&self, prompt: &str, what: &str) -> Result<String, Error> {
        match self.advisor.generate(prompt).await {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => {
                tracing::warn!("text generator returned nothing for {}", what);
                Err(advisory_unavailable_error(what))
            }
            Err(err) => {
                tracing::warn!("text generator failed for {}: {}", what, err);
                Err(advisory_unavailable_error(what))
            }
        }
    }
}

#[async_trait]
impl AdvisoryAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn suggest_bmtc_routes(&self, pickup: &str) -> Result<String, Error> {
        if pickup.trim().is_empty() {
            return Err(invalid_input_error());
        }

        self.advise(&bmtc_prompt(pickup), "BMTC routes").await
    }

    #[tracing::instrument(skip(self))]
    async fn suggest_best_route(&self, pickup: &str, dropoff: &str) -> Result<String, Error> {
        if pickup.trim().is_empty() || dropoff.trim().is_empty() {
            return Err(invalid_input_error());
        }

        self.advise(&best_route_prompt(pickup, dropoff), "best route")
            .await
    }
}
