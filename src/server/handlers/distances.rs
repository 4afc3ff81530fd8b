use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::api::DistanceAPI;
use crate::entities::Distance;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct FindParams {
    pickup: String,
    dropoff: String,
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<FindParams>,
) -> Result<Json<Distance>, Error> {
    let distance = api.find_distance(&params.pickup, &params.dropoff).await?;

    Ok(distance.into())
}
