use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::api::AdvisoryAPI;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct BmtcParams {
    pickup: String,
}

#[derive(Serialize, Deserialize)]
pub struct BmtcInfo {
    pickup: String,
    bmtc_info: String,
}

#[derive(Serialize, Deserialize)]
pub struct BestRouteParams {
    pickup: String,
    dropoff: String,
}

#[derive(Serialize, Deserialize)]
pub struct BestRouteInfo {
    pickup: String,
    dropoff: String,
    best_route_info: String,
}

pub async fn bmtc(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<BmtcParams>,
) -> Result<Json<BmtcInfo>, Error> {
    let bmtc_info = api.suggest_bmtc_routes(&params.pickup).await?;

    Ok(BmtcInfo {
        pickup: params.pickup,
        bmtc_info,
    }
    .into())
}

pub async fn best_route(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<BestRouteParams>,
) -> Result<Json<BestRouteInfo>, Error> {
    let best_route_info = api
        .suggest_best_route(&params.pickup, &params.dropoff)
        .await?;

    Ok(BestRouteInfo {
        pickup: params.pickup,
        dropoff: params.dropoff,
        best_route_info,
    }
    .into())
}
