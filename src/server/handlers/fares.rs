use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::api::FareAPI;
use crate::entities::FareQuote;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct QuoteParams {
    pickup: String,
    dropoff: String,
    cab_type: String,
    coupon_code: Option<String>,
}

pub async fn quote(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<QuoteParams>,
) -> Result<Json<FareQuote>, Error> {
    let quote = api
        .quote_fare(
            &params.pickup,
            &params.dropoff,
            &params.cab_type,
            params.coupon_code.as_deref(),
        )
        .await?;

    Ok(quote.into())
}
