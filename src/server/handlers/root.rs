use axum::extract::Json;
use serde_json::{json, Value};

pub const WELCOME_MESSAGE: &str = "Welcome to the cabfare API";

pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}
