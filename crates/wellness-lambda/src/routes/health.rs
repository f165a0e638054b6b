use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    timestamp: jiff::Timestamp,
}

pub async fn health_check() -> Json<Health> {
    Json(Health {
        status: "ok",
        timestamp: jiff::Timestamp::now(),
    })
}
