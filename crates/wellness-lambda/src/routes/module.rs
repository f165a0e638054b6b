use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use wellness_core::models::{Assessment, Identity};

use crate::error::ApiError;
use crate::state::AppState;
use crate::view::View;

#[derive(Serialize)]
pub struct ModuleProps {
    recent_assessment: Option<Assessment>,
}

/// Module dashboard. Signed-in users see their latest assessment as stored;
/// anonymous sessions have no history lookup.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<View<ModuleProps>>, ApiError> {
    let recent_assessment = match identity.user_id() {
        Some(user_id) => state.store.most_recent_for(user_id).await?,
        None => None,
    };

    Ok(Json(View::new(
        "psychological-module",
        ModuleProps { recent_assessment },
    )))
}
