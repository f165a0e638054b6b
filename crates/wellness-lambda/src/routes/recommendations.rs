use axum::Json;
use axum::extract::Path;

use wellness_instruments::recommendations::{Recommendation, lookup};

/// Recommendations for a level name. Unknown names get the moderate bundle.
pub async fn get_recommendations(Path(level): Path<String>) -> Json<&'static Recommendation> {
    Json(lookup(&level))
}
