use axum::{Json, Router, body::Bytes, extract::State, routing::get};

use crate::{
    dto::state::StateUpdateRequest,
    error::AppError,
    services::state_service,
    state::{ScoreboardState, SharedState},
};

#[utoipa::path(
    get,
    path = "/api/state",
    tag = "state",
    responses((status = 200, description = "Complete scoreboard record", body = ScoreboardState))
)]
/// Return the complete scoreboard record.
pub async fn get_state(State(state): State<SharedState>) -> Json<ScoreboardState> {
    Json(state_service::fetch_state(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/state",
    tag = "state",
    request_body = StateUpdateRequest,
    responses(
        (status = 200, description = "Merged scoreboard record", body = ScoreboardState),
        (status = 400, description = "Body is not a valid state update"),
    )
)]
/// Merge a partial update into the record and return the merged result.
///
/// The body is read raw rather than through the JSON extractor so that an
/// empty body still counts as a valid, empty update.
pub async fn update_state(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ScoreboardState>, AppError> {
    let record = state_service::update_state(&state, &body).await?;
    Ok(Json(record))
}

/// Configure the state routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/api/state", get(get_state).post(update_state))
}
