use axum::Json;
use axum::extract::State;

use crate::dto::{SessionRequest, SessionResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn establish_session_handler(
    State(state): State<AppState>,
    Json(payload): Json<SessionRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let session = state
        .session_service
        .establish_session(payload.into())
        .await?;

    Ok(Json(SessionResponse::from(session)))
}
