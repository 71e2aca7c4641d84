use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json,
};
use mgmt_client::Context;
use mgmt_types::api::{SetPasswordRequest, SetPasswordResponse, HEALTH_PATH, SET_PASSWORD_PATH};
use tracing::debug;

use crate::{
    error::{ApiError, ApiResult},
    set_password::SetPasswordCommand,
    state::AppState,
};

pub async fn set_password(
    State(state): State<AppState>,
    Json(payload): Json<SetPasswordRequest>,
) -> ApiResult<impl IntoResponse> {
    let user_id =
        u64::try_from(payload.user_id).map_err(|_| ApiError::InvalidUserId(payload.user_id))?;
    debug!("Set password requested for user {user_id}");
    let ctx = Context::with_timeout(state.timeout());
    let command = SetPasswordCommand {
        user_id,
        password: payload.password,
    };
    state.set_password().execute(&ctx, command).await?;

    Ok((StatusCode::OK, Json(SetPasswordResponse::default())))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route(SET_PASSWORD_PATH, post(set_password))
        .route(HEALTH_PATH, get(health))
}
