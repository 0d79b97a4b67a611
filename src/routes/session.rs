use axum::{Json, Router, extract::State, routing::{get, post}};

use crate::{
    dto::session::{CurrentSession, SwitchUserRequest, UserList},
    error::AppResult,
    models::User,
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/current", get(current_user))
        .route("/switch", post(switch_user))
        .route("/logout", post(logout))
}

#[utoipa::path(get, path = "/api/session/users", tag = "Session")]
pub async fn list_users(State(state): State<AppState>) -> Json<ApiResponse<UserList>> {
    let items = state.session.users().to_vec();
    Json(ApiResponse::success("Ok", UserList { items }))
}

#[utoipa::path(get, path = "/api/session/current", tag = "Session")]
pub async fn current_user(State(state): State<AppState>) -> Json<ApiResponse<CurrentSession>> {
    let user = state.session.current_user().await;
    Json(ApiResponse::success("Ok", CurrentSession { user }))
}

#[utoipa::path(post, path = "/api/session/switch", tag = "Session")]
pub async fn switch_user(
    State(state): State<AppState>,
    Json(payload): Json<SwitchUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.session.switch(payload.user_id).await?;
    Ok(Json(ApiResponse::success("Switched", user)))
}

#[utoipa::path(post, path = "/api/session/logout", tag = "Session")]
pub async fn logout(State(state): State<AppState>) -> Json<ApiResponse<serde_json::Value>> {
    state.session.logout().await;
    Json(ApiResponse::success("Logged out", serde_json::json!({})))
}
