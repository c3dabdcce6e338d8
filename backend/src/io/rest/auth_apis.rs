//! # REST API for Accounts
//!
//! Signup, login and logout. Successful signup and login open a session and
//! return its token both in the body and as the `session` cookie.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json, Response},
};
use shared::{AuthResponse, LoginRequest, LogoutResponse, SignupRequest};
use tracing::info;

use super::auth::{expired_session_cookie, session_cookie, CurrentUser};
use crate::domain::models::User;
use crate::AppState;

fn session_response(state: &AppState, status: StatusCode, user: User) -> Response {
    let token = state.session_service.create_session(user.id);
    let cookie = session_cookie(&token);
    let body = AuthResponse {
        success: true,
        username: user.username,
        token,
    };
    (status, [(SET_COOKIE, cookie)], Json(body)).into_response()
}

/// Create an account and log it in
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> impl IntoResponse {
    info!("POST /signup - username: {:?}", request.username);

    match state.user_service.signup(request).await {
        Ok(user) => session_response(&state, StatusCode::CREATED, user),
        Err(e) => e.into_response(),
    }
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /login - username: {:?}", request.username);

    match state.user_service.login(request).await {
        Ok(user) => session_response(&state, StatusCode::OK, user),
        Err(e) => e.into_response(),
    }
}

/// Close the caller's session if there is one
pub async fn logout(
    State(state): State<AppState>,
    current_user: Option<CurrentUser>,
) -> impl IntoResponse {
    info!("/logout");

    if let Some(user) = current_user {
        state.session_service.revoke(&user.token);
        info!("Closed session for user {}", user.user_id);
    }

    (
        StatusCode::OK,
        [(SET_COOKIE, expired_session_cookie())],
        Json(LogoutResponse { success: true }),
    )
}
