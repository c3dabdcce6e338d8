//! # REST API for Transactions
//!
//! Monthly listing, weekly totals, adding and deleting expenses.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Local;
use shared::{CreateTransactionRequest, CreateTransactionResponse, DeleteTransactionResponse};
use tracing::info;

use super::auth::CurrentUser;
use crate::AppState;

/// Transactions of a month grouped by day
pub async fn list_transactions(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/transactions/{} - user {}", month, user.user_id);

    match state.transaction_service.list_transactions(user.user_id, &month).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Per-day totals for the current week
pub async fn get_weekly_totals(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/transactions/{}/week - user {}", month, user.user_id);

    let today = Local::now().date_naive();
    match state
        .transaction_service
        .weekly_totals(user.user_id, &month, today)
        .await
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_transaction(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> impl IntoResponse {
    info!("POST /api/transaction - user {}: {:?}", user.user_id, request);

    let today = Local::now().date_naive();
    match state
        .transaction_service
        .create_transaction(user.user_id, request, today)
        .await
    {
        Ok(transaction) => (
            StatusCode::CREATED,
            Json(CreateTransactionResponse {
                success: true,
                transaction,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_transaction(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/transaction/{} - user {}", transaction_id, user.user_id);

    match state
        .transaction_service
        .delete_transaction(user.user_id, transaction_id)
        .await
    {
        Ok(()) => (StatusCode::OK, Json(DeleteTransactionResponse { success: true })).into_response(),
        Err(e) => e.into_response(),
    }
}
