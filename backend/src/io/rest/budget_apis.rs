//! # REST API for Budgets
//!
//! Category palette, monthly overview, income updates and trends.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Local;
use shared::UpdateIncomeRequest;
use tracing::info;

use super::auth::CurrentUser;
use crate::domain::categories::list_categories;
use crate::AppState;

/// Built-in categories; available without a session
pub async fn get_categories() -> impl IntoResponse {
    info!("GET /api/categories");
    Json(list_categories())
}

pub async fn get_budget(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/budget/{} - user {}", month, user.user_id);

    match state.budget_service.get_overview(user.user_id, &month).await {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_income(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(month): Path<String>,
    Json(request): Json<UpdateIncomeRequest>,
) -> impl IntoResponse {
    info!("POST /api/budget/{}/income - user {}: {:?}", month, user.user_id, request);

    match state.budget_service.set_income(user.user_id, &month, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_trends(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(months): Path<u32>,
) -> impl IntoResponse {
    info!("GET /api/trends/{} - user {}", months, user.user_id);

    let today = Local::now().date_naive();
    match state.budget_service.get_trends(user.user_id, months, today).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConnection, UserStorage, Connection};
    use axum::body::to_bytes;
    use axum::response::Response;
    use chrono::Utc;
    use serde::de::DeserializeOwned;
    use shared::{BudgetOverview, Category, TrendsResponse, UpdateIncomeResponse};

    async fn setup_test_state() -> (AppState, CurrentUser) {
        let db = DbConnection::init_test().await.unwrap();
        let user = db
            .create_user_repository()
            .create_user("alice", "hash", Utc::now())
            .await
            .unwrap()
            .unwrap();
        let state = AppState::new(db);
        let token = state.session_service.create_session(user.id);
        (state, CurrentUser { user_id: user.id, token })
    }

    async fn json_body<T: DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_categories() {
        let response = get_categories().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let categories: Vec<Category> = json_body(response).await;
        assert_eq!(categories.len(), 10);
        assert_eq!(categories[0].name, "Groceries");
    }

    #[tokio::test]
    async fn test_income_then_overview() {
        let (state, user) = setup_test_state().await;

        let response = update_income(
            user.clone(),
            State(state.clone()),
            Path("2026-10".to_string()),
            Json(UpdateIncomeRequest { income: 1800.0 }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let updated: UpdateIncomeResponse = json_body(response).await;
        assert!(updated.success);

        let response = get_budget(user, State(state), Path("2026-10".to_string()))
            .await
            .into_response();
        let overview: BudgetOverview = json_body(response).await;
        assert_eq!(overview.income, 1800.0);
        assert_eq!(overview.remaining, 1800.0);
    }

    #[tokio::test]
    async fn test_unknown_month_and_invalid_income() {
        let (state, user) = setup_test_state().await;

        let response = get_budget(user.clone(), State(state.clone()), Path("2026-1".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let overview: BudgetOverview = json_body(response).await;
        assert_eq!(overview, BudgetOverview::empty());

        let response = update_income(
            user,
            State(state),
            Path("2026-10".to_string()),
            Json(UpdateIncomeRequest { income: -10.0 }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_trends_window() {
        let (state, user) = setup_test_state().await;

        let response = get_trends(user.clone(), State(state.clone()), Path(6))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let trends: TrendsResponse = json_body(response).await;
        assert_eq!(trends.trends.len(), 6);

        let response = get_trends(user, State(state), Path(500)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let trends: TrendsResponse = json_body(response).await;
        assert_eq!(trends.trends.len(), 500);
        assert!(trends.trends.iter().all(|t| t.income == 0.0 && t.spent == 0.0));
    }
}
