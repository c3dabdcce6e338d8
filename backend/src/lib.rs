//! # Budget Tracker Backend
//!
//! HTTP backend for a personal budget tracker: accounts, monthly budgets
//! and the expense transactions recorded against them.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (axum handlers, session extraction)
//!     ↓
//! Domain Layer (services, reporting, validation)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```
//!
//! [`initialize_backend`] wires the services onto a database and
//! [`create_router`] exposes them over HTTP.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{BudgetService, SessionService, TransactionService, UserService};
use crate::io::rest::{auth_apis, budget_apis, transaction_apis};
use crate::storage::DbConnection;

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService<DbConnection>,
    pub session_service: SessionService,
    pub budget_service: BudgetService<DbConnection>,
    pub transaction_service: TransactionService<DbConnection>,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self {
            user_service: UserService::new(&db),
            session_service: SessionService::new(),
            budget_service: BudgetService::new(&db),
            transaction_service: TransactionService::new(&db),
        }
    }
}

/// Open the database and build the application state
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up domain services");
    Ok(AppState::new(db))
}

/// Create the axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true);

    let api_routes = Router::new()
        .route("/categories", get(budget_apis::get_categories))
        .route("/budget/:month", get(budget_apis::get_budget))
        .route("/budget/:month/income", post(budget_apis::update_income))
        .route("/transactions/:month", get(transaction_apis::list_transactions))
        .route("/transactions/:month/week", get(transaction_apis::get_weekly_totals))
        .route("/transaction", post(transaction_apis::create_transaction))
        .route("/transaction/:id", delete(transaction_apis::delete_transaction))
        .route("/trends/:months", get(budget_apis::get_trends));

    let mut router = Router::new()
        .route("/health", get(health))
        .route("/signup", post(auth_apis::signup))
        .route("/login", post(auth_apis::login))
        .route("/logout", get(auth_apis::logout).post(auth_apis::logout))
        .nest("/api", api_routes)
        .with_state(app_state);

    if let Some(dir) = &config.static_dir {
        info!("Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(cors).layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "OK"
}
