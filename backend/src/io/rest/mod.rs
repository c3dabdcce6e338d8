//! # REST API Interface Layer
//!
//! axum handlers for the budget tracker.
//!
//! - **auth**: session extraction for authenticated routes
//! - **auth_apis**: signup, login and logout
//! - **budget_apis**: categories, monthly overview, income and trends
//! - **transaction_apis**: listing, weekly totals, add and delete
//! - **error**: mapping of domain errors onto HTTP statuses
//!
//! Handlers stay thin: they log the request, resolve the caller and hand
//! off to a domain service.

pub mod auth;
pub mod auth_apis;
pub mod budget_apis;
pub mod error;
pub mod mappers;
pub mod transaction_apis;

pub use auth::CurrentUser;
