//! Account signup and login.
use anyhow::{anyhow, Context};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use shared::{LoginRequest, SignupRequest};
use tracing::info;
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult, ValidationError};
use crate::domain::models::User;
use crate::storage::{Connection, UserStorage};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone)]
pub struct UserService<C: Connection> {
    user_repository: C::UserRepository,
}

impl<C: Connection> UserService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            user_repository: connection.create_user_repository(),
        }
    }

    /// Register a new account
    pub async fn signup(&self, request: SignupRequest) -> DomainResult<User> {
        let username = request.username.trim().to_string();
        if username.is_empty() || request.password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }
        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH).into());
        }

        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .context("Password hashing task failed")??;

        let user = self
            .user_repository
            .create_user(&username, &password_hash, Utc::now())
            .await?
            .ok_or_else(|| DomainError::Conflict("Username already exists".to_string()))?;

        info!("Created user {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Check credentials and return the matching account
    pub async fn login(&self, request: LoginRequest) -> DomainResult<User> {
        let username = request.username.trim();
        if username.is_empty() || request.password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }

        let user = self
            .user_repository
            .find_user_by_username(username)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        let password = request.password;
        let stored_hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .context("Password verification task failed")?;

        if verified {
            Ok(user)
        } else {
            Err(DomainError::InvalidCredentials)
        }
    }
}

fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes())
        .map_err(|e| anyhow!("Failed to encode salt: {}", e))?;
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow!("Failed to hash password: {}", e))
}

fn verify_password(password: &str, password_hash: &str) -> bool {
    PasswordHash::new(password_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
