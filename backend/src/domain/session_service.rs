//! In-process session registry mapping opaque tokens to users.
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::domain::models::UserId;

/// How long a session stays valid after it is opened
pub const SESSION_TTL_DAYS: i64 = 7;

/// Open sessions kept per user; opening another drops the oldest
pub const MAX_SESSIONS_PER_USER: usize = 10;

#[derive(Clone, Copy)]
struct Session {
    user_id: UserId,
    created_at: DateTime<Utc>,
}

impl Session {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at < Duration::days(SESSION_TTL_DAYS)
    }
}

/// Sessions are kept in memory and expire after [`SESSION_TTL_DAYS`]
#[derive(Clone, Default)]
pub struct SessionService {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for `user_id` and return its token
    pub fn create_session(&self, user_id: UserId) -> String {
        self.create_session_at(user_id, Utc::now())
    }

    /// User behind a token, if the session is open and unexpired
    pub fn resolve(&self, token: &str) -> Option<UserId> {
        self.resolve_at(token, Utc::now())
    }

    /// Close a session. Returns false when it was not open.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }

    fn create_session_at(&self, user_id: UserId, now: DateTime<Utc>) -> String {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);

        sessions.retain(|_, session| session.is_live(now));

        let mut own: Vec<(String, DateTime<Utc>)> = sessions
            .iter()
            .filter(|(_, session)| session.user_id == user_id)
            .map(|(token, session)| (token.clone(), session.created_at))
            .collect();
        if own.len() >= MAX_SESSIONS_PER_USER {
            own.sort_by_key(|(_, created_at)| *created_at);
            let excess = own.len() + 1 - MAX_SESSIONS_PER_USER;
            for (old, _) in own.into_iter().take(excess) {
                sessions.remove(&old);
            }
            debug!("Dropped {} oldest sessions for user {}", excess, user_id);
        }

        sessions.insert(token.clone(), Session { user_id, created_at: now });
        debug!("Opened session for user {} ({} open in total)", user_id, sessions.len());
        token
    }

    fn resolve_at(&self, token: &str, now: DateTime<Utc>) -> Option<UserId> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .filter(|session| session.is_live(now))
            .map(|session| session.user_id)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
