// src/session/store.rs
use crate::domain::{Prediction, PropertyAttributes};
use crate::session::token::{generate_session_token, hash_token};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// What one visitor carries from the form to the results page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData {
    /// Last submitted form values, used to prefill the form.
    pub house_data: Option<PropertyAttributes>,
    /// Result shown on `/results`.
    pub prediction: Option<Prediction>,
}

struct Entry {
    data: SessionData,
    expires_at: i64,
}

/// In-memory, per-visitor state keyed by the hash of a cookie token.
/// Entries expire `ttl_secs` after their last save.
pub struct SessionStore {
    ttl_secs: i64,
    entries: Mutex<HashMap<[u8; 32], Entry>>,
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<[u8; 32], Entry>> {
        // a panicking handler can't leave a half-written entry behind
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Live session data for `token`, if any.
    pub fn load(&self, token: &str, now: i64) -> Option<SessionData> {
        let mut entries = self.lock();
        prune(&mut entries, now);
        entries.get(&hash_token(token)).map(|e| e.data.clone())
    }

    /// Stores `data` under `token` when that session is still live,
    /// otherwise under a brand-new token. Returns the token to hand back
    /// to the browser.
    pub fn save(&self, token: Option<&str>, now: i64, data: SessionData) -> String {
        let mut entries = self.lock();
        prune(&mut entries, now);

        let token = match token {
            Some(t) if entries.contains_key(&hash_token(t)) => t.to_string(),
            _ => generate_session_token(),
        };

        entries.insert(
            hash_token(&token),
            Entry {
                data,
                expires_at: now + self.ttl_secs,
            },
        );
        token
    }

    pub fn len(&self, now: i64) -> usize {
        let mut entries = self.lock();
        prune(&mut entries, now);
        entries.len()
    }
}

fn prune(entries: &mut HashMap<[u8; 32], Entry>, now: i64) {
    entries.retain(|_, e| e.expires_at > now);
}
