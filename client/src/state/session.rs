//! Reactive session handle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionHandle` owns the core `SessionStore` (in a `StoredValue`) and
//! republishes its `AuthState` into an `RwSignal` after every operation.
//! Route guards and user-aware components subscribe to that signal, so a
//! login, logout, or role change re-runs every guard.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use clubhub::directory::UserDirectory;
use clubhub::fixtures::DEMO_FALLBACK_USER_ID;
use clubhub::model::{AuthState, ProfileUpdate, UserProfile};
use clubhub::session::{SessionConfig, SessionError, SessionStore, UnknownLoginPolicy};
use clubhub::storage::StorageError;
use leptos::prelude::*;

use crate::util::storage::BrowserStorage;

/// Set at build time to sign unknown emails in as the demo member.
const DEMO_FALLBACK: bool = option_env!("CLUBHUB_DEMO_FALLBACK").is_some();

/// Session configuration for the browser build.
pub fn session_config(demo_fallback: bool) -> SessionConfig {
    let unknown_login = if demo_fallback {
        UnknownLoginPolicy::Fallback { user_id: DEMO_FALLBACK_USER_ID.to_owned() }
    } else {
        UnknownLoginPolicy::Reject
    };
    SessionConfig { unknown_login, ..SessionConfig::default() }
}

/// Context handle over the session store.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    store: StoredValue<SessionStore<BrowserStorage>>,
    auth: RwSignal<AuthState>,
}

impl SessionHandle {
    /// Create the store in the pending state and bind it to `auth`.
    pub fn new(auth: RwSignal<AuthState>) -> Self {
        let store = SessionStore::new(BrowserStorage, UserDirectory::from_fixtures(), session_config(DEMO_FALLBACK));
        auth.set(store.state().clone());
        Self { store: StoredValue::new(store), auth }
    }

    pub fn auth(self) -> RwSignal<AuthState> {
        self.auth
    }

    /// Finish rehydration from `localStorage`.
    pub fn restore(self) {
        self.store.update_value(|store| {
            store.restore();
        });
        self.publish();
    }

    /// Sign in by email.
    pub fn login(self, email: &str) -> Result<UserProfile, SessionError> {
        let result = self
            .store
            .try_update_value(|store| store.login(email).cloned())
            .unwrap_or(Err(SessionError::Storage(StorageError::Unavailable)));
        self.publish();
        result
    }

    pub fn logout(self) -> Result<(), SessionError> {
        let result = self
            .store
            .try_update_value(SessionStore::logout)
            .unwrap_or(Err(SessionError::Storage(StorageError::Unavailable)));
        self.publish();
        result
    }

    /// Merge `update` into the signed-in profile.
    pub fn update_profile(self, update: ProfileUpdate) -> Result<Option<UserProfile>, SessionError> {
        let result = self
            .store
            .try_update_value(|store| store.update_profile(update).map(|user| user.cloned()))
            .unwrap_or(Err(SessionError::Storage(StorageError::Unavailable)));
        self.publish();
        result
    }

    /// Known identities, for the sign-in page's demo account list.
    pub fn directory_users(self) -> Vec<UserProfile> {
        self.store.try_with_value(|store| store.directory().users().to_vec()).unwrap_or_default()
    }

    fn publish(self) {
        if let Some(state) = self.store.try_with_value(|store| store.state().clone()) {
            self.auth.set(state);
        }
    }
}

/// User-facing text for a failed sign-in.
pub fn login_error_message(err: &SessionError) -> String {
    match err {
        SessionError::UnknownIdentity { email } => {
            format!("No member is registered as {email}. Try one of the demo accounts below.")
        }
        SessionError::Storage(_) => "Your browser blocked saving the session. Check storage settings.".to_owned(),
    }
}
