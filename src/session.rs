//! Session store: the current identity, its persistence, and rehydration.
//!
//! DESIGN
//! ======
//! The store is an explicit object owned by the composition root rather than
//! an ambient global. Every mutation writes through to storage before the
//! in-memory [`AuthState`] changes; a failed write leaves state untouched so
//! the persisted and displayed identity cannot diverge.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::{debug, info, warn};

use crate::directory::UserDirectory;
use crate::model::{AuthState, ProfileUpdate, UserProfile};
use crate::storage::{self, KeyValueStore, StorageError};

/// Storage key holding the serialized signed-in profile.
pub const DEFAULT_SESSION_KEY: &str = "ict_club_user";

// =============================================================================
// CONFIG
// =============================================================================

/// What `login` does with an identifier the directory does not know.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UnknownLoginPolicy {
    /// Refuse the login with [`SessionError::UnknownIdentity`].
    #[default]
    Reject,
    /// Sign in as the directory entry `user_id` instead (demo behavior).
    Fallback { user_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub storage_key: String,
    pub unknown_login: UnknownLoginPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_SESSION_KEY.to_owned(), unknown_login: UnknownLoginPolicy::Reject }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No directory entry matches the login identifier.
    #[error("no member registered for {email}")]
    UnknownIdentity { email: String },

    /// The profile could not be persisted.
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}

// =============================================================================
// STORE
// =============================================================================

/// Holds the authenticated identity and persists it through `S`.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    directory: UserDirectory,
    config: SessionConfig,
    state: AuthState,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Build a store in the pending (loading) state. Call [`Self::restore`]
    /// once to finish rehydration.
    pub fn new(storage: S, directory: UserDirectory, config: SessionConfig) -> Self {
        Self { storage, directory, config, state: AuthState::pending() }
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.state.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.user.is_some()
    }

    #[must_use]
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Rehydrate from storage. Missing or malformed data yields no session.
    pub fn restore(&mut self) -> &AuthState {
        let user: Option<UserProfile> = storage::load_json(&self.storage, &self.config.storage_key);
        match &user {
            Some(u) => info!(user_id = %u.id, role = %u.role, "session restored"),
            None => debug!("no stored session"),
        }
        self.state = AuthState { user, loading: false };
        &self.state
    }

    /// Sign in by email.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownIdentity`] when the directory has no
    /// match and the policy rejects unknown logins, or [`SessionError::Storage`]
    /// if the profile cannot be persisted.
    pub fn login(&mut self, email: &str) -> Result<&UserProfile, SessionError> {
        let user = self.resolve_login(email)?;
        self.persist(&user)?;
        info!(user_id = %user.id, role = %user.role, "signed in");
        self.state.loading = false;
        let user = self.state.user.insert(user);
        Ok(&*user)
    }

    /// Sign out and forget the persisted profile.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the stored profile cannot be
    /// removed; the session stays active in that case.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.storage.remove_item(&self.config.storage_key)?;
        self.state.loading = false;
        if let Some(user) = self.state.user.take() {
            info!(user_id = %user.id, "signed out");
        }
        Ok(())
    }

    /// Merge `update` into the signed-in profile.
    ///
    /// Returns `Ok(None)` without touching storage when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the merged profile cannot be
    /// persisted; the previous profile stays active in that case.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<Option<&UserProfile>, SessionError> {
        let Some(current) = self.state.user.as_ref() else {
            debug!("profile update ignored without a session");
            return Ok(None);
        };
        let mut next = current.clone();
        next.merge(update);
        self.persist(&next)?;
        debug!(user_id = %next.id, "profile updated");
        let user = self.state.user.insert(next);
        Ok(Some(&*user))
    }

    fn resolve_login(&self, email: &str) -> Result<UserProfile, SessionError> {
        if let Some(user) = self.directory.find_by_email(email) {
            return Ok(user.clone());
        }
        let unknown = || SessionError::UnknownIdentity { email: email.trim().to_owned() };
        match &self.config.unknown_login {
            UnknownLoginPolicy::Reject => Err(unknown()),
            UnknownLoginPolicy::Fallback { user_id } => {
                let fallback = self.directory.find_by_id(user_id).ok_or_else(unknown)?;
                warn!(
                    email = %email.trim(),
                    fallback_id = %fallback.id,
                    "unknown login identifier, signing in as fallback identity"
                );
                Ok(fallback.clone())
            }
        }
    }

    fn persist(&self, user: &UserProfile) -> Result<(), SessionError> {
        storage::save_json(&self.storage, &self.config.storage_key, user).map_err(|e| {
            warn!(error = %e, "failed to persist session");
            SessionError::from(e)
        })
    }
}
