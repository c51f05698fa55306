//! User directory: login lookup and admin management of known identities.
//!
//! DESIGN
//! ======
//! The session store keeps its own read-only copy for lookups. The admin view
//! clones a separate copy and edits it in memory; those edits never reach the
//! session store's copy.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use tracing::info;

use crate::fixtures;
use crate::model::{UserProfile, UserRole};

/// Counts of directory members per role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleStats {
    pub total: usize,
    pub admins: usize,
    pub board: usize,
    pub members: usize,
}

impl RoleStats {
    #[must_use]
    pub fn from_users(users: &[UserProfile]) -> Self {
        let count = |role: UserRole| users.iter().filter(|u| u.role == role).count();
        Self {
            total: users.len(),
            admins: count(UserRole::Admin),
            board: count(UserRole::Board),
            members: count(UserRole::Member),
        }
    }
}

/// Read-mostly collection of known identities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<UserProfile>,
}

impl UserDirectory {
    #[must_use]
    pub fn new(users: Vec<UserProfile>) -> Self {
        Self { users }
    }

    /// Directory seeded with the static club roster.
    #[must_use]
    pub fn from_fixtures() -> Self {
        Self::new(fixtures::users())
    }

    #[must_use]
    pub fn users(&self) -> &[UserProfile] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Case-insensitive exact match on email after trimming.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&UserProfile> {
        let needle = email.trim();
        if needle.is_empty() {
            return None;
        }
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(needle))
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Users whose name or email contains `query`, case-insensitively.
    /// A blank query matches everyone.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&UserProfile> {
        let needle = query.trim().to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                needle.is_empty()
                    || u.full_name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> RoleStats {
        RoleStats::from_users(&self.users)
    }

    /// Reassign the role of `id`. Returns `false` if no such user exists.
    pub fn set_role(&mut self, id: &str, role: UserRole) -> bool {
        let Some(user) = self.users.iter_mut().find(|u| u.id == id) else {
            return false;
        };
        info!(user_id = %id, from = %user.role, to = %role, "directory role reassigned");
        user.role = role;
        true
    }

    /// Remove `id` if `confirm` approves the target.
    ///
    /// `confirm` is only consulted when the user exists. Returns the removed
    /// profile, or `None` if the user is unknown or the removal was declined.
    pub fn deactivate<F>(&mut self, id: &str, confirm: F) -> Option<UserProfile>
    where
        F: FnOnce(&UserProfile) -> bool,
    {
        let idx = self.users.iter().position(|u| u.id == id)?;
        if !confirm(&self.users[idx]) {
            return None;
        }
        let removed = self.users.remove(idx);
        info!(user_id = %removed.id, "directory user deactivated");
        Some(removed)
    }
}
