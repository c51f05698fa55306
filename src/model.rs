//! Domain records shared by the session store, router, and views.
//!
//! DESIGN
//! ======
//! Field names mirror the persisted JSON format (`snake_case`) so a profile
//! written by [`crate::session::SessionStore`] reads back losslessly.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// ROLES AND PROFILES
// =============================================================================

/// Membership tier gating view and action visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Board,
    #[default]
    Member,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Board, UserRole::Member];

    /// Wire/storage name (`"admin"`, `"board"`, `"member"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Board => "board",
            Self::Member => "member",
        }
    }

    /// Parse a wire name; unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "admin" => Some(Self::Admin),
            "board" => Some(Self::Board),
            "member" => Some(Self::Member),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known club identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable identifier, unique within the directory.
    pub id: String,
    /// Login lookup key.
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub joined_at: String,
}

impl UserProfile {
    /// Apply a partial update in place.
    ///
    /// Only fields present on `update` are written. Skill lists are
    /// normalized so repeating the same merge is idempotent.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(full_name) = update.full_name {
            self.full_name = full_name;
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(skills) = update.skills {
            self.skills = normalize_skills(skills);
        }
        if let Some(role) = update.role {
            self.role = role;
        }
    }

    /// Year component of `joined_at`, if it parses.
    #[must_use]
    pub fn joined_year(&self) -> Option<u16> {
        self.joined_at.get(..4)?.parse().ok()
    }
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl ProfileUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Trim, drop empties, and de-duplicate while keeping first-seen order.
#[must_use]
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let trimmed = skill.trim();
        if trimmed.is_empty() || out.iter().any(|s| s == trimmed) {
            continue;
        }
        out.push(trimmed.to_owned());
    }
    out
}

// =============================================================================
// AUTH STATE
// =============================================================================

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl AuthState {
    /// State at process start, before rehydration completes.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }
}

// =============================================================================
// CLUB CONTENT
// =============================================================================

/// A scheduled club event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Local date-time (`YYYY-MM-DDTHH:MM:SS`).
    pub date: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_by: String,
    pub attendee_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }
}

/// A club project and its membership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    pub lead_id: String,
    pub created_at: String,
    /// Member user ids.
    pub members: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Video,
    Link,
}

impl FileType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Video => "Video",
            Self::Link => "Link",
        }
    }
}

/// A shared learning resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub file_url: String,
    pub file_type: FileType,
    pub uploaded_by: String,
    pub created_at: String,
}
