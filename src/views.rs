//! View composition helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages in the `client` crate are thin renderers over these functions and
//! the ephemeral state types below. Each page owns its own instances, so the
//! state is dropped when the visitor navigates away.

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

use std::collections::HashSet;

use crate::model::{ClubEvent, ProfileUpdate, Project, UserProfile, UserRole};

const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/?name=";

/// Profile avatar, or a generated initials avatar.
#[must_use]
pub fn avatar_url(user: &UserProfile) -> String {
    match user.avatar_url.as_deref() {
        Some(url) if !url.trim().is_empty() => url.to_owned(),
        _ => format!("{AVATAR_SERVICE}{}", urlencoding::encode(&user.full_name)),
    }
}

/// Board members and admins may schedule events.
#[must_use]
pub fn can_manage_events(role: UserRole) -> bool {
    role != UserRole::Member
}

/// Short greeting name for the dashboard banner.
#[must_use]
pub fn first_name(user: &UserProfile) -> &str {
    user.full_name.split_whitespace().next().unwrap_or(&user.full_name)
}

// =============================================================================
// PROFILE EDITING
// =============================================================================

/// Edit-mode draft for the profile page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub bio: String,
    pub skills: Vec<String>,
}

impl ProfileDraft {
    #[must_use]
    pub fn from_profile(user: &UserProfile) -> Self {
        Self { bio: user.bio.clone().unwrap_or_default(), skills: user.skills.clone() }
    }

    /// Add a trimmed skill. Returns `false` for blanks and duplicates.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_owned());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    #[must_use]
    pub fn into_update(self) -> ProfileUpdate {
        ProfileUpdate { bio: Some(self.bio), skills: Some(self.skills), ..ProfileUpdate::default() }
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// Per-view event registrations. Not persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationSet {
    registered: HashSet<String>,
}

impl RegistrationSet {
    #[must_use]
    pub fn is_registered(&self, event_id: &str) -> bool {
        self.registered.contains(event_id)
    }

    /// Flip registration for `event_id`; returns the new status.
    pub fn toggle(&mut self, event_id: &str) -> bool {
        if self.registered.remove(event_id) {
            false
        } else {
            self.registered.insert(event_id.to_owned());
            true
        }
    }

    /// Attendee count including this visitor's registration.
    #[must_use]
    pub fn attendees(&self, event: &ClubEvent) -> u32 {
        event.attendee_count.saturating_add(u32::from(self.is_registered(&event.id)))
    }

    /// `"45 / 60"` when capped, `"45 registered"` otherwise.
    #[must_use]
    pub fn seats_label(&self, event: &ClubEvent) -> String {
        let attendees = self.attendees(event);
        match event.max_attendees {
            Some(max) => format!("{attendees} / {max}"),
            None => format!("{attendees} registered"),
        }
    }

    /// Whether a new registration is still possible.
    #[must_use]
    pub fn has_capacity(&self, event: &ClubEvent) -> bool {
        self.is_registered(&event.id) || event.max_attendees.is_none_or(|max| event.attendee_count < max)
    }
}

/// `"2024-11-20T14:00:00"` → `("2024-11-20", "14:00")`.
#[must_use]
pub fn split_event_date(date: &str) -> (&str, &str) {
    match date.split_once('T') {
        Some((day, time)) => (day, time.get(..5).unwrap_or(time)),
        None => (date, ""),
    }
}

// =============================================================================
// PROJECTS
// =============================================================================

/// Display name of a project's lead, looked up in `users`.
#[must_use]
pub fn project_lead<'a>(project: &Project, users: &'a [UserProfile]) -> Option<&'a str> {
    users
        .iter()
        .find(|u| u.id == project.lead_id)
        .map(|u| u.full_name.as_str())
}

/// Projects the user leads or belongs to.
#[must_use]
pub fn projects_for<'a>(user: &UserProfile, projects: &'a [Project]) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| p.lead_id == user.id || p.members.iter().any(|m| *m == user.id))
        .collect()
}
