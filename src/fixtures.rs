//! Static club data used as the directory and content collaborators.

use crate::model::{ClubEvent, FileType, Project, ProjectStatus, Resource, UserProfile, UserRole};

/// Id of the directory entry used by [`crate::session::UnknownLoginPolicy::Fallback`]
/// in the demo build.
pub const DEMO_FALLBACK_USER_ID: &str = "3";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Known club members.
#[must_use]
pub fn users() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: "1".to_owned(),
            email: "admin@ictclub.com".to_owned(),
            full_name: "Alex Rivera".to_owned(),
            role: UserRole::Admin,
            avatar_url: Some("https://picsum.photos/seed/admin/200".to_owned()),
            bio: Some(
                "Club President and Full-Stack Engineer. Passionate about community and building cool things."
                    .to_owned(),
            ),
            skills: strings(&["React", "Node.js", "PostgreSQL", "Leadership"]),
            joined_at: "2023-01-15".to_owned(),
        },
        UserProfile {
            id: "2".to_owned(),
            email: "sarah@ictclub.com".to_owned(),
            full_name: "Sarah Chen".to_owned(),
            role: UserRole::Board,
            avatar_url: Some("https://picsum.photos/seed/sarah/200".to_owned()),
            bio: Some("UI/UX Enthusiast. Managing club events and visual identity.".to_owned()),
            skills: strings(&["Figma", "React Native", "Branding"]),
            joined_at: "2023-02-10".to_owned(),
        },
        UserProfile {
            id: "3".to_owned(),
            email: "member@ictclub.com".to_owned(),
            full_name: "Jordan Smith".to_owned(),
            role: UserRole::Member,
            avatar_url: Some("https://picsum.photos/seed/jordan/200".to_owned()),
            bio: Some("Freshman looking to learn web development.".to_owned()),
            skills: strings(&["HTML", "CSS", "Python"]),
            joined_at: "2024-09-01".to_owned(),
        },
    ]
}

#[must_use]
pub fn events() -> Vec<ClubEvent> {
    vec![
        ClubEvent {
            id: "e1".to_owned(),
            title: "Modern Web Workshop".to_owned(),
            description: "Learn Next.js 15 and Server Components in this hands-on session.".to_owned(),
            date: "2024-11-20T14:00:00".to_owned(),
            location: "Lab 4B / Zoom".to_owned(),
            image_url: Some("https://picsum.photos/seed/web/800/400".to_owned()),
            created_by: "1".to_owned(),
            attendee_count: 45,
            max_attendees: Some(60),
        },
        ClubEvent {
            id: "e2".to_owned(),
            title: "Hackathon 2024 Prep".to_owned(),
            description: "Team formation and brainstorming session for the upcoming regional hackathon."
                .to_owned(),
            date: "2024-12-05T10:00:00".to_owned(),
            location: "Student Center Lounge".to_owned(),
            image_url: Some("https://picsum.photos/seed/hack/800/400".to_owned()),
            created_by: "2".to_owned(),
            attendee_count: 12,
            max_attendees: Some(100),
        },
    ]
}

#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".to_owned(),
            title: "Club Management Platform".to_owned(),
            description: "An open-source portal for clubs to manage members, events, and resources.".to_owned(),
            tech_stack: strings(&["TypeScript", "React", "Supabase"]),
            status: ProjectStatus::Active,
            lead_id: "1".to_owned(),
            created_at: "2024-03-01".to_owned(),
            members: strings(&["1", "2", "3"]),
        },
        Project {
            id: "p2".to_owned(),
            title: "Campus Food App".to_owned(),
            description: "Real-time queue tracking for campus cafeterias.".to_owned(),
            tech_stack: strings(&["React Native", "Firebase"]),
            status: ProjectStatus::OnHold,
            lead_id: "2".to_owned(),
            created_at: "2024-05-15".to_owned(),
            members: strings(&["2"]),
        },
    ]
}

#[must_use]
pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "r1".to_owned(),
            title: "Introduction to Git".to_owned(),
            description: "A comprehensive guide for beginners to start with version control.".to_owned(),
            category: "Workshops".to_owned(),
            file_url: "https://www.example.com/git-guide.pdf".to_owned(),
            file_type: FileType::Pdf,
            uploaded_by: "1".to_owned(),
            created_at: "2024-01-20".to_owned(),
        },
        Resource {
            id: "r2".to_owned(),
            title: "React Performance Tips".to_owned(),
            description: "Masterclass video on optimizing React applications.".to_owned(),
            category: "Development".to_owned(),
            file_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_owned(),
            file_type: FileType::Video,
            uploaded_by: "2".to_owned(),
            created_at: "2024-06-12".to_owned(),
        },
    ]
}
