//! Routed pages. Access checks happen in the router; pages assume the
//! session they need is present.

pub mod admin;
pub mod dashboard;
pub mod events;
pub mod landing;
pub mod login;
pub mod profile;
pub mod projects;
pub mod resources;
