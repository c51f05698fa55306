//! Shared shell components.

pub mod app_layout;
pub mod splash;
pub mod theme_toggle;
