//! Reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one instance of each and provides it; pages read them with
//! `expect_context`.

pub mod session;
pub mod ui;
