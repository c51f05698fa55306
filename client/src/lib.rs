//! # client
//!
//! Leptos + WASM front end for the club portal. Pages and components render
//! over the `clubhub` core: the session store, the role-gated router, and the
//! view composition helpers.
//!
//! Browser glue (`localStorage`, the DOM theme attribute, timers, dialogs) is
//! gated behind the `csr` feature; without it those helpers no-op so unit
//! tests run natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
