//! # clubhub
//!
//! Core of the club-management portal: the data model, the session store,
//! the role-gated router, view composition helpers, the theme preference
//! store, and the generative-AI text collaborator.
//!
//! DESIGN
//! ======
//! Everything here is browser-agnostic. Durable state goes through the
//! [`storage::KeyValueStore`] seam so the `client` crate can plug in
//! `localStorage` while tests use [`storage::MemoryStore`].

pub mod assistant;
pub mod directory;
pub mod fixtures;
pub mod llm;
pub mod model;
pub mod preferences;
pub mod routes;
pub mod session;
pub mod storage;
pub mod views;
