//! Outbound calls made by the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only remote collaborator is the generative-AI text API; everything
//! else the portal shows comes from local fixtures and `localStorage`.

pub mod ai;
