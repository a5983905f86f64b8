//! Networking modules for identity-provider calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_flow` runs sign-in attempts against an `identity::IdentityProvider`,
//! and `popup` supplies the browser window flow for Apple and Google.

pub mod auth_flow;
pub mod popup;
