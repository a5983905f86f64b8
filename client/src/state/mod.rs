//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is app-wide and provided via context; `login` is owned by the
//! sign-in page and discarded with it.

pub mod auth;
pub mod login;
