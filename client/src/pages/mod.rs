//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` owns the sign-in form; `dashboard` is where it lands on success.

pub mod dashboard;
pub mod login;
