//! Identity-provider abstraction for the sign-in form.
//!
//! This crate owns the typed contract between the UI and the external
//! identity service: the [`IdentityProvider`] capability, the two federated
//! provider descriptors, the [`AuthError`] failure type, and a Firebase Auth
//! REST implementation. Credential storage, token refresh and the OAuth
//! handshake stay with the external service.

pub mod config;
pub mod error;
pub mod firebase;
pub mod provider;
pub mod types;

pub use config::IdentityConfig;
pub use error::AuthError;
pub use firebase::FirebaseAuth;
pub use provider::{IdentityProvider, NoPopup, PopupFlow};
pub use types::{FederatedProvider, IdpCredential, ProviderDescriptor, Session};
