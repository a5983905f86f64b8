//! Failure contract shared by every identity-provider operation.
//!
//! DESIGN
//! ======
//! The form shows failures as plain text, so every variant carries a
//! human-readable message. Provider rejections keep the provider's text
//! verbatim (`INVALID_PASSWORD`, `EMAIL_EXISTS`, ...).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by identity-provider operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The provider answered with an error body.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request could not be sent, no response arrived, or a failed
    /// response carried no provider error body.
    #[error("identity request failed: {0}")]
    Transport(String),

    /// The provider response body could not be understood.
    #[error("identity response parse failed: {0}")]
    Parse(String),

    /// The federated popup flow did not produce a credential.
    #[error("{0}")]
    Popup(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A configuration value is missing or invalid.
    #[error("identity config error: {0}")]
    Config(String),
}

impl AuthError {
    /// Text shown to the user when an attempt fails.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Provider error code, when the provider supplied one.
    ///
    /// Firebase sometimes appends detail after the code
    /// (`WEAK_PASSWORD : Password should be at least 6 characters`).
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.split(" : ").next().map(str::trim),
            _ => None,
        }
    }
}
