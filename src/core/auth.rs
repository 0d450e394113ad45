//! Sign-in gate in front of the hub.
//!
//! The hosted identity provider owns the whole popup flow and the session
//! lifetime. The gate only turns its outcome into a landing route or into
//! one of a few user-facing failure messages.

use std::fmt;

/// Where a successful sign-in lands.
pub const LANDING_ROUTE: &str = "/";

/// Session handed back by the provider. Opaque beyond these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

/// Structured error reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

pub trait IdentityProvider {
    fn sign_in_with_popup(&self) -> Result<Session, ProviderError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInFailure {
    /// The user closed the popup.
    PopupClosed,
    /// The requesting origin is not registered with the provider.
    UnauthorizedDomain { origin: String },
    /// Bad API key or similar provider-side setup problem.
    Misconfigured,
    Other { message: String },
}

impl SignInFailure {
    pub fn classify(err: &ProviderError, origin: &str) -> Self {
        match err.code.as_str() {
            "auth/popup-closed-by-user" => SignInFailure::PopupClosed,
            "auth/unauthorized-domain" => SignInFailure::UnauthorizedDomain {
                origin: origin.to_string(),
            },
            "auth/api-key-not-valid" | "auth/invalid-api-key" => SignInFailure::Misconfigured,
            _ => SignInFailure::Other {
                message: err.message.clone(),
            },
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            SignInFailure::PopupClosed => "Login was cancelled. Please try again.".to_string(),
            SignInFailure::UnauthorizedDomain { origin } => format!(
                "This domain ({origin}) is not authorized with the identity provider."
            ),
            SignInFailure::Misconfigured => {
                "Identity provider configuration error: the API key was rejected.".to_string()
            }
            SignInFailure::Other { message } => {
                let msg = if message.trim().is_empty() {
                    "Unknown error"
                } else {
                    message.as_str()
                };
                format!("Failed to sign in: {msg}")
            }
        }
    }
}

impl fmt::Display for SignInFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub session: Session,
    pub route: &'static str,
}

pub struct AuthGate<P: IdentityProvider> {
    provider: P,
    origin: String,
}

impl<P: IdentityProvider> AuthGate<P> {
    pub fn new(provider: P, origin: impl Into<String>) -> Self {
        Self {
            provider,
            origin: origin.into(),
        }
    }

    pub fn sign_in(&self) -> Result<SignedIn, SignInFailure> {
        match self.provider.sign_in_with_popup() {
            Ok(session) => Ok(SignedIn {
                session,
                route: LANDING_ROUTE,
            }),
            Err(err) => {
                tracing::warn!(code = %err.code, "sign-in failed");
                Err(SignInFailure::classify(&err, &self.origin))
            }
        }
    }
}
