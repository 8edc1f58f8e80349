//! Admin gate.
//!
//! Editing is only possible in admin mode. How a secret is checked is behind
//! `CredentialCheck` so the host can plug in whatever it trusts; the crate
//! ships a token comparison fed from configuration.

use serde::{Deserialize, Serialize};

pub trait CredentialCheck {
    /// Whether `secret` grants admin access.
    fn verify(&self, secret: &str) -> bool;
}

/// Accepts exactly one configured token. Without a token nobody gets in.
#[derive(Clone, Default)]
pub struct TokenCredential {
    token: Option<String>,
}

impl TokenCredential {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }
}

impl CredentialCheck for TokenCredential {
    fn verify(&self, secret: &str) -> bool {
        match &self.token {
            Some(token) => !secret.is_empty() && token == secret,
            None => false,
        }
    }
}

// never print the token itself
impl std::fmt::Debug for TokenCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCredential")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    #[default]
    Viewer,
    Admin,
}

impl AccessMode {
    pub fn can_edit(&self) -> bool {
        matches!(self, AccessMode::Admin)
    }
}
