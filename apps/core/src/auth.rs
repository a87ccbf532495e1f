//! Demo sign-in.
//!
//! There is no real authentication behind the demo: any non-empty account
//! number and password pair is accepted and simply flips a signed-in flag
//! bound to the demo customer. Empty fields fail validation and the flag
//! stays unset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::dataset;
use crate::error::AppError;
use crate::models::{Credentials, User};

/// The signed-in state of the demo, the "isAuthenticated" flag of the pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthState {
    signed_in: bool,
    user: Option<User>,
    signed_in_at: Option<DateTime<Utc>>,
}

impl AuthState {
    /// A fresh, signed-out state.
    pub fn new() -> Self {
        Self {
            signed_in: false,
            user: None,
            signed_in_at: None,
        }
    }

    /// Attempts the demo sign-in.
    ///
    /// Both fields must be non-empty; the values themselves are never
    /// checked. On success the state carries the demo customer.
    pub fn sign_in(&mut self, credentials: &Credentials) -> Result<&User, AppError> {
        credentials.validate()?;

        self.signed_in = true;
        self.signed_in_at = Some(Utc::now());
        info!(account_number = %credentials.account_number, "demo sign-in");

        Ok(self.user.insert(dataset::demo().user.clone()))
    }

    /// Clears the flag and the attached user.
    pub fn sign_out(&mut self) {
        self.signed_in = false;
        self.user = None;
        self.signed_in_at = None;
    }

    /// Whether the dashboard may be shown.
    pub fn is_authenticated(&self) -> bool {
        self.signed_in
    }

    /// The signed-in customer, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// When the current sign-in happened.
    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(account_number: &str, password: &str) -> Credentials {
        Credentials {
            account_number: account_number.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_any_non_empty_credentials_sign_in() {
        let mut auth = AuthState::new();
        let user = auth.sign_in(&creds("0000", "whatever")).expect("demo sign-in");
        assert_eq!(user.name, "Thandiwe Mthembu");
        assert!(auth.is_authenticated());
        assert!(auth.signed_in_at().is_some());
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        let mut auth = AuthState::new();
        assert!(matches!(
            auth.sign_in(&creds("", "secret")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            auth.sign_in(&creds("62134567890", "")),
            Err(AppError::Validation(_))
        ));
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
    }

    #[test]
    fn test_sign_out_clears_the_flag() {
        let mut auth = AuthState::new();
        auth.sign_in(&creds("62134567890", "pw")).expect("demo sign-in");
        auth.sign_out();
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
    }
}
