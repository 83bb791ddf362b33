//! Login role check.
//!
//! The credential check itself belongs to the remote server
//! ([`UserVerifier`]); this module turns its answer into a login decision
//! using the role numbering scheme.

use thiserror::Error;
use tracing::warn;

use crate::config::Locale;
use crate::error::SourceError;
use crate::model::RoleScheme;
use crate::phrases::Phrases;

/// Remote credential check. Returns the user's role id, which is
/// [`RoleScheme::ERR`] for an unknown user or wrong password.
pub trait UserVerifier: Send + Sync {
    fn verify(&self, username: &str, password: Option<&str>) -> Result<i32, SourceError>;
}

/// Why a login was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("wrong username or password")]
    WrongPassword,

    #[error("the account is disabled")]
    NoRights,

    #[error("application roles cannot log in interactively")]
    IllegalRole,

    #[error("the server is unavailable")]
    ServerUnavailable,
}

impl LoginError {
    /// Localized text to show the user.
    pub fn message(self, locale: Locale) -> &'static str {
        let phrases = Phrases::for_locale(locale);
        match self {
            Self::WrongPassword => phrases.wrong_password,
            Self::NoRights => phrases.no_rights,
            Self::IllegalRole => phrases.illegal_role,
            Self::ServerUnavailable => phrases.server_unavailable,
        }
    }
}

/// Check a login and return the user's role id.
///
/// With `check_password` unset the verifier is asked for the role only
/// (no password is sent), as for an already authenticated session.
pub fn check_user(
    verifier: &dyn UserVerifier,
    username: &str,
    password: &str,
    check_password: bool,
) -> Result<i32, LoginError> {
    if check_password && password.is_empty() {
        return Err(LoginError::WrongPassword);
    }

    let role_id = verifier
        .verify(username, check_password.then_some(password))
        .map_err(|e| {
            warn!(username, error = %e, "user verification failed");
            LoginError::ServerUnavailable
        })?;

    match role_id {
        RoleScheme::DISABLED => Err(LoginError::NoRights),
        RoleScheme::APP => Err(LoginError::IllegalRole),
        RoleScheme::ERR => Err(LoginError::WrongPassword),
        role_id => Ok(role_id),
    }
}
