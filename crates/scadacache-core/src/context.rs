// ── Application context ──
//
// Built once at startup and cloned into every component that needs cache
// access. Replaces a process-wide static holding all collaborators.

use std::sync::Arc;

use crate::access::DataAccess;
use crate::auth::{self, LoginError, UserVerifier};
use crate::config::AccessConfig;

/// Shared handles of one running application. Cheap to clone.
#[derive(Clone)]
pub struct AppContext {
    access: Arc<DataAccess>,
    verifier: Option<Arc<dyn UserVerifier>>,
}

impl AppContext {
    pub fn new(access: DataAccess) -> Self {
        Self {
            access: Arc::new(access),
            verifier: None,
        }
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn UserVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn access(&self) -> &Arc<DataAccess> {
        &self.access
    }

    pub fn config(&self) -> &AccessConfig {
        self.access.config()
    }

    /// Check a login through the configured verifier. Without one the
    /// server is treated as unavailable.
    pub fn check_user(
        &self,
        username: &str,
        password: &str,
        check_password: bool,
    ) -> Result<i32, LoginError> {
        let verifier = self
            .verifier
            .as_deref()
            .ok_or(LoginError::ServerUnavailable)?;
        auth::check_user(verifier, username, password, check_password)
    }
}
