//! Session state gating the backoffice, plus the credential check seam.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};

/// Authenticated/unauthenticated flag. Starts signed out.
#[derive(Debug, Default)]
pub struct SessionStore {
    authenticated: bool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self) {
        if !self.authenticated {
            info!("Session opened");
        }
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        if self.authenticated {
            info!("Session closed");
        }
        self.authenticated = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingCredentials,
}

/// Checks credentials on behalf of the login screen.
///
/// The session store only reacts to the outcome; how it is produced is up to
/// the implementation.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Accepts any non-blank credentials after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        debug!("Simulating credential check for {:?}", credentials.username);
        tokio::time::sleep(self.delay).await;
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(())
    }
}
