//! Identity provider seam and the session-gated entry route.

use crate::storage::BoxFuture;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
}

/// Authentication failures, shown inline on the login form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("User already registered")]
    AlreadyRegistered,
    #[error("{0}")]
    Provider(String),
}

/// Email and password as typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Reject blank fields before anything reaches a provider.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(())
    }
}

/// Message shown after a successful sign-up.
pub const SIGN_UP_MESSAGE: &str = "Check your email to confirm your account!";

/// Source of the current session.
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, if any.
    fn current_user(&self) -> BoxFuture<'_, Option<UserIdentity>>;

    /// Register an account. Returns the confirmation message to show.
    fn sign_up(&self, credentials: &Credentials) -> BoxFuture<'_, Result<String, AuthError>>;

    /// Start a session.
    fn sign_in(&self, credentials: &Credentials) -> BoxFuture<'_, Result<UserIdentity, AuthError>>;

    /// End the session.
    fn sign_out(&self) -> BoxFuture<'_, Result<(), AuthError>>;
}

/// Where the shell should go for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRoute {
    Dashboard(UserIdentity),
    Login,
}

/// Mount the dashboard when a user is signed in, otherwise redirect to login.
pub async fn resolve_entry(provider: &dyn IdentityProvider) -> EntryRoute {
    match provider.current_user().await {
        Some(user) => EntryRoute::Dashboard(user),
        None => EntryRoute::Login,
    }
}

#[derive(Debug, Default)]
struct Accounts {
    /// email -> (user id, password)
    users: HashMap<String, (String, String)>,
    session: Option<UserIdentity>,
}

/// Process-local identity provider.
///
/// Accounts are confirmed immediately; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    accounts: RwLock<Accounts>,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider with one registered account and no session.
    pub fn with_account(email: &str, password: &str) -> Self {
        let provider = Self::new();
        if let Ok(mut accounts) = provider.accounts.write() {
            accounts.users.insert(
                email.to_string(),
                (Uuid::new_v4().to_string(), password.to_string()),
            );
        }
        provider
    }

    fn lock_error(e: impl std::fmt::Display) -> AuthError {
        AuthError::Provider(format!("Lock error: {}", e))
    }
}

impl IdentityProvider for MemoryIdentityProvider {
    fn current_user(&self) -> BoxFuture<'_, Option<UserIdentity>> {
        Box::pin(async move {
            self.accounts
                .read()
                .ok()
                .and_then(|accounts| accounts.session.clone())
        })
    }

    fn sign_up(&self, credentials: &Credentials) -> BoxFuture<'_, Result<String, AuthError>> {
        let credentials = credentials.clone();
        Box::pin(async move {
            credentials.validate()?;
            let mut accounts = self.accounts.write().map_err(Self::lock_error)?;
            if accounts.users.contains_key(&credentials.email) {
                return Err(AuthError::AlreadyRegistered);
            }
            accounts.users.insert(
                credentials.email.clone(),
                (Uuid::new_v4().to_string(), credentials.password),
            );
            log::info!("Registered {}", credentials.email);
            Ok(SIGN_UP_MESSAGE.to_string())
        })
    }

    fn sign_in(&self, credentials: &Credentials) -> BoxFuture<'_, Result<UserIdentity, AuthError>> {
        let credentials = credentials.clone();
        Box::pin(async move {
            credentials.validate()?;
            let mut accounts = self.accounts.write().map_err(Self::lock_error)?;
            let user = match accounts.users.get(&credentials.email) {
                Some((id, password)) if *password == credentials.password => UserIdentity {
                    id: id.clone(),
                    email: credentials.email.clone(),
                },
                _ => return Err(AuthError::InvalidCredentials),
            };
            accounts.session = Some(user.clone());
            log::info!("Signed in {}", user.email);
            Ok(user)
        })
    }

    fn sign_out(&self) -> BoxFuture<'_, Result<(), AuthError>> {
        Box::pin(async move {
            let mut accounts = self.accounts.write().map_err(Self::lock_error)?;
            if let Some(user) = accounts.session.take() {
                log::info!("Signed out {}", user.email);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::block_on;

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert_eq!(
            Credentials::new("", "secret").validate(),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            Credentials::new("a@b.c", "").validate(),
            Err(AuthError::MissingCredentials)
        );
        assert!(Credentials::new("a@b.c", "secret").validate().is_ok());
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "Email and password are required"
        );
    }

    #[test]
    fn test_entry_route_without_session_is_login() {
        let provider = MemoryIdentityProvider::new();
        assert_eq!(block_on(resolve_entry(&provider)), EntryRoute::Login);
    }

    #[test]
    fn test_sign_up_then_sign_in() {
        let provider = MemoryIdentityProvider::new();
        let creds = Credentials::new("ada@example.com", "hunter2");

        let message = block_on(provider.sign_up(&creds)).unwrap();
        assert_eq!(message, SIGN_UP_MESSAGE);
        assert_eq!(block_on(provider.sign_up(&creds)), Err(AuthError::AlreadyRegistered));

        let user = block_on(provider.sign_in(&creds)).unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(block_on(resolve_entry(&provider)), EntryRoute::Dashboard(user));
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let provider = MemoryIdentityProvider::with_account("ada@example.com", "right");
        let result = block_on(provider.sign_in(&Credentials::new("ada@example.com", "wrong")));
        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert!(block_on(provider.current_user()).is_none());
    }

    #[test]
    fn test_sign_out_clears_session() {
        let provider = MemoryIdentityProvider::with_account("ada@example.com", "pw");
        block_on(provider.sign_in(&Credentials::new("ada@example.com", "pw"))).unwrap();
        block_on(provider.sign_out()).unwrap();
        assert_eq!(block_on(resolve_entry(&provider)), EntryRoute::Login);
    }
}
