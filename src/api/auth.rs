//! Login, guest login and registration.
//!
//! The backend answers with a token on success. On failure it sends an
//! `error` text and, on newer deployments, a machine-readable `code`. The
//! code decides the [`AuthError`] variant; older deployments are recognised
//! by their error text.

use super::{paths, Gateway, JoinClient};
use crate::libs::messages::Message;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

const LEGACY_NOT_REGISTERED: &str = "E-Mail-Adresse ist nicht registriert.";
const LEGACY_INVALID_CREDENTIALS: &str = "Invalid email or password.";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email address is not registered")]
    NotRegistered,
    #[error("email and password do not match")]
    InvalidCredentials,
    #[error("guest login failed")]
    GuestLoginFailed,
    #[error("email address is already registered")]
    EmailTaken,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl AuthError {
    /// Text shown next to the form.
    pub fn message(&self) -> Message {
        match self {
            AuthError::NotRegistered => Message::NotRegistered,
            AuthError::InvalidCredentials => Message::LoginDataMismatch,
            AuthError::GuestLoginFailed => Message::GuestLoginFailed,
            AuthError::EmailTaken => Message::EmailAlreadyExists,
            AuthError::PasswordMismatch => Message::PasswordsDontMatch,
            AuthError::Rejected(reason) => Message::SignUpFailed(reason.clone()),
            AuthError::Transport(e) => Message::SignUpFailed(e.to_string()),
        }
    }
}

/// Token and display name after a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    pub token: String,
    pub name: String,
}

/// Body of `POST api/auth/registration`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub repeated_password: String,
}

#[derive(Debug, Default, Deserialize)]
struct AuthAnswer {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    code: Option<String>,
}

impl AuthAnswer {
    fn parse(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    fn error_text(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    fn has_error(&self) -> bool {
        self.error_text().is_some() || self.code.is_some()
    }

    /// Maps a failed answer onto an [`AuthError`].
    fn classify(&self) -> AuthError {
        match self.code.as_deref() {
            Some("not_registered") => return AuthError::NotRegistered,
            Some("invalid_credentials") => return AuthError::InvalidCredentials,
            Some("email_exists") => return AuthError::EmailTaken,
            _ => {}
        }
        match self.error_text() {
            Some(text) if text == LEGACY_NOT_REGISTERED => AuthError::NotRegistered,
            Some(text) if text == LEGACY_INVALID_CREDENTIALS => AuthError::InvalidCredentials,
            Some(text) => AuthError::Rejected(text),
            None => AuthError::Rejected(self.code.clone().unwrap_or_else(|| "no token".to_string())),
        }
    }
}

impl<G: Gateway> JoinClient<G> {
    /// `POST api/auth/login`. The session name is the user's full name.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError> {
        let body = json!({ "email": email, "password": password });
        let answer = AuthAnswer::parse(self.gateway.create(paths::LOGIN, &body).await?);
        match answer.token() {
            Some(token) => Ok(LoginSession {
                token: token.to_string(),
                name: answer.full_name.clone().unwrap_or_default(),
            }),
            None => Err(answer.classify()),
        }
    }

    /// `POST api/auth/guestlogin`. The session name is the backend's username.
    pub async fn guest_login(&self, email: &str) -> Result<LoginSession, AuthError> {
        let body = json!({ "email": email });
        let answer = AuthAnswer::parse(self.gateway.create(paths::GUEST_LOGIN, &body).await?);
        match answer.token() {
            Some(token) => Ok(LoginSession {
                token: token.to_string(),
                name: answer.username.clone().unwrap_or_default(),
            }),
            None => Err(AuthError::GuestLoginFailed),
        }
    }

    /// `true` when the backend reports the email as already in use.
    pub async fn email_taken(&self, email: &str) -> Result<bool, AuthError> {
        let body = json!({ "email": email });
        let answer = AuthAnswer::parse(self.gateway.create(paths::CHECK_EMAIL, &body).await?);
        Ok(answer.has_error())
    }

    /// `POST api/auth/registration`, returning the new account's token.
    pub async fn register(&self, registration: &Registration) -> Result<String, AuthError> {
        let body = serde_json::to_value(registration).map_err(anyhow::Error::from)?;
        let answer = AuthAnswer::parse(self.gateway.create(paths::REGISTRATION, &body).await?);
        match answer.token() {
            Some(token) => Ok(token.to_string()),
            None => Err(answer.classify()),
        }
    }
}
