//! Remote data access for the Join backend.
//!
//! [`Gateway`] is the raw JSON transport with the backend's conventions
//! (trailing slashes, token header, failure sentinels). [`JoinClient`] wraps
//! any gateway with typed calls for tasks, subtasks, contacts, the summary
//! and authentication; those live in the submodules.
//!
//! ## Failure Sentinels
//!
//! | Verb                      | Non-2xx answer                  |
//! |---------------------------|---------------------------------|
//! | `load`                    | `Ok(None)`                      |
//! | `create`/`replace`/`patch`| body parsed anyway              |
//! | `delete`                  | `Ok(false)`                     |
//!
//! Connection failures and unparsable bodies are `Err`.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod auth;
pub mod board;
pub mod contacts;
pub mod http;

pub use auth::{AuthError, LoginSession, Registration};
pub use http::HttpGateway;

/// Backend paths, relative to the base URL.
pub mod paths {
    pub const LOGIN: &str = "api/auth/login";
    pub const REGISTRATION: &str = "api/auth/registration";
    pub const GUEST_LOGIN: &str = "api/auth/guestlogin";
    pub const CHECK_EMAIL: &str = "api/auth/checkEmail";
    pub const TASKS: &str = "join/tasks";
    pub const SUBTASKS: &str = "join/subtasks";
    pub const CONTACTS: &str = "join/contacts";
    pub const SUMMARY: &str = "join/summary";

    pub fn task(id: u64) -> String {
        format!("{}/{}", TASKS, id)
    }

    pub fn subtask(id: u64) -> String {
        format!("{}/{}", SUBTASKS, id)
    }

    pub fn contact(id: u64) -> String {
        format!("{}/{}", CONTACTS, id)
    }
}

/// JSON transport to the backend.
///
/// Implementations send `Authorization: Token <token>` whenever a token is
/// set and `Content-Type: application/json` on requests with a body.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// `GET {base}{path}`. `None` when the backend answers non-2xx.
    async fn load(&self, path: &str) -> Result<Option<Value>>;

    /// `POST {base}{path}/`.
    async fn create(&self, path: &str, body: &Value) -> Result<Value>;

    /// `PUT {base}{path}/`.
    async fn replace(&self, path: &str, body: &Value) -> Result<Value>;

    /// `PATCH {base}{path}/`.
    async fn patch(&self, path: &str, body: &Value) -> Result<Value>;

    /// `DELETE {base}{path}/`. `false` when the backend refused.
    async fn delete(&self, path: &str) -> Result<bool>;

    /// Replaces the token used for subsequent requests.
    fn set_token(&self, token: Option<String>);
}

/// Typed access to every backend endpoint the client uses.
#[derive(Debug, Clone)]
pub struct JoinClient<G> {
    gateway: G,
}

impl<G: Gateway> JoinClient<G> {
    pub fn new(gateway: G) -> Self {
        JoinClient { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn set_token(&self, token: Option<String>) {
        self.gateway.set_token(token);
    }
}

/// Decodes a list answer; a refused load is an empty list.
///
/// Records that do not decode are skipped with a warning so one broken
/// entry does not hide the rest.
pub(crate) fn decode_list<T: DeserializeOwned>(path: &str, value: Option<Value>) -> Result<Vec<T>> {
    let items = match value {
        Some(Value::Null) | None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(msg_error_anyhow!(Message::UnexpectedAnswer(path.to_string(), other.to_string()))),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "{}", Message::RecordSkipped(path.to_string()));
                None
            }
        })
        .collect())
}

/// Backend id in a create or replace answer. Refusals come back without one.
pub(crate) fn answer_id(answer: &Value) -> Option<u64> {
    answer.get("id").and_then(Value::as_u64)
}
