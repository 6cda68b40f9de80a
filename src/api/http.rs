use super::Gateway;
use crate::libs::config::{normalize_base_url, ApiConfig};
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use parking_lot::RwLock;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Method, RequestBuilder,
};
use serde_json::Value;
use std::sync::Arc;

/// [`Gateway`] over HTTP with `reqwest`.
///
/// Clones share the HTTP connection pool and the token.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_base_url(&config.base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}{path}`, as used by `load`.
    pub fn load_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `{base}{path}/`, as used by every writing verb.
    pub fn write_url(&self, path: &str) -> String {
        format!("{}/", self.load_url(path.trim_end_matches('/')))
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.token.read().as_deref() {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Token {}", token))?);
        }
        Ok(headers)
    }

    fn request(&self, method: Method, url: String) -> Result<RequestBuilder> {
        Ok(self.client.request(method, url).headers(self.auth_headers()?))
    }

    async fn send_json(&self, method: Method, path: &str, body: &Value) -> Result<Value> {
        msg_debug!(Message::RequestSent {
            method: method.to_string(),
            path: path.to_string(),
        });
        let response = self.request(method, self.write_url(path))?.json(body).send().await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl Gateway for HttpGateway {
    async fn load(&self, path: &str) -> Result<Option<Value>> {
        msg_debug!(Message::RequestSent {
            method: "GET".to_string(),
            path: path.to_string(),
        });
        let response = self.request(Method::GET, self.load_url(path))?.send().await?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "{}", Message::LoadFailed(path.to_string()));
            return Ok(None);
        }
        Ok(Some(response.json::<Value>().await?))
    }

    async fn create(&self, path: &str, body: &Value) -> Result<Value> {
        self.send_json(Method::POST, path, body).await
    }

    async fn replace(&self, path: &str, body: &Value) -> Result<Value> {
        self.send_json(Method::PUT, path, body).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.send_json(Method::PATCH, path, body).await
    }

    async fn delete(&self, path: &str) -> Result<bool> {
        msg_debug!(Message::RequestSent {
            method: "DELETE".to_string(),
            path: path.to_string(),
        });
        let response = self.request(Method::DELETE, self.write_url(path))?.send().await?;
        let ok = response.status().is_success();
        if !ok {
            tracing::warn!(status = %response.status(), "{}", Message::DeleteFailed(path.to_string()));
        }
        Ok(ok)
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write() = token.filter(|t| !t.is_empty());
    }
}
