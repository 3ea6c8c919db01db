use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::warn;

#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.auth_login.clone(), config.auth_password.clone())
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Username of a request that passed the basic-auth check.
#[derive(Debug)]
pub struct AuthenticatedUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some((username, password)) = basic_credentials(&parts.headers) else {
            warn!(path = %parts.uri.path(), "missing or malformed basic auth header");
            return Err(AppError::unauthorized());
        };

        if !state.credentials.matches(&username, &password) {
            warn!(path = %parts.uri.path(), "rejected credentials");
            return Err(AppError::unauthorized());
        }

        Ok(AuthenticatedUser(username))
    }
}

fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
