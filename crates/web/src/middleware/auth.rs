use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::WebError;

/// Rejects requests that do not carry a known bearer API key.
pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if api_keys.is_valid(token.trim()) => Ok(next.run(request).await),
        _ => {
            tracing::warn!("Invalid API key attempt");
            Err(WebError::Unauthorized)
        }
    }
}

#[derive(Clone, Default)]
pub struct ApiKeys {
    keys: Arc<HashSet<String>>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            keys: Arc::new(keys),
        }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
