use std::time::Duration;

use reqwest::{Client, StatusCode};
use storage::models::{Fighter, FighterKind};

use crate::error::{ClientError, Result};

/// Source of random fighters of one kind.
#[async_trait::async_trait]
pub trait FighterDirectory: Send + Sync {
    fn kind(&self) -> FighterKind;

    async fn fetch_random(&self) -> Result<Fighter>;
}

/// Directory reached over HTTP at `{base_url}/api/{heroes|villains}/random`.
pub struct HttpFighterDirectory {
    client: Client,
    base_url: String,
    kind: FighterKind,
}

impl HttpFighterDirectory {
    /// Every request made by this client fails once `timeout` has elapsed.
    pub fn new(base_url: impl Into<String>, kind: FighterKind, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            kind,
        })
    }

    fn random_url(&self) -> String {
        format!("{}/api/{}/random", self.base_url, self.kind.collection())
    }
}

#[async_trait::async_trait]
impl FighterDirectory for HttpFighterDirectory {
    fn kind(&self) -> FighterKind {
        self.kind
    }

    async fn fetch_random(&self) -> Result<Fighter> {
        let url = self.random_url();
        tracing::debug!("Fetching random {} from {}", self.kind, url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NO_CONTENT => Err(ClientError::EmptyDirectory(url)),
            status if !status.is_success() => Err(ClientError::StatusError {
                url,
                status: status.as_u16(),
            }),
            _ => {
                let fighter = response.json::<Fighter>().await?;
                tracing::debug!("Got random {} {}", self.kind, fighter.name);
                Ok(fighter)
            }
        }
    }
}
