use std::time::Duration;

use reqwest::Client;
use storage::models::Fight;

use super::FightNotifier;
use crate::error::{ClientError, Result};

/// Posts each fight as JSON to an external statistics collector.
pub struct HttpNotifier {
    client: Client,
    url: String,
}

impl HttpNotifier {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait::async_trait]
impl FightNotifier for HttpNotifier {
    async fn publish(&self, fight: &Fight) -> Result<()> {
        let response = self.client.post(&self.url).json(fight).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
