use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::services::record_store::RecordStore;
use crate::domain::models::{DetectionRecord, NewRecord};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Arc<dyn RecordStore> {
        Arc::new(Self {
            http: Client::builder()
                .user_agent("elephy-relay/backend")
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build backend client"),
            base_url: base_url.into(),
        }) as Arc<dyn RecordStore>
    }
}

#[async_trait]
impl RecordStore for BackendClient {
    async fn create_record(&self, record: &NewRecord) -> anyhow::Result<()> {
        let response = self
            .http
            .post(format!("{}/record", self.base_url))
            .json(record)
            .send()
            .await?;
        if !response.status().is_success() {
            anyhow::bail!("record store returned status {}", response.status());
        }
        Ok(())
    }

    async fn list_records(&self) -> anyhow::Result<Vec<DetectionRecord>> {
        let response = self
            .http
            .get(format!("{}/elephant-records", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            anyhow::bail!("record store returned status {}", response.status());
        }
        Ok(response.json().await?)
    }
}
