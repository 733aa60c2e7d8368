use async_trait::async_trait;

use crate::domain::models::{DetectionRecord, NewRecord};

/// Access to the external record-storage service. Stateless beyond its base URL.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_record(&self, record: &NewRecord) -> anyhow::Result<()>;
    async fn list_records(&self) -> anyhow::Result<Vec<DetectionRecord>>;
}
