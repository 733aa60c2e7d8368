use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::models::{DetectionRecord, NewRecord, OutboundMessage};

use super::channel::ChannelClient;
use super::record_store::RecordStore;

/// In-memory record store. Every call is recorded before the configured
/// failure fires, so tests can assert that a call was attempted.
#[derive(Default)]
pub struct StubRecordStore {
    pub records: Vec<DetectionRecord>,
    pub fail_create: bool,
    pub fail_list: bool,
    pub created: Mutex<Vec<NewRecord>>,
}

impl StubRecordStore {
    pub fn with_records(records: Vec<DetectionRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }
}

#[async_trait]
impl RecordStore for StubRecordStore {
    async fn create_record(&self, record: &NewRecord) -> anyhow::Result<()> {
        self.created.lock().unwrap().push(record.clone());
        if self.fail_create {
            anyhow::bail!("record store unavailable");
        }
        Ok(())
    }

    async fn list_records(&self) -> anyhow::Result<Vec<DetectionRecord>> {
        if self.fail_list {
            anyhow::bail!("record store unavailable");
        }
        Ok(self.records.clone())
    }
}

#[derive(Default)]
pub struct RecordingChannel {
    pub fail_reply: bool,
    pub fail_broadcast: bool,
    pub replies: Mutex<Vec<(String, Vec<OutboundMessage>)>>,
    pub broadcasts: Mutex<Vec<Vec<OutboundMessage>>>,
}

#[async_trait]
impl ChannelClient for RecordingChannel {
    async fn reply(&self, reply_token: &str, messages: &[OutboundMessage]) -> anyhow::Result<()> {
        self.replies
            .lock()
            .unwrap()
            .push((reply_token.to_string(), messages.to_vec()));
        if self.fail_reply {
            anyhow::bail!("reply rejected");
        }
        Ok(())
    }

    async fn broadcast(&self, messages: &[OutboundMessage]) -> anyhow::Result<()> {
        self.broadcasts.lock().unwrap().push(messages.to_vec());
        if self.fail_broadcast {
            anyhow::bail!("broadcast rejected");
        }
        Ok(())
    }
}
