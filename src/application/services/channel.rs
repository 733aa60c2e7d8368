use async_trait::async_trait;

use crate::domain::models::OutboundMessage;

/// Outbound side of the messaging platform: targeted replies and
/// channel-wide broadcasts.
#[async_trait]
pub trait ChannelClient: Send + Sync {
    async fn reply(&self, reply_token: &str, messages: &[OutboundMessage]) -> anyhow::Result<()>;
    async fn broadcast(&self, messages: &[OutboundMessage]) -> anyhow::Result<()>;
}
