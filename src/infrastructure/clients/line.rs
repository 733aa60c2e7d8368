use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::services::channel::ChannelClient;
use crate::domain::models::OutboundMessage;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct LineClient {
    http: Client,
    base_url: String,
    channel_token: String,
}

impl LineClient {
    pub fn new(channel_token: impl Into<String>) -> Arc<dyn ChannelClient> {
        Arc::new(Self {
            http: Client::builder()
                .user_agent("elephy-relay/line")
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build line client"),
            base_url: "https://api.line.me".to_string(),
            channel_token: channel_token.into(),
        }) as Arc<dyn ChannelClient>
    }

    async fn post_messages<T: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> anyhow::Result<()> {
        let response = self
            .http
            .post(format!("{}/v2/bot/message/{}", self.base_url, endpoint))
            .bearer_auth(&self.channel_token)
            .json(body)
            .send()
            .await?;
        if !response.status().is_success() {
            anyhow::bail!("line api returned status {}", response.status());
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct ReplyRequest<'a> {
    #[serde(rename = "replyToken")]
    reply_token: &'a str,
    messages: &'a [OutboundMessage],
}

#[derive(Serialize)]
struct BroadcastRequest<'a> {
    messages: &'a [OutboundMessage],
}

#[async_trait]
impl ChannelClient for LineClient {
    async fn reply(&self, reply_token: &str, messages: &[OutboundMessage]) -> anyhow::Result<()> {
        self.post_messages(
            "reply",
            &ReplyRequest {
                reply_token,
                messages,
            },
        )
        .await
    }

    async fn broadcast(&self, messages: &[OutboundMessage]) -> anyhow::Result<()> {
        self.post_messages("broadcast", &BroadcastRequest { messages })
            .await
    }
}
