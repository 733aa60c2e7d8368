use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::application::services::channel::ChannelClient;
use crate::application::services::record_store::RecordStore;
use crate::domain::models::{EventKind, InboundEvent, InboundMessage, NewRecord, OutboundMessage};

const REPORT_INFORMANT: &str = "Line user";
const REPORT_ACK_TEXT: &str = "Thank you for your report.";
const SUMMARY_URL: &str = "https://elephy.vercel.app/summary";
const HELP_TEXT: &str = "Please share location if you detect the elephants \
     or click the menu/type \"History\" to see the history";

/// Classifies each event of a webhook delivery and reacts through the two
/// client wrappers. Events are independent: one event's failure never stops
/// the rest of the batch, and no error escapes to the webhook caller.
pub struct EventDispatcher {
    records: Arc<dyn RecordStore>,
    channel: Arc<dyn ChannelClient>,
}

#[derive(Debug, PartialEq)]
enum Intent {
    Report { latitude: f64, longitude: f64 },
    History,
    TodayRecords,
    Fallback,
}

fn classify(event: &InboundEvent) -> Intent {
    if event.kind == EventKind::Message {
        match &event.message {
            Some(InboundMessage::Location {
                latitude,
                longitude,
            }) => {
                return Intent::Report {
                    latitude: *latitude,
                    longitude: *longitude,
                };
            }
            Some(InboundMessage::Text { text }) => {
                if text.eq_ignore_ascii_case("history") {
                    return Intent::History;
                }
                if text.eq_ignore_ascii_case("today records") {
                    return Intent::TodayRecords;
                }
            }
            _ => {}
        }
    }
    Intent::Fallback
}

impl EventDispatcher {
    pub fn new(records: Arc<dyn RecordStore>, channel: Arc<dyn ChannelClient>) -> Self {
        Self { records, channel }
    }

    pub async fn dispatch(&self, events: Vec<InboundEvent>) {
        for event in events {
            self.handle_event(event).await;
        }
    }

    async fn handle_event(&self, event: InboundEvent) {
        let reply_token = event.reply_token.as_deref();

        match classify(&event) {
            Intent::Report {
                latitude,
                longitude,
            } => {
                // record forwarding and the acknowledgement are independent;
                // neither blocks the other
                let report = NewRecord {
                    informant: REPORT_INFORMANT.to_string(),
                    location_lat: latitude,
                    location_long: longitude,
                };
                if let Err(err) = self.records.create_record(&report).await {
                    warn!(error = %err, "failed to forward sighting report");
                }
                self.reply(reply_token, vec![OutboundMessage::text(REPORT_ACK_TEXT)])
                    .await;
            }
            Intent::History => {
                self.reply(reply_token, vec![OutboundMessage::text(SUMMARY_URL)])
                    .await;
            }
            Intent::TodayRecords => match self.records.list_records().await {
                Ok(records) => {
                    let today = Utc::now().date_naive();
                    let count = records
                        .iter()
                        .filter(|record| record.datetime.date_naive() == today)
                        .count();
                    let summary = format!("Elephant sightings reported today: {count}");
                    self.reply(reply_token, vec![OutboundMessage::text(summary)])
                        .await;
                }
                Err(err) => warn!(error = %err, "failed to fetch today's records"),
            },
            Intent::Fallback => {
                self.reply(reply_token, vec![OutboundMessage::text(HELP_TEXT)])
                    .await;
            }
        }
    }

    async fn reply(&self, reply_token: Option<&str>, messages: Vec<OutboundMessage>) {
        let Some(token) = reply_token else {
            warn!("event carries no reply token, skipping reply");
            return;
        };
        if let Err(err) = self.channel.reply(token, &messages).await {
            warn!(error = %err, "failed to send reply");
        }
    }
}
