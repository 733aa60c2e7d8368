use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::application::services::channel::ChannelClient;
use crate::application::services::record_store::RecordStore;
use crate::domain::models::{DetectionRecord, OutboundMessage};

const RECENCY_WINDOW_MINUTES: i64 = 5;
// 1 header + up to 4 locations
const BATCH_CAP: usize = 5;
const BROADCAST_GATE: usize = 5;

const ALERT_HEADER_TEXT: &str = "Elephant detected";
const ALERT_LOCATION_TITLE: &str = "Elephant location";
const ALERT_LOCATION_ADDRESS: &str = "Elephant address";

/// Timer-driven task that re-broadcasts recent detections to all channel
/// subscribers. Cycles are stateless relative to each other; a failed cycle is
/// logged and the next scheduled one proceeds on its own.
pub struct BroadcastPoller {
    records: Arc<dyn RecordStore>,
    channel: Arc<dyn ChannelClient>,
}

/// Stops the poll loop when dropped into `shutdown`.
pub struct PollerHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub async fn shutdown(self) {
        let _ = self.stop.send(true);
        let _ = self.task.await;
    }
}

impl BroadcastPoller {
    pub fn new(records: Arc<dyn RecordStore>, channel: Arc<dyn ChannelClient>) -> Self {
        Self { records, channel }
    }

    /// Spawns the recurring poll task. The first cycle runs one full period
    /// after start, not immediately.
    pub fn start(self, period: Duration) -> PollerHandle {
        let (stop, mut stopped) = watch::channel(false);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the interval's first tick completes immediately
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => self.run_cycle().await,
                    _ = stopped.changed() => break,
                }
            }
        });
        PollerHandle { stop, task }
    }

    pub async fn run_cycle(&self) {
        if let Err(err) = self.cycle_at(Utc::now()).await {
            warn!(error = %err, "broadcast cycle failed");
        }
    }

    async fn cycle_at(&self, now: DateTime<Utc>) -> anyhow::Result<()> {
        let records = self.records.list_records().await?;

        let cutoff = now - chrono::Duration::minutes(RECENCY_WINDOW_MINUTES);
        // backend order is preserved, no sort
        let recent: Vec<&DetectionRecord> = records
            .iter()
            .filter(|record| record.datetime >= cutoff)
            .collect();

        let batch = build_batch(&recent);

        // TODO: confirm the gate direction with product; as written the channel
        // goes quiet exactly when five or more sightings cluster in the window.
        if recent.len() < BROADCAST_GATE {
            self.channel.broadcast(&batch).await?;
            info!(recent = recent.len(), items = batch.len(), "alert broadcast sent");
        } else {
            info!(recent = recent.len(), "alert broadcast suppressed");
        }

        Ok(())
    }
}

fn build_batch(recent: &[&DetectionRecord]) -> Vec<OutboundMessage> {
    let mut batch = vec![OutboundMessage::text(ALERT_HEADER_TEXT)];
    for record in recent {
        if batch.len() >= BATCH_CAP {
            break;
        }
        batch.push(OutboundMessage::location(
            ALERT_LOCATION_TITLE,
            ALERT_LOCATION_ADDRESS,
            record.location_lat,
            record.location_long,
        ));
    }
    batch
}
