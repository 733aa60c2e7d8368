pub mod event;
pub mod message;
pub mod record;

pub use event::{EventKind, InboundEvent, InboundMessage, WebhookPayload};
pub use message::OutboundMessage;
pub use record::{DetectionRecord, NewRecord};
