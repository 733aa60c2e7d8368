use std::sync::Arc;

use poem::handler;
use poem::web::{Data, Json};

use crate::application::handlers::event_dispatcher::EventDispatcher;
use crate::domain::models::WebhookPayload;

/// Webhook receiver for the messaging platform. The platform delivers
/// at-least-once and expects a 200 no matter what happened per event.
#[handler]
pub async fn receive_webhook(
    Data(dispatcher): Data<&Arc<EventDispatcher>>,
    Json(payload): Json<WebhookPayload>,
) -> &'static str {
    dispatcher.dispatch(payload.events).await;
    "Success"
}

#[handler]
pub fn health() -> &'static str {
    "OK"
}
