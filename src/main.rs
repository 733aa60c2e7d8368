use std::io::Error;
use std::sync::Arc;
use std::time::Duration;

use poem::listener::TcpListener;
use poem::{EndpointExt, Route, Server, get, post};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::handlers::broadcast_poller::BroadcastPoller;
use crate::application::handlers::event_dispatcher::EventDispatcher;
use crate::config::Config;
use crate::infrastructure::clients::backend::BackendClient;
use crate::infrastructure::clients::line::LineClient;
use crate::presentation::http::endpoints::webhook;

mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::try_parse().map_err(Error::other)?;

    let records = BackendClient::new(config.backend_base_url.clone());
    let channel = LineClient::new(config.channel_token.clone());

    let dispatcher = Arc::new(EventDispatcher::new(records.clone(), channel.clone()));
    let poller = BroadcastPoller::new(records, channel)
        .start(Duration::from_secs(config.broadcast_period_secs));

    let app = Route::new()
        .at("/webhook", post(webhook::receive_webhook))
        .at("/health", get(webhook::health))
        .data(dispatcher);

    let bind_addr = format!("{}:{}", config.host, config.port);
    info!(addr = %bind_addr, "starting relay");

    let result = Server::new(TcpListener::bind(bind_addr)).run(app).await;

    poller.shutdown().await;

    result
}
