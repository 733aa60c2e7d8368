pub mod broadcast_poller;
pub mod event_dispatcher;
