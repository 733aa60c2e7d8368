pub mod channel;
pub mod record_store;

#[cfg(test)]
pub mod testing;
