pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod export;
pub mod notifications;
pub mod player_store;
pub mod queries_handlers;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use player_store::PlayerStore;
