pub mod cli;
pub mod console;
pub mod runner;

pub use runner::{open_store, resolve_player, run};
