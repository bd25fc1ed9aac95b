use thiserror::Error;
use uuid::Uuid;

/// Errors for domain logic (scoring rules).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Player name can't be empty")]
    EmptyPlayerName,

    #[error("Player with ID {0} not found")]
    PlayerNotFound(Uuid),
}
