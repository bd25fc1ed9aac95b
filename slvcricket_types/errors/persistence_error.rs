use thiserror::Error;
use uuid::Uuid;

/// Errors for the durable storage slot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Record for '{key}' is {size} bytes, over the {quota} bytes quota")]
    QuotaExceeded {
        key: String,
        size: usize,
        quota: usize,
    },

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("Player {player_id} has an invalid creation timestamp '{value}'")]
    InvalidTimestamp { player_id: Uuid, value: String },

    #[error("Player {player_id} is stored without a name")]
    InvalidName { player_id: Uuid },

    #[error("Player with ID {0} is stored more than once")]
    DuplicatePlayer(Uuid),

    #[error("Storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
