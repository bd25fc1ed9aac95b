use thiserror::Error;

pub mod export_error;
pub mod game_error;
pub mod persistence_error;

pub use export_error::ExportError;
pub use game_error::GameError;
pub use persistence_error::PersistenceError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

/// Coarse classification used by collaborators to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Persistence,
    Export,
    Unknown,
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::Game(GameError::EmptyPlayerName) => ErrorKind::Validation,
            ApplicationError::Game(GameError::PlayerNotFound(_)) => ErrorKind::NotFound,
            ApplicationError::Persistence(_) => ErrorKind::Persistence,
            ApplicationError::Export(_) => ErrorKind::Export,
            ApplicationError::Unknown(_) => ErrorKind::Unknown,
        }
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}
