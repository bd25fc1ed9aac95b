use slvcricket_game::models::{match_state::MatchState, player::Player};
use slvcricket_types::errors::PersistenceError;

pub trait MatchRepository: Send + Sync {
    /// Writes the whole batting card under the match slot.
    fn save(&self, players: &[Player]) -> Result<(), PersistenceError>;

    /// Reads the batting card back. An empty match is returned when nothing
    /// has been saved yet.
    fn load(&self) -> Result<MatchState, PersistenceError>;
}
