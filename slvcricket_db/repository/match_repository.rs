use slvcricket_app::repository::MatchRepository;
use slvcricket_game::models::{match_state::MatchState, player::Player};
use slvcricket_types::errors::PersistenceError;

use crate::{
    key_value::KeyValueStore,
    mapping::{decode_match, encode_players},
};

/// Implements MatchRepository on top of a single key-value slot.
pub struct LocalStorageMatchRepository<S: KeyValueStore> {
    store: S,
    key: String,
    quota: usize,
}

impl<S: KeyValueStore> LocalStorageMatchRepository<S> {
    pub fn new(store: S, key: impl Into<String>, quota: usize) -> Self {
        Self {
            store,
            key: key.into(),
            quota,
        }
    }
}

impl<S: KeyValueStore> MatchRepository for LocalStorageMatchRepository<S> {
    fn save(&self, players: &[Player]) -> Result<(), PersistenceError> {
        let record = encode_players(players)?;
        if record.len() > self.quota {
            return Err(PersistenceError::QuotaExceeded {
                key: self.key.clone(),
                size: record.len(),
                quota: self.quota,
            });
        }

        self.store.set(&self.key, &record)?;
        tracing::debug!(key = %self.key, players = players.len(), "Saved match state");
        Ok(())
    }

    fn load(&self) -> Result<MatchState, PersistenceError> {
        match self.store.get(&self.key)? {
            Some(record) => decode_match(&record),
            None => {
                tracing::debug!(key = %self.key, "No saved match state");
                Ok(MatchState::new())
            }
        }
    }
}
