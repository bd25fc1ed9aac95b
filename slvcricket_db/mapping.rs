use std::collections::HashSet;

use slvcricket_game::{
    models::{
        match_state::MatchState,
        player::{Player, normalize_name},
    },
    time::{format_iso8601, parse_iso8601},
};
use slvcricket_types::errors::PersistenceError;

use crate::models::StoredPlayer;

impl From<&Player> for StoredPlayer {
    fn from(player: &Player) -> Self {
        StoredPlayer {
            id: player.id,
            name: player.name.clone(),
            runs: player.runs,
            balls: player.balls,
            is_out: player.is_out,
            created_at: format_iso8601(&player.created_at),
        }
    }
}

impl TryFrom<StoredPlayer> for Player {
    type Error = PersistenceError;

    fn try_from(stored: StoredPlayer) -> Result<Self, Self::Error> {
        let name = normalize_name(&stored.name).map_err(|_| PersistenceError::InvalidName {
            player_id: stored.id,
        })?;
        let created_at =
            parse_iso8601(&stored.created_at).ok_or_else(|| PersistenceError::InvalidTimestamp {
                player_id: stored.id,
                value: stored.created_at.clone(),
            })?;

        Ok(Player::from_persistence(
            stored.id,
            name,
            stored.runs,
            stored.balls,
            stored.is_out,
            created_at,
        ))
    }
}

/// Serializes the batting card into the stored record (a JSON array).
pub fn encode_players(players: &[Player]) -> Result<String, PersistenceError> {
    let stored: Vec<StoredPlayer> = players.iter().map(StoredPlayer::from).collect();
    Ok(serde_json::to_string(&stored)?)
}

/// Rebuilds the match from a stored record, keeping the stored order.
pub fn decode_match(record: &str) -> Result<MatchState, PersistenceError> {
    let stored: Vec<StoredPlayer> = serde_json::from_str(record)?;

    let mut seen = HashSet::with_capacity(stored.len());
    let mut players = Vec::with_capacity(stored.len());
    for entry in stored {
        if !seen.insert(entry.id) {
            return Err(PersistenceError::DuplicatePlayer(entry.id));
        }
        players.push(Player::try_from(entry)?);
    }

    Ok(MatchState::from_players(players))
}
