use std::sync::Arc;

use slvcricket_game::models::{match_state::MatchState, player::Player};
use slvcricket_types::errors::{ApplicationError, GameError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UndoLastBall},
};

/// Takes one run and one ball off the batter's card.
///
/// Not a true undo: after a boundary only one of its runs is removed.
/// Batters without runs are left untouched.
pub struct UndoLastBallCommandHandler {}

impl Default for UndoLastBallCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoLastBallCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl CommandHandler<UndoLastBall> for UndoLastBallCommandHandler {
    fn handle(
        &self,
        command: UndoLastBall,
        state: &mut MatchState,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let player = state
            .get(command.player_id)
            .ok_or(GameError::PlayerNotFound(command.player_id))?;

        let Some((runs, balls)) = player.score_after_undo() else {
            tracing::debug!(player_id = %player.id, "Nothing to undo");
            return Ok(player.clone());
        };

        let player = state.update_score(command.player_id, runs, balls)?;
        Ok(player.clone())
    }
}
