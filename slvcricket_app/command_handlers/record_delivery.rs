use std::sync::Arc;

use slvcricket_game::models::{match_state::MatchState, player::Player};
use slvcricket_types::errors::{ApplicationError, GameError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::RecordDelivery},
};

/// Adds one ball to the batter's card, plus the runs of the shot if any.
pub struct RecordDeliveryCommandHandler {}

impl Default for RecordDeliveryCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordDeliveryCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl CommandHandler<RecordDelivery> for RecordDeliveryCommandHandler {
    fn handle(
        &self,
        command: RecordDelivery,
        state: &mut MatchState,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let (runs, balls) = state
            .get(command.player_id)
            .ok_or(GameError::PlayerNotFound(command.player_id))?
            .score_after(command.delivery);

        let player = state.update_score(command.player_id, runs, balls)?;
        Ok(player.clone())
    }
}
