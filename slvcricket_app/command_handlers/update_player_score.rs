use std::sync::Arc;

use slvcricket_game::models::{match_state::MatchState, player::Player};
use slvcricket_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayerScore},
};

pub struct UpdatePlayerScoreCommandHandler {}

impl Default for UpdatePlayerScoreCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerScoreCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl CommandHandler<UpdatePlayerScore> for UpdatePlayerScoreCommandHandler {
    fn handle(
        &self,
        command: UpdatePlayerScore,
        state: &mut MatchState,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let player = state.update_score(command.player_id, command.runs, command.balls)?;
        Ok(player.clone())
    }
}
