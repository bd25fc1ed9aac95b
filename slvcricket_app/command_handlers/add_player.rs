use std::sync::Arc;

use slvcricket_game::models::{match_state::MatchState, player::Player};
use slvcricket_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::AddPlayer},
};

pub struct AddPlayerCommandHandler {}

impl Default for AddPlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AddPlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl CommandHandler<AddPlayer> for AddPlayerCommandHandler {
    fn handle(
        &self,
        command: AddPlayer,
        state: &mut MatchState,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let player = state.add_player(&command.name)?;
        tracing::debug!(player_id = %player.id, name = %player.name, "Player added");
        Ok(player)
    }
}
