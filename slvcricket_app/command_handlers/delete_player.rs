use std::sync::Arc;

use slvcricket_game::models::{match_state::MatchState, player::Player};
use slvcricket_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeletePlayer},
};

/// Removes a batter from the match and hands back the removed record.
pub struct DeletePlayerCommandHandler {}

impl Default for DeletePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl CommandHandler<DeletePlayer> for DeletePlayerCommandHandler {
    fn handle(
        &self,
        command: DeletePlayer,
        state: &mut MatchState,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        Ok(state.remove_player(command.player_id)?)
    }
}
