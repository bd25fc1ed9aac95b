use std::sync::Arc;

use slvcricket_game::models::{match_state::MatchState, player::Player};
use slvcricket_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::MarkPlayerOut},
};

pub struct MarkPlayerOutCommandHandler {}

impl Default for MarkPlayerOutCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkPlayerOutCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl CommandHandler<MarkPlayerOut> for MarkPlayerOutCommandHandler {
    fn handle(
        &self,
        command: MarkPlayerOut,
        state: &mut MatchState,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let player = state.mark_out(command.player_id)?;
        Ok(player.clone())
    }
}
