use std::sync::Arc;

use slvcricket_game::models::match_state::MatchState;
use slvcricket_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetPlayers},
};

pub struct GetPlayersHandler {}

impl Default for GetPlayersHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl QueryHandler<GetPlayers> for GetPlayersHandler {
    fn handle(
        &self,
        _query: GetPlayers,
        state: &MatchState,
        _config: &Arc<Config>,
    ) -> Result<<GetPlayers as Query>::Output, ApplicationError> {
        Ok(state.players().to_vec())
    }
}
