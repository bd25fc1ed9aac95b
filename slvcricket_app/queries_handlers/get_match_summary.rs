use std::sync::Arc;

use slvcricket_game::{models::match_state::MatchState, stats::MatchSummary};
use slvcricket_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetMatchSummary},
};

pub struct GetMatchSummaryHandler {}

impl Default for GetMatchSummaryHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetMatchSummaryHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl QueryHandler<GetMatchSummary> for GetMatchSummaryHandler {
    fn handle(
        &self,
        _query: GetMatchSummary,
        state: &MatchState,
        _config: &Arc<Config>,
    ) -> Result<<GetMatchSummary as Query>::Output, ApplicationError> {
        Ok(MatchSummary::from_players(state.players()))
    }
}
