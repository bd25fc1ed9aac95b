use std::sync::Arc;

use slvcricket_game::models::match_state::MatchState;
use slvcricket_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::ResetMatch},
};

pub struct ResetMatchCommandHandler {}

impl Default for ResetMatchCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetMatchCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl CommandHandler<ResetMatch> for ResetMatchCommandHandler {
    fn handle(
        &self,
        _command: ResetMatch,
        state: &mut MatchState,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        tracing::debug!(players = state.len(), "Clearing match");
        state.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use slvcricket_game::test_utils::match_state_factory;

    use super::*;

    #[test]
    fn test_reset_clears_everything() {
        let config = Arc::new(Config::default());
        let handler = ResetMatchCommandHandler::new();

        let mut state = match_state_factory(&["A", "B", "C"]);
        handler.handle(ResetMatch, &mut state, &config).unwrap();
        assert!(state.is_empty());

        let mut empty = MatchState::new();
        handler.handle(ResetMatch, &mut empty, &config).unwrap();
        assert!(empty.is_empty());
    }
}
