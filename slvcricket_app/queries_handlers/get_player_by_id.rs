use std::sync::Arc;

use slvcricket_game::models::match_state::MatchState;
use slvcricket_types::errors::{ApplicationError, GameError};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetPlayerById},
};

pub struct GetPlayerByIdHandler {}

impl Default for GetPlayerByIdHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetPlayerByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl QueryHandler<GetPlayerById> for GetPlayerByIdHandler {
    fn handle(
        &self,
        query: GetPlayerById,
        state: &MatchState,
        _config: &Arc<Config>,
    ) -> Result<<GetPlayerById as Query>::Output, ApplicationError> {
        state
            .get(query.player_id)
            .cloned()
            .ok_or_else(|| GameError::PlayerNotFound(query.player_id).into())
    }
}

#[cfg(test)]
mod tests {
    use slvcricket_game::test_utils::match_state_factory;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_get_player_by_id() {
        let config = Arc::new(Config::default());
        let state = match_state_factory(&["Virat", "Rohit"]);
        let handler = GetPlayerByIdHandler::new();

        let wanted = state.players()[1].clone();
        let found = handler
            .handle(
                GetPlayerById {
                    player_id: wanted.id,
                },
                &state,
                &config,
            )
            .unwrap();
        assert_eq!(found, wanted);

        let result = handler.handle(
            GetPlayerById {
                player_id: Uuid::new_v4(),
            },
            &state,
            &config,
        );
        assert!(matches!(
            result,
            Err(ApplicationError::Game(GameError::PlayerNotFound(_)))
        ));
    }
}
