use std::sync::Arc;

use slvcricket_game::models::{match_state::MatchState, player::Player};
use slvcricket_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayerName},
};

pub struct UpdatePlayerNameCommandHandler {}

impl Default for UpdatePlayerNameCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerNameCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl CommandHandler<UpdatePlayerName> for UpdatePlayerNameCommandHandler {
    fn handle(
        &self,
        command: UpdatePlayerName,
        state: &mut MatchState,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let player = state.rename_player(command.player_id, &command.name)?;
        Ok(player.clone())
    }
}

#[cfg(test)]
mod tests {
    use slvcricket_game::test_utils::match_state_factory;
    use slvcricket_types::errors::GameError;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_rename_trims_name() {
        let config = Arc::new(Config::default());
        let mut state = match_state_factory(&["Virat", "Rohit"]);
        let player_id = state.players()[1].id;

        let player = UpdatePlayerNameCommandHandler::new()
            .handle(
                UpdatePlayerName {
                    player_id,
                    name: "  Hitman ".to_string(),
                },
                &mut state,
                &config,
            )
            .unwrap();

        assert_eq!(player.name, "Hitman");
        assert_eq!(state.players()[1].name, "Hitman");
        assert_eq!(state.players()[0].name, "Virat");
    }

    #[test]
    fn test_rename_rejects_blank_name() {
        let config = Arc::new(Config::default());
        let mut state = match_state_factory(&["Virat"]);
        let player_id = state.players()[0].id;

        let result = UpdatePlayerNameCommandHandler::new().handle(
            UpdatePlayerName {
                player_id,
                name: "\t ".to_string(),
            },
            &mut state,
            &config,
        );

        match result {
            Err(ApplicationError::Game(GameError::EmptyPlayerName)) => {}
            other => panic!("Expected EmptyPlayerName error, got: {:?}", other),
        }
        assert_eq!(state.players()[0].name, "Virat");
    }

    #[test]
    fn test_rename_unknown_player() {
        let config = Arc::new(Config::default());
        let mut state = match_state_factory(&["Virat"]);

        let result = UpdatePlayerNameCommandHandler::new().handle(
            UpdatePlayerName {
                player_id: Uuid::new_v4(),
                name: "Someone".to_string(),
            },
            &mut state,
            &config,
        );

        assert!(matches!(
            result,
            Err(ApplicationError::Game(GameError::PlayerNotFound(_)))
        ));
    }
}
