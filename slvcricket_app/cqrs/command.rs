use std::sync::Arc;

use slvcricket_game::models::match_state::MatchState;
use slvcricket_types::errors::ApplicationError;

use crate::{config::Config, notifications::Notification};

/// A marker trait for Command structs.
/// Commands are operations that change the state of the match.
pub trait Command {
    /// What the handler hands back once the command is committed.
    type Output;

    /// Message for the scorer after a successful commit.
    fn notification(_output: &Self::Output) -> Option<Notification> {
        None
    }
}

/// A trait for handlers that execute Commands.
/// It receives the command and a draft of the match state to mutate.
/// It should NOT persist anything; committing the draft and writing it
/// through to storage is the job of the PlayerStore.
pub trait CommandHandler<C: Command> {
    fn handle(
        &self,
        cmd: C,
        state: &mut MatchState,
        config: &Arc<Config>,
    ) -> Result<C::Output, ApplicationError>;
}
