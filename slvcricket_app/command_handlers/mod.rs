mod add_player;
mod delete_player;
mod mark_player_out;
mod record_delivery;
mod reset_match;
mod undo_last_ball;
mod update_player_name;
mod update_player_score;

pub use add_player::AddPlayerCommandHandler;
pub use delete_player::DeletePlayerCommandHandler;
pub use mark_player_out::MarkPlayerOutCommandHandler;
pub use record_delivery::RecordDeliveryCommandHandler;
pub use reset_match::ResetMatchCommandHandler;
pub use undo_last_ball::UndoLastBallCommandHandler;
pub use update_player_name::UpdatePlayerNameCommandHandler;
pub use update_player_score::UpdatePlayerScoreCommandHandler;
