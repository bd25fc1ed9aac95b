mod get_match_summary;
mod get_player_by_id;
mod get_players;

pub use get_match_summary::GetMatchSummaryHandler;
pub use get_player_by_id::GetPlayerByIdHandler;
pub use get_players::GetPlayersHandler;
