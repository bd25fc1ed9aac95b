use uuid::Uuid;

use slvcricket_game::{models::player::Player, stats::MatchSummary};

use crate::cqrs::Query;

#[derive(Debug, Clone)]
pub struct GetPlayers;

impl Query for GetPlayers {
    type Output = Vec<Player>;
}

#[derive(Debug, Clone)]
pub struct GetPlayerById {
    pub player_id: Uuid,
}

impl Query for GetPlayerById {
    type Output = Player;
}

#[derive(Debug, Clone)]
pub struct GetMatchSummary;

impl Query for GetMatchSummary {
    type Output = MatchSummary;
}
