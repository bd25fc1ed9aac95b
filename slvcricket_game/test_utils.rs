use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use crate::models::{match_state::MatchState, player::Player};

#[derive(Default, Clone)]
pub struct PlayerFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub name: Option<&'a str>,
    pub runs: Option<u32>,
    pub balls: Option<u32>,
    pub is_out: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

pub fn player_factory(options: PlayerFactoryOptions) -> Player {
    let id = options.id.unwrap_or_else(Uuid::new_v4);
    let name = options
        .name
        .map(str::to_string)
        .unwrap_or_else(|| format!("Batter {}", &id.simple().to_string()[..8]));

    Player::from_persistence(
        id,
        name,
        options.runs.unwrap_or(0),
        options.balls.unwrap_or(0),
        options.is_out.unwrap_or(false),
        options
            .created_at
            .unwrap_or_else(|| Utc::now().trunc_subsecs(3)),
    )
}

/// Builds a match with one fresh batter per name, in order.
pub fn match_state_factory(names: &[&str]) -> MatchState {
    MatchState::from_players(
        names
            .iter()
            .map(|name| {
                player_factory(PlayerFactoryOptions {
                    name: Some(name),
                    ..Default::default()
                })
            })
            .collect(),
    )
}
