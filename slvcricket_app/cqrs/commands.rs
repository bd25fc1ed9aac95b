use uuid::Uuid;

use slvcricket_game::models::player::{Delivery, Player};

use crate::{cqrs::Command, notifications::Notification};

#[derive(Debug, Clone)]
pub struct AddPlayer {
    pub name: String,
}

impl AddPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Command for AddPlayer {
    type Output = Player;

    fn notification(player: &Player) -> Option<Notification> {
        Some(Notification::player_added(player))
    }
}

/// Replaces a batter's scorecard. Negative values are floored at zero.
#[derive(Debug, Clone)]
pub struct UpdatePlayerScore {
    pub player_id: Uuid,
    pub runs: i64,
    pub balls: i64,
}

impl Command for UpdatePlayerScore {
    type Output = Player;

    fn notification(player: &Player) -> Option<Notification> {
        Some(Notification::score_updated(player))
    }
}

#[derive(Debug, Clone)]
pub struct RecordDelivery {
    pub player_id: Uuid,
    pub delivery: Delivery,
}

impl Command for RecordDelivery {
    type Output = Player;

    fn notification(player: &Player) -> Option<Notification> {
        Some(Notification::score_updated(player))
    }
}

#[derive(Debug, Clone)]
pub struct UndoLastBall {
    pub player_id: Uuid,
}

impl Command for UndoLastBall {
    type Output = Player;

    fn notification(player: &Player) -> Option<Notification> {
        Some(Notification::score_updated(player))
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePlayerName {
    pub player_id: Uuid,
    pub name: String,
}

impl Command for UpdatePlayerName {
    type Output = Player;

    fn notification(_player: &Player) -> Option<Notification> {
        Some(Notification::player_updated())
    }
}

#[derive(Debug, Clone)]
pub struct DeletePlayer {
    pub player_id: Uuid,
}

impl Command for DeletePlayer {
    type Output = Player;

    fn notification(player: &Player) -> Option<Notification> {
        Some(Notification::player_removed(player))
    }
}

#[derive(Debug, Clone)]
pub struct MarkPlayerOut {
    pub player_id: Uuid,
}

impl Command for MarkPlayerOut {
    type Output = Player;

    fn notification(player: &Player) -> Option<Notification> {
        Some(Notification::player_out(player))
    }
}

#[derive(Debug, Clone)]
pub struct ResetMatch;

impl Command for ResetMatch {
    type Output = ();

    fn notification(_output: &()) -> Option<Notification> {
        Some(Notification::match_reset())
    }
}
