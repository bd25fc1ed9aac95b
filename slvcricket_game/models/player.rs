use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;
use uuid::Uuid;

use slvcricket_types::errors::GameError;

use crate::stats;

/// A single recorded delivery faced by a batter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Dot,
    Runs(u32),
}

impl Delivery {
    /// Maps a shot value to a delivery, `0` being a dot ball.
    pub fn from_runs(runs: u32) -> Self {
        match runs {
            0 => Delivery::Dot,
            n => Delivery::Runs(n),
        }
    }

    pub fn runs(&self) -> u32 {
        match self {
            Delivery::Dot => 0,
            Delivery::Runs(n) => *n,
        }
    }
}

/// One batter's live scoring record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub is_out: bool,
    #[serde(serialize_with = "crate::time::serialize_iso8601")]
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Creates a new batter with an empty scorecard.
    ///
    /// The creation time keeps millisecond resolution, the same precision
    /// used by the storage format.
    pub fn new(name: &str) -> Result<Self, GameError> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: normalize_name(name)?,
            runs: 0,
            balls: 0,
            is_out: false,
            created_at: Utc::now().trunc_subsecs(3),
        })
    }

    /// Rebuilds a player from a stored record.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        runs: u32,
        balls: u32,
        is_out: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            runs,
            balls,
            is_out,
            created_at,
        }
    }

    /// Replaces the scorecard, flooring negative values at zero.
    pub fn set_score(&mut self, runs: i64, balls: i64) {
        self.runs = clamp_count(runs);
        self.balls = clamp_count(balls);
    }

    pub fn rename(&mut self, name: &str) -> Result<(), GameError> {
        self.name = normalize_name(name)?;
        Ok(())
    }

    /// Marking an already dismissed batter is a no-op.
    pub fn mark_out(&mut self) {
        self.is_out = true;
    }

    /// Scorecard after facing `delivery`, as `(runs, balls)`.
    pub fn score_after(&self, delivery: Delivery) -> (i64, i64) {
        (
            i64::from(self.runs) + i64::from(delivery.runs()),
            i64::from(self.balls) + 1,
        )
    }

    /// Scorecard after undoing the last ball, as `(runs, balls)`.
    ///
    /// This takes one run and one ball off regardless of what the last shot
    /// was worth, so a boundary is not fully reverted. Returns `None` when
    /// the batter has no runs to take back.
    pub fn score_after_undo(&self) -> Option<(i64, i64)> {
        if self.runs == 0 {
            return None;
        }
        Some((
            (i64::from(self.runs) - 1).max(0),
            (i64::from(self.balls) - 1).max(0),
        ))
    }

    pub fn strike_rate(&self) -> String {
        stats::strike_rate(self.runs, self.balls)
    }
}

/// Trims `name`, rejecting names that are blank.
pub fn normalize_name(name: &str) -> Result<String, GameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GameError::EmptyPlayerName);
    }
    Ok(trimmed.to_string())
}

fn clamp_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
