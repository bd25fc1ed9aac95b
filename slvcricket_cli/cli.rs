use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "slvcricket")]
#[command(about = "Live batting scorecard for a single cricket match", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// `<PLAYER>` arguments take a full player id or a unique prefix of one,
/// as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Add a batter to the match
    Add {
        /// Display name, surrounding whitespace is ignored
        name: String,
    },

    /// Show the batting card
    List,

    /// Overwrite a batter's runs and balls faced
    Score {
        player: String,

        #[arg(allow_negative_numbers = true)]
        runs: i64,

        #[arg(allow_negative_numbers = true)]
        balls: i64,
    },

    /// Record a dot ball
    Dot { player: String },

    /// Record a scoring shot
    Hit {
        player: String,

        /// Runs off the ball (4 for a boundary, 6 for a six)
        runs: u32,
    },

    /// Take one run and one ball off a batter
    Undo { player: String },

    /// Rename a batter
    Rename { player: String, name: String },

    /// Mark a batter as out
    Out { player: String },

    /// Remove a batter from the match
    Remove { player: String },

    /// Clear every batter from the match
    Reset,

    /// Show match totals
    Summary,

    /// Write the match to a JSON file in the export directory
    Export,
}
