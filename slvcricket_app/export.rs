use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use slvcricket_game::{models::player::Player, stats, time::format_iso8601};
use slvcricket_types::errors::ExportError;

pub const EXPORT_MEDIA_TYPE: &str = "application/json";

/// Snapshot of the match as written to the export artifact.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchExport<'a> {
    pub players: &'a [Player],
    pub exported_at: String,
    pub total_runs: u64,
    pub total_balls: u64,
}

/// A serialized export ready to be handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub media_type: &'static str,
    pub contents: String,
}

pub fn export_snapshot(players: &[Player], now: DateTime<Utc>) -> Result<Artifact, ExportError> {
    let snapshot = MatchExport {
        players,
        exported_at: format_iso8601(&now),
        total_runs: stats::total_runs(players),
        total_balls: stats::total_balls(players),
    };

    Ok(Artifact {
        filename: export_filename(now.date_naive()),
        media_type: EXPORT_MEDIA_TYPE,
        contents: serde_json::to_string_pretty(&snapshot)?,
    })
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("slvCricket_match_{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::Value;
    use slvcricket_game::{
        test_utils::{PlayerFactoryOptions, player_factory},
        time::parse_iso8601,
    };

    use super::*;

    #[test]
    fn test_export_empty_match() {
        let now = Utc.with_ymd_and_hms(2025, 2, 14, 18, 5, 0).unwrap();
        let artifact = export_snapshot(&[], now).unwrap();

        assert_eq!(artifact.filename, "slvCricket_match_2025-02-14.json");
        assert_eq!(artifact.media_type, "application/json");

        let value: Value = serde_json::from_str(&artifact.contents).unwrap();
        assert_eq!(value["players"], Value::Array(vec![]));
        assert_eq!(value["totalRuns"], 0);
        assert_eq!(value["totalBalls"], 0);
        let exported_at = value["exportedAt"].as_str().unwrap();
        assert_eq!(parse_iso8601(exported_at), Some(now));
    }

    #[test]
    fn test_export_players_and_totals() {
        let now = Utc::now();
        let players = vec![
            player_factory(PlayerFactoryOptions {
                name: Some("Virat"),
                runs: Some(35),
                balls: Some(20),
                ..Default::default()
            }),
            player_factory(PlayerFactoryOptions {
                name: Some("Rohit"),
                runs: Some(12),
                balls: Some(10),
                is_out: Some(true),
                ..Default::default()
            }),
        ];

        let artifact = export_snapshot(&players, now).unwrap();
        let value: Value = serde_json::from_str(&artifact.contents).unwrap();

        assert_eq!(value["totalRuns"], 47);
        assert_eq!(value["totalBalls"], 30);
        let exported = value["players"].as_array().unwrap();
        assert_eq!(exported.len(), 2);
        assert_eq!(exported[0]["name"], "Virat");
        assert_eq!(exported[1]["isOut"], true);
        assert_eq!(exported[1]["id"], players[1].id.to_string());
        // Pretty printed with two space indentation.
        assert!(artifact.contents.contains("\n  \"players\""));
    }
}
