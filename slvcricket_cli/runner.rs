use std::{io::Write, sync::Arc};

use anyhow::{Result, bail};
use uuid::Uuid;

use slvcricket_app::{PlayerStore, config::Config, notifications::Notifier};
use slvcricket_db::{DirectoryArtifactSink, FileKeyValueStore, LocalStorageMatchRepository};
use slvcricket_game::{
    models::player::{Delivery, Player},
    stats::MatchSummary,
};

use crate::cli::Commands;

/// Opens the match stored under `config.data_dir`.
pub fn open_store(config: Arc<Config>, notifier: Box<dyn Notifier>) -> PlayerStore {
    let repository = LocalStorageMatchRepository::new(
        FileKeyValueStore::new(&config.data_dir),
        config.storage_key.clone(),
        config.storage_quota,
    );
    let exporter = DirectoryArtifactSink::new(&config.export_dir);

    PlayerStore::open(config, Box::new(repository), Box::new(exporter), notifier)
}

/// Runs one command against the store and writes its result to `out`.
pub fn run(store: &mut PlayerStore, command: Commands, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Add { name } => {
            let player = store.add_player(&name)?;
            write_player(out, &player)?;
        }
        Commands::List => write_card(out, store.players())?,
        Commands::Score {
            player,
            runs,
            balls,
        } => {
            let id = resolve_player(store.players(), &player)?;
            let player = store.update_player_score(id, runs, balls)?;
            write_player(out, &player)?;
        }
        Commands::Dot { player } => {
            let id = resolve_player(store.players(), &player)?;
            let player = store.record_delivery(id, Delivery::Dot)?;
            write_player(out, &player)?;
        }
        Commands::Hit { player, runs } => {
            let id = resolve_player(store.players(), &player)?;
            let player = store.record_delivery(id, Delivery::from_runs(runs))?;
            write_player(out, &player)?;
        }
        Commands::Undo { player } => {
            let id = resolve_player(store.players(), &player)?;
            let player = store.undo_last_ball(id)?;
            write_player(out, &player)?;
        }
        Commands::Rename { player, name } => {
            let id = resolve_player(store.players(), &player)?;
            let player = store.update_player_name(id, &name)?;
            write_player(out, &player)?;
        }
        Commands::Out { player } => {
            let id = resolve_player(store.players(), &player)?;
            let player = store.mark_player_out(id)?;
            write_player(out, &player)?;
        }
        Commands::Remove { player } => {
            let id = resolve_player(store.players(), &player)?;
            store.delete_player(id)?;
        }
        Commands::Reset => store.reset_match()?,
        Commands::Summary => write_summary(out, &store.summary())?,
        Commands::Export => {
            let artifact = store.export_data()?;
            writeln!(out, "{}", artifact.filename)?;
        }
    }

    Ok(())
}

/// Finds the player addressed by `token`, either a full id or a unique
/// prefix of one. Hyphens and case are ignored when matching prefixes.
///
/// A full id is returned as-is even when nobody has it, so the store can
/// report the missing player itself.
pub fn resolve_player(players: &[Player], token: &str) -> Result<Uuid> {
    let token = token.trim();
    if let Ok(id) = Uuid::parse_str(token) {
        return Ok(id);
    }

    let prefix: String = token
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if prefix.is_empty() {
        bail!("Player id can't be empty");
    }

    let matches: Vec<&Player> = players
        .iter()
        .filter(|p| p.id.simple().to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [player] => Ok(player.id),
        [] => bail!("No player id starts with '{token}'"),
        many => bail!(
            "'{token}' matches {} players, use a longer prefix",
            many.len()
        ),
    }
}

fn short_id(player: &Player) -> String {
    player.id.simple().to_string()[..8].to_string()
}

fn write_player(out: &mut dyn Write, player: &Player) -> Result<()> {
    let status = if player.is_out { "  out" } else { "" };
    writeln!(
        out,
        "{}  {:<20} {:>4} ({:>3})  SR {:>6}{}",
        short_id(player),
        player.name,
        player.runs,
        player.balls,
        player.strike_rate(),
        status
    )?;
    Ok(())
}

fn write_card(out: &mut dyn Write, players: &[Player]) -> Result<()> {
    if players.is_empty() {
        writeln!(out, "No players yet. Add one with `slvcricket add <name>`.")?;
        return Ok(());
    }

    for player in players {
        write_player(out, player)?;
    }
    Ok(())
}

fn write_summary(out: &mut dyn Write, summary: &MatchSummary) -> Result<()> {
    writeln!(
        out,
        "Players: {} ({} batting, {} out)",
        summary.player_count,
        summary.active_players.len(),
        summary.out_players.len()
    )?;
    writeln!(
        out,
        "Total: {} runs off {} balls",
        summary.total_runs, summary.total_balls
    )?;
    writeln!(out, "Run rate: {}", summary.run_rate)?;
    match &summary.top_scorer {
        Some(top) => writeln!(out, "Top scorer: {} {} ({})", top.name, top.runs, top.balls)?,
        None => writeln!(out, "Top scorer: -")?,
    }
    Ok(())
}
