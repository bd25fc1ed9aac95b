use std::{any::type_name, sync::Arc};

use chrono::Utc;
use uuid::Uuid;

use slvcricket_game::{
    models::{
        match_state::MatchState,
        player::{Delivery, Player},
    },
    stats::MatchSummary,
};
use slvcricket_types::{
    Result,
    errors::{ApplicationError, PersistenceError},
};

use crate::{
    command_handlers::{
        AddPlayerCommandHandler, DeletePlayerCommandHandler, MarkPlayerOutCommandHandler,
        RecordDeliveryCommandHandler, ResetMatchCommandHandler, UndoLastBallCommandHandler,
        UpdatePlayerNameCommandHandler, UpdatePlayerScoreCommandHandler,
    },
    config::Config,
    cqrs::{
        Command, CommandHandler, Query, QueryHandler,
        commands::{
            AddPlayer, DeletePlayer, MarkPlayerOut, RecordDelivery, ResetMatch, UndoLastBall,
            UpdatePlayerName, UpdatePlayerScore,
        },
    },
    export::{Artifact, export_snapshot},
    notifications::{Notification, Notifier},
    repository::{ArtifactSink, MatchRepository},
};

/// Handle returned by [`PlayerStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn Fn(&[Player])>;

/// PlayerStore (Mediator)
/// This struct owns the match state and is the only thing allowed to
/// mutate it. Its roles are:
/// 1. Running Commands against a draft of the state and committing the
///    draft only when the handler succeeds.
/// 2. Writing every committed state through to the MatchRepository.
/// 3. Telling observers and the Notifier about what happened.
pub struct PlayerStore {
    config: Arc<Config>,
    state: MatchState,
    repository: Box<dyn MatchRepository>,
    exporter: Box<dyn ArtifactSink>,
    notifier: Box<dyn Notifier>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl PlayerStore {
    /// Opens the store, hydrating the match from the repository.
    ///
    /// A failed load is reported and the store starts with an empty match.
    pub fn open(
        config: Arc<Config>,
        repository: Box<dyn MatchRepository>,
        exporter: Box<dyn ArtifactSink>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let state = match repository.load() {
            Ok(state) => {
                tracing::info!(players = state.len(), "Match state loaded");
                state
            }
            Err(e) => {
                tracing::error!("Error loading cricket data: {e}");
                notifier.notify(Notification::load_failed());
                MatchState::new()
            }
        };

        Self {
            config,
            state,
            repository,
            exporter,
            notifier,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current ordered snapshot of the batting card.
    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary::from_players(self.state.players())
    }

    /// Executes a command.
    /// - The handler works on a draft copy of the match.
    /// - If the handler succeeds, the draft replaces the current state, is
    ///   saved, and observers are told.
    /// - If the handler fails, the draft is dropped and the state is left
    ///   exactly as it was.
    pub fn execute<C, H>(&mut self, cmd: C, handler: H) -> Result<C::Output, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let command = short_type_name::<C>();
        let mut draft = self.state.clone();

        match handler.handle(cmd, &mut draft, &self.config) {
            Ok(output) => {
                self.state = draft;
                tracing::info!(command, players = self.state.len(), "Command committed");

                self.persist();
                self.emit_change();
                if let Some(notification) = C::notification(&output) {
                    self.notifier.notify(notification);
                }
                Ok(output)
            }
            Err(e) => {
                tracing::info!(command, "Command rejected: {e}");
                self.notifier.notify(Notification::rejected(&e));
                Err(e)
            }
        }
    }

    /// Executes a query against the current state. Queries never mutate.
    pub fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        handler.handle(query, &self.state, &self.config)
    }

    /// Registers a listener called with the full snapshot after every
    /// committed command.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[Player]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Writes the current state to the repository, returning the outcome
    /// instead of only reporting it.
    pub fn flush(&self) -> Result<(), PersistenceError> {
        self.repository.save(self.state.players())
    }

    pub fn add_player(&mut self, name: &str) -> Result<Player> {
        self.execute(AddPlayer::new(name), AddPlayerCommandHandler::new())
    }

    pub fn update_player_score(
        &mut self,
        player_id: Uuid,
        runs: i64,
        balls: i64,
    ) -> Result<Player> {
        self.execute(
            UpdatePlayerScore {
                player_id,
                runs,
                balls,
            },
            UpdatePlayerScoreCommandHandler::new(),
        )
    }

    pub fn record_delivery(&mut self, player_id: Uuid, delivery: Delivery) -> Result<Player> {
        self.execute(
            RecordDelivery {
                player_id,
                delivery,
            },
            RecordDeliveryCommandHandler::new(),
        )
    }

    pub fn undo_last_ball(&mut self, player_id: Uuid) -> Result<Player> {
        self.execute(
            UndoLastBall { player_id },
            UndoLastBallCommandHandler::new(),
        )
    }

    pub fn update_player_name(&mut self, player_id: Uuid, name: &str) -> Result<Player> {
        self.execute(
            UpdatePlayerName {
                player_id,
                name: name.to_string(),
            },
            UpdatePlayerNameCommandHandler::new(),
        )
    }

    pub fn delete_player(&mut self, player_id: Uuid) -> Result<Player> {
        self.execute(
            DeletePlayer { player_id },
            DeletePlayerCommandHandler::new(),
        )
    }

    pub fn mark_player_out(&mut self, player_id: Uuid) -> Result<Player> {
        self.execute(
            MarkPlayerOut { player_id },
            MarkPlayerOutCommandHandler::new(),
        )
    }

    pub fn reset_match(&mut self) -> Result<()> {
        self.execute(ResetMatch, ResetMatchCommandHandler::new())
    }

    /// Builds the export artifact from the current state and hands it to
    /// the sink. The match itself is never touched.
    pub fn export_data(&self) -> Result<Artifact> {
        let delivered = export_snapshot(self.state.players(), Utc::now()).and_then(|artifact| {
            self.exporter.deliver(&artifact)?;
            Ok(artifact)
        });

        match delivered {
            Ok(artifact) => {
                tracing::info!(filename = %artifact.filename, "Match data exported");
                self.notifier.notify(Notification::data_exported());
                Ok(artifact)
            }
            Err(e) => {
                tracing::error!("Error exporting data: {e}");
                self.notifier.notify(Notification::export_failed());
                Err(e.into())
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(self.state.players()) {
            tracing::error!("Error saving cricket data: {e}");
            self.notifier.notify(Notification::save_failed());
        }
    }

    fn emit_change(&self) {
        for (_, listener) in &self.listeners {
            listener(self.state.players());
        }
    }
}

fn short_type_name<T>() -> &'static str {
    let name = type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
