#[cfg(any(test, feature = "test-utils"))]
pub mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };

    use slvcricket_game::models::{match_state::MatchState, player::Player};
    use slvcricket_types::errors::{ExportError, PersistenceError};

    use crate::{
        export::Artifact,
        notifications::{Notification, Notifier},
        repository::{ArtifactSink, MatchRepository},
    };

    #[derive(Default, Clone)]
    pub struct MockMatchRepository {
        stored: Arc<Mutex<Option<Vec<Player>>>>,
        save_calls: Arc<AtomicUsize>,
        fail_saves: Arc<AtomicBool>,
        fail_loads: Arc<AtomicBool>,
    }

    impl MockMatchRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_players(players: Vec<Player>) -> Self {
            let repo = Self::new();
            *repo.stored.lock().unwrap() = Some(players);
            repo
        }

        /// Every `load` fails as if the stored record were corrupted.
        pub fn corrupted() -> Self {
            let repo = Self::new();
            repo.fail_loads.store(true, Ordering::SeqCst);
            repo
        }

        pub fn fail_saves(&self, fail: bool) {
            self.fail_saves.store(fail, Ordering::SeqCst);
        }

        pub fn stored_players(&self) -> Option<Vec<Player>> {
            self.stored.lock().unwrap().clone()
        }

        pub fn save_calls(&self) -> usize {
            self.save_calls.load(Ordering::SeqCst)
        }
    }

    impl MatchRepository for MockMatchRepository {
        fn save(&self, players: &[Player]) -> Result<(), PersistenceError> {
            self.save_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(PersistenceError::QuotaExceeded {
                    key: "mock".to_string(),
                    size: players.len(),
                    quota: 0,
                });
            }
            *self.stored.lock().unwrap() = Some(players.to_vec());
            Ok(())
        }

        fn load(&self) -> Result<MatchState, PersistenceError> {
            if self.fail_loads.load(Ordering::SeqCst) {
                let err = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
                return Err(PersistenceError::Json(err));
            }
            Ok(MatchState::from_players(
                self.stored.lock().unwrap().clone().unwrap_or_default(),
            ))
        }
    }

    #[derive(Default, Clone)]
    pub struct MockArtifactSink {
        delivered: Arc<Mutex<Vec<Artifact>>>,
        fail: Arc<AtomicBool>,
    }

    impl MockArtifactSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            let sink = Self::new();
            sink.fail.store(true, Ordering::SeqCst);
            sink
        }

        pub fn delivered(&self) -> Vec<Artifact> {
            self.delivered.lock().unwrap().clone()
        }
    }

    impl ArtifactSink for MockArtifactSink {
        fn deliver(&self, artifact: &Artifact) -> Result<(), ExportError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(ExportError::Rejected(artifact.filename.clone()));
            }
            self.delivered.lock().unwrap().push(artifact.clone());
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct RecordingNotifier {
        notifications: Arc<Mutex<Vec<Notification>>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn notifications(&self) -> Vec<Notification> {
            self.notifications.lock().unwrap().clone()
        }

        pub fn titles(&self) -> Vec<String> {
            self.notifications()
                .into_iter()
                .map(|n| n.title)
                .collect()
        }

        pub fn last(&self) -> Option<Notification> {
            self.notifications.lock().unwrap().last().cloned()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.notifications.lock().unwrap().push(notification);
        }
    }
}
