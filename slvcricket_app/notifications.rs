use slvcricket_game::models::player::Player;
use slvcricket_types::errors::ApplicationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A short user-facing message about the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn player_added(player: &Player) -> Self {
        Self::new(
            "Player Added",
            format!("{} has been added to the match.", player.name),
        )
    }

    pub fn player_updated() -> Self {
        Self::new("Player Updated", "Player name has been updated.")
    }

    pub fn player_removed(player: &Player) -> Self {
        Self::new(
            "Player Removed",
            format!("{} has been removed from the match.", player.name),
        )
    }

    pub fn player_out(player: &Player) -> Self {
        Self::destructive("Player Out", format!("{} is out!", player.name))
    }

    pub fn score_updated(player: &Player) -> Self {
        Self::new(
            "Score Updated",
            format!("{}: {} ({})", player.name, player.runs, player.balls),
        )
    }

    pub fn match_reset() -> Self {
        Self::new("Match Reset", "All player data has been cleared.")
    }

    pub fn data_exported() -> Self {
        Self::new(
            "Data Exported",
            "Match data has been downloaded successfully.",
        )
    }

    pub fn load_failed() -> Self {
        Self::destructive("Error Loading Data", "Failed to load saved player data.")
    }

    pub fn save_failed() -> Self {
        Self::destructive(
            "Error Saving Data",
            "Failed to save player data to local storage.",
        )
    }

    pub fn export_failed() -> Self {
        Self::destructive("Export Failed", "Failed to export match data.")
    }

    pub fn rejected(error: &ApplicationError) -> Self {
        Self::destructive("Action Failed", error.to_string())
    }
}

/// Side channel for user-facing messages.
///
/// The store never depends on delivery succeeding.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use slvcricket_game::test_utils::{PlayerFactoryOptions, player_factory};
    use slvcricket_types::errors::GameError;

    use super::*;

    #[test]
    fn test_player_messages() {
        let player = player_factory(PlayerFactoryOptions {
            name: Some("Virat"),
            runs: Some(14),
            balls: Some(9),
            ..Default::default()
        });

        let added = Notification::player_added(&player);
        assert_eq!(added.title, "Player Added");
        assert_eq!(added.description, "Virat has been added to the match.");
        assert_eq!(added.variant, NotificationVariant::Default);

        let out = Notification::player_out(&player);
        assert_eq!(out.description, "Virat is out!");
        assert_eq!(out.variant, NotificationVariant::Destructive);

        assert_eq!(
            Notification::score_updated(&player).description,
            "Virat: 14 (9)"
        );
    }

    #[test]
    fn test_rejected_carries_error_message() {
        let err: ApplicationError = GameError::EmptyPlayerName.into();
        let notification = Notification::rejected(&err);
        assert_eq!(notification.title, "Action Failed");
        assert_eq!(notification.description, "Player name can't be empty");
        assert_eq!(notification.variant, NotificationVariant::Destructive);
    }
}
