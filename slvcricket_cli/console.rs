use slvcricket_app::notifications::{Notification, NotificationVariant, Notifier};

/// Prints notifications for the terminal user. Destructive ones go to
/// stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(title = %notification.title, "Notification");
        match notification.variant {
            NotificationVariant::Default => {
                println!("{}: {}", notification.title, notification.description)
            }
            NotificationVariant::Destructive => {
                eprintln!("{}: {}", notification.title, notification.description)
            }
        }
    }
}
