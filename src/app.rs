// Action dispatch: routes each QueueAction variant to the view model and
// converts every outcome — success, expected-empty, unsupported, failure —
// into a notification. No backend error escapes this boundary.

use crate::action::QueueAction;
use crate::api::transport::Transport;
use crate::notify::{Level, Notifier};
use crate::queue::{AdvanceOutcome, QueueViewModel, ReorderOutcome, RestartOutcome};

/// The admin panel: one queue view model plus the notification sink it
/// reports through. Constructed per admin session, never global.
pub struct AdminPanel<T: Transport, N: Notifier> {
    viewmodel: QueueViewModel<T>,
    notifier: N,
}

impl<T: Transport, N: Notifier> AdminPanel<T, N> {
    pub fn new(viewmodel: QueueViewModel<T>, notifier: N) -> Self {
        Self { viewmodel, notifier }
    }

    pub fn viewmodel(&self) -> &QueueViewModel<T> {
        &self.viewmodel
    }

    pub fn viewmodel_mut(&mut self) -> &mut QueueViewModel<T> {
        &mut self.viewmodel
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Handle one action end to end. Errors become notifications; the last
    /// good cache is always retained.
    pub async fn handle(&mut self, action: QueueAction) {
        match action {
            QueueAction::Load => {
                if let Err(e) = self.viewmodel.load().await {
                    self.notifier
                        .notify(&format!("Failed to load queue: {e}"), Level::Error);
                }
            }

            QueueAction::Refresh => {
                if let Err(e) = self.viewmodel.refresh().await {
                    self.notifier
                        .notify(&format!("Failed to refresh queue: {e}"), Level::Error);
                }
            }

            QueueAction::Reorder { song_id, direction } => {
                match self.viewmodel.reorder(&song_id, direction).await {
                    Ok(ReorderOutcome::Submitted) => {
                        self.notifier.notify("Queue reordered.", Level::Info);
                        self.note_stale_display();
                    }
                    // Boundary moves are silent: no network call, no toast.
                    Ok(ReorderOutcome::Rejected) => {}
                    Err(e) => self.notifier.notify(&format!("Error: {e}"), Level::Error),
                }
            }

            QueueAction::Advance => match self.viewmodel.advance().await {
                Ok(AdvanceOutcome::Promoted(song)) => {
                    self.notifier
                        .notify(&format!("Now playing: {}", song.title), Level::Success);
                    self.note_stale_display();
                }
                Ok(AdvanceOutcome::QueueEmpty) => {
                    self.notifier
                        .notify("No more songs in the queue.", Level::Info);
                }
                Err(e) => self.notifier.notify(&format!("Error: {e}"), Level::Error),
            },

            QueueAction::Remove { song_id } => match self.viewmodel.remove(&song_id).await {
                Ok(()) => {
                    self.notifier
                        .notify("Song removed from the queue.", Level::Info);
                    self.note_stale_display();
                }
                Err(e) => self.notifier.notify(&format!("Error: {e}"), Level::Error),
            },

            QueueAction::Restart => match self.viewmodel.restart().await {
                Ok(RestartOutcome::Restarted) => {
                    self.notifier
                        .notify("Restarting the current song.", Level::Info);
                }
                Ok(RestartOutcome::Unsupported) => {
                    self.notifier
                        .notify("Restart is not available on this backend.", Level::Warning);
                }
                Err(e) => self.notifier.notify(&format!("Error: {e}"), Level::Error),
            },

            QueueAction::SetPaused(paused) => match self.viewmodel.set_paused(paused).await {
                Ok(()) => {
                    let message = if paused {
                        "Playback paused."
                    } else {
                        "Playback resumed."
                    };
                    self.notifier.notify(message, Level::Info);
                }
                Err(e) => self.notifier.notify(&format!("Error: {e}"), Level::Error),
            },

            QueueAction::Add { song, target } => {
                let destination = match &target {
                    Some(id) => format!("table {id}"),
                    None => "the shared queue".to_string(),
                };
                match self.viewmodel.add(&song, target.as_deref()).await {
                    Ok(created) => {
                        self.notifier.notify(
                            &format!("'{}' added to {destination}.", created.title),
                            Level::Success,
                        );
                        self.note_stale_display();
                    }
                    Err(e) => self.notifier.notify(&format!("Error: {e}"), Level::Error),
                }
            }
        }
    }

    /// Secondary notice when the mutation landed but the follow-up refresh
    /// did not: the change is saved server-side, only the display lags.
    fn note_stale_display(&mut self) {
        if self.viewmodel.is_stale() {
            self.notifier.notify(
                "Queue refresh failed; the display may be out of date.",
                Level::Warning,
            );
        }
    }
}
