// Every admin intervention on the queue is one tagged variant, dispatched
// through a single exhaustive handler in [`AdminPanel`](crate::app::AdminPanel).

use crate::api::models::NewSong;

/// Direction of a one-step reorder within the upcoming segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// All mutating and loading actions the admin panel can issue against the
/// shared queue resource.
#[derive(Debug, Clone)]
pub enum QueueAction {
    /// Cache-first load of the combined queue view.
    Load,
    /// Unconditional resynchronization from the server.
    Refresh,
    /// Swap a song one step with its neighbor and submit the full new order.
    Reorder { song_id: String, direction: Direction },
    /// Promote the next queued song to now-playing (server picks which).
    Advance,
    /// Remove a song from the queue. Confirmation happens before this action
    /// is ever constructed.
    Remove { song_id: String },
    /// Restart the current now-playing song from the beginning.
    Restart,
    /// Pause (`true`) or resume (`false`) playback.
    SetPaused(bool),
    /// Append a song to the shared queue, or to `target`'s private queue.
    Add { song: NewSong, target: Option<String> },
}
