// Thin view layer: a pure function of the snapshot. The view model's ordered
// list is the single source of truth; nothing is ever read back from output.

use crate::api::models::QueueSnapshot;

/// Render the combined queue view as display lines. Only a present
/// `now_playing` gets the playing marker; the head of `upcoming` is never
/// promoted by position alone.
pub fn queue_lines(snapshot: &QueueSnapshot) -> Vec<String> {
    if snapshot.is_empty() {
        return vec!["The queue is empty.".to_string()];
    }

    let mut lines = Vec::with_capacity(1 + snapshot.upcoming.len());
    if let Some(song) = &snapshot.now_playing {
        lines.push(format!(
            "> Now playing: {} — by {}",
            song.title,
            song.added_by()
        ));
    }
    for (i, song) in snapshot.upcoming.iter().enumerate() {
        lines.push(format!(
            "{:>3}. [{}] {} — by {}",
            i + 1,
            song.id,
            song.title,
            song.added_by()
        ));
    }
    lines
}
