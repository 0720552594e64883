// The queue view model: owns the cached snapshot of the playback queue and
// mediates every mutating action through the backend. Local order is updated
// optimistically for reorder; everything else is fetch-confirmed. After each
// mutation the cache is resynchronized wholesale from the server.

use serde_json::Value;

use crate::action::Direction;
use crate::api::models::{
    AdvanceReply, NewSong, QueueSnapshot, ReorderRequest, SearchResult, Song, Table,
};
use crate::api::transport::{Method, Transport, TransportError};

const QUEUE_PATH: &str = "/canciones/cola";
const ADVANCE_PATH: &str = "/canciones/siguiente";
const REORDER_PATH: &str = "/admin/reorder-queue";
const RESTART_PATH: &str = "/admin/canciones/restart";
const PAUSE_PATH: &str = "/admin/player/pause";
const RESUME_PATH: &str = "/admin/player/resume";
const ADD_SHARED_PATH: &str = "/canciones/admin/add";
const SEARCH_PATH: &str = "/youtube/search";
const TABLES_PATH: &str = "/mesas/";

/// Result of asking the server to promote the next song.
#[derive(Debug, Clone)]
pub enum AdvanceOutcome {
    /// A song was promoted to now-playing.
    Promoted(Song),
    /// The queue had nothing left. Not an error.
    QueueEmpty,
}

/// Result of a reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The swapped order was submitted as the new canonical order.
    Submitted,
    /// The move was illegal (boundary, or id not in the upcoming segment).
    /// Local no-op; the backend was not contacted.
    Rejected,
}

/// Result of a restart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    Restarted,
    /// The backend does not expose the restart endpoint (404). Callers should
    /// degrade gracefully instead of treating this as a hard error.
    Unsupported,
}

/// Client-side cache and action mediator for the playback queue.
///
/// Every mutating operation takes `&mut self`, so two mutations on the same
/// instance can never be in flight concurrently — the backend's last-write-wins
/// reorder semantics are only exposed to races across *separate* admin
/// sessions.
pub struct QueueViewModel<T: Transport> {
    transport: T,
    cache: Option<QueueSnapshot>,
    /// Set when a post-mutation refresh failed: the server accepted the
    /// change but the cached display may lag behind it.
    stale: bool,
}

impl<T: Transport> QueueViewModel<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache: None,
            stale: false,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Last known snapshot, if any fetch or push has populated the cache.
    pub fn snapshot(&self) -> Option<&QueueSnapshot> {
        self.cache.as_ref()
    }

    /// True when a mutation succeeded but the follow-up refresh did not, so
    /// the cached snapshot may be behind the server. Cleared by the next
    /// successful refresh or push.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Ids of the reorderable segment: upcoming only. The now-playing slot is
    /// never part of a reorder submission.
    pub fn upcoming_ids(&self) -> Vec<String> {
        self.cache
            .as_ref()
            .map(|s| s.upcoming.iter().map(|song| song.id.clone()).collect())
            .unwrap_or_default()
    }

    /// Cache-first load: return the cached snapshot when it holds anything,
    /// otherwise fetch, store, and return the authoritative state. Never a
    /// partial merge; on fetch failure the cache is left untouched.
    pub async fn load(&mut self) -> Result<QueueSnapshot, TransportError> {
        if let Some(snapshot) = &self.cache {
            if !snapshot.is_empty() {
                return Ok(snapshot.clone());
            }
        }
        self.refresh().await
    }

    /// Unconditional fetch, wholesale cache overwrite.
    pub async fn refresh(&mut self) -> Result<QueueSnapshot, TransportError> {
        let snapshot = self.fetch_snapshot().await?;
        self.cache = Some(snapshot.clone());
        self.stale = false;
        Ok(snapshot)
    }

    /// Feed the cache from an out-of-band channel pushing the same snapshot
    /// shape (the backend broadcasts the queue after every change).
    pub fn apply_push(&mut self, snapshot: QueueSnapshot) {
        self.cache = Some(snapshot);
        self.stale = false;
    }

    /// Swap `song_id` with its neighbor in `direction`, computed from the
    /// currently cached upcoming ids, and submit the full new order as
    /// canonical (last writer wins). Boundary moves and unknown ids are
    /// silent no-ops with no network call.
    pub async fn reorder(
        &mut self,
        song_id: &str,
        direction: Direction,
    ) -> Result<ReorderOutcome, TransportError> {
        let mut ids = self.upcoming_ids();
        let Some(index) = ids.iter().position(|id| id == song_id) else {
            return Ok(ReorderOutcome::Rejected);
        };
        let neighbor = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < ids.len() => index + 1,
            _ => return Ok(ReorderOutcome::Rejected),
        };
        ids.swap(index, neighbor);

        let body = serde_json::to_value(ReorderRequest { song_ids: ids })?;
        self.transport
            .request(Method::Post, REORDER_PATH, Some(body))
            .await?;
        self.resync().await;
        Ok(ReorderOutcome::Submitted)
    }

    /// Ask the server to promote the next queued song to now-playing. The
    /// server decides which song; 204 signals an empty queue, distinct from
    /// failure.
    pub async fn advance(&mut self) -> Result<AdvanceOutcome, TransportError> {
        let reply = self.transport.request(Method::Post, ADVANCE_PATH, None).await?;
        if reply.status == 204 {
            return Ok(AdvanceOutcome::QueueEmpty);
        }
        let parsed: AdvanceReply = serde_json::from_value(reply.body.unwrap_or(Value::Null))?;
        self.resync().await;
        Ok(AdvanceOutcome::Promoted(parsed.song))
    }

    /// Remove a song from the queue, now-playing or upcoming. Any
    /// confirmation gate is the caller's responsibility.
    pub async fn remove(&mut self, song_id: &str) -> Result<(), TransportError> {
        let path = format!("/canciones/{song_id}/rechazar");
        self.transport.request(Method::Post, &path, None).await?;
        self.resync().await;
        Ok(())
    }

    /// Restart the current now-playing song from the beginning. Ordering is
    /// unchanged, so no resync. A 404 means the backend simply lacks the
    /// endpoint.
    pub async fn restart(&mut self) -> Result<RestartOutcome, TransportError> {
        match self.transport.request(Method::Post, RESTART_PATH, None).await {
            Ok(_) => Ok(RestartOutcome::Restarted),
            Err(TransportError::Http { status: 404, .. }) => Ok(RestartOutcome::Unsupported),
            Err(e) => Err(e),
        }
    }

    /// Best-effort pause/resume command. The backend is the source of truth
    /// for actual playback state; repeating the current state is not an
    /// error. No ordering change, no resync.
    pub async fn set_paused(&mut self, paused: bool) -> Result<(), TransportError> {
        let path = if paused { PAUSE_PATH } else { RESUME_PATH };
        self.transport.request(Method::Post, path, None).await?;
        Ok(())
    }

    /// Append a song: to `target`'s private queue when given, otherwise to
    /// the shared queue. Exactly one endpoint is hit. No optimistic
    /// insertion — the entry appears via the follow-up resync.
    pub async fn add(
        &mut self,
        song: &NewSong,
        target: Option<&str>,
    ) -> Result<Song, TransportError> {
        let path = match target {
            Some(table_id) => format!("/admin/mesas/{table_id}/add-song"),
            None => ADD_SHARED_PATH.to_string(),
        };
        let body = serde_json::to_value(song)?;
        let reply = self.transport.request(Method::Post, &path, Some(body)).await?;
        let created: Song = serde_json::from_value(reply.body.unwrap_or(Value::Null))?;
        self.resync().await;
        Ok(created)
    }

    /// Search the song catalog through the backend's proxy.
    pub async fn search(
        &self,
        query: &str,
        karaoke_mode: bool,
    ) -> Result<Vec<SearchResult>, TransportError> {
        let path = format!(
            "{}?q={}{}",
            SEARCH_PATH,
            urlencoding::encode(query),
            if karaoke_mode { "&karaoke_mode=true" } else { "" }
        );
        let reply = self.transport.request(Method::Get, &path, None).await?;
        Ok(serde_json::from_value(reply.body.unwrap_or(Value::Null))?)
    }

    /// Tables currently open for business, for picking an add target.
    pub async fn active_tables(&self) -> Result<Vec<Table>, TransportError> {
        let reply = self.transport.request(Method::Get, TABLES_PATH, None).await?;
        let tables: Vec<Table> = serde_json::from_value(reply.body.unwrap_or(Value::Null))?;
        Ok(tables.into_iter().filter(|t| t.is_active).collect())
    }

    async fn fetch_snapshot(&self) -> Result<QueueSnapshot, TransportError> {
        let reply = self.transport.request(Method::Get, QUEUE_PATH, None).await?;
        Ok(serde_json::from_value(reply.body.unwrap_or(Value::Null))?)
    }

    /// Post-mutation refresh. The mutation already succeeded server-side, so
    /// a failure here only marks the display as stale; it must not surface as
    /// a failure of the mutation itself.
    async fn resync(&mut self) {
        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                self.cache = Some(snapshot);
                self.stale = false;
            }
            Err(err) => {
                tracing::warn!(%err, "queue refresh after mutation failed");
                self.stale = true;
            }
        }
    }
}
