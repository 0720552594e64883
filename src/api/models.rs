// Wire types for the venue backend. The API speaks Spanish field names;
// everything is renamed to the English terms the rest of the crate uses.

use serde::{Deserialize, Deserializer, Serialize};

/// The backend serializes song ids as integers but treats them as opaque in
/// the reorder contract (`canciones_ids: string[]`), so accept either shape
/// and keep a `String` client-side.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRef {
    #[serde(rename = "nombre")]
    pub name: String,
}

/// The patron (or table) that submitted a song.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submitter {
    pub nick: String,
    #[serde(default, rename = "mesa")]
    pub table: Option<TableRef>,
}

/// A queued playable item. Position is implied by list order, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "youtube_id")]
    pub media_id: String,
    #[serde(default, rename = "duracion_seconds")]
    pub duration_seconds: u32,
    #[serde(default, rename = "estado")]
    pub status: Option<String>,
    #[serde(default, rename = "usuario")]
    pub submitter: Option<Submitter>,
}

impl Song {
    /// Display name of whoever queued the song: the table name when the
    /// submitter is seated at one, else their nick, else "Unknown".
    pub fn added_by(&self) -> &str {
        match &self.submitter {
            Some(s) => s.table.as_ref().map_or(s.nick.as_str(), |t| t.name.as_str()),
            None => "Unknown",
        }
    }

    pub fn thumbnail_url(&self) -> String {
        format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", self.media_id)
    }
}

/// The authoritative server-reported queue state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueSnapshot {
    #[serde(default)]
    pub now_playing: Option<Song>,
    #[serde(default)]
    pub upcoming: Vec<Song>,
}

impl QueueSnapshot {
    /// No song playing and nothing queued. An empty snapshot does not count
    /// as cached data for the cache-first load policy.
    pub fn is_empty(&self) -> bool {
        self.now_playing.is_none() && self.upcoming.is_empty()
    }

    /// `[now_playing?] ++ upcoming`. Index 0 is "currently playing" only when
    /// `now_playing` is present; callers must not assume `upcoming[0]` plays.
    pub fn combined(&self) -> Vec<&Song> {
        self.now_playing.iter().chain(self.upcoming.iter()).collect()
    }
}

/// 200 body of the advance endpoint (204 means the queue was empty).
#[derive(Debug, Clone, Deserialize)]
pub struct AdvanceReply {
    #[serde(rename = "cancion")]
    pub song: Song,
}

/// Request body for submitting a song, shared by both add endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct NewSong {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "youtube_id")]
    pub media_id: String,
    #[serde(rename = "duracion_seconds")]
    pub duration_seconds: u32,
}

/// Full replacement order for the queue (last writer wins server-side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    #[serde(rename = "canciones_ids")]
    pub song_ids: Vec<String>,
}

/// One hit from the song search proxy.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub video_id: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration_seconds: u32,
}

/// A venue table, as listed by `/mesas/`. Used to pick an add target.
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}
