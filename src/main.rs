// Entry point: loads config, wires the API client into the admin panel, and
// runs one queue action per invocation.

mod action;
mod api;
mod app;
mod config;
mod logging;
mod notify;
mod queue;
mod render;

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};

use crate::action::{Direction, QueueAction};
use crate::api::client::ApiClient;
use crate::api::models::NewSong;
use crate::app::AdminPanel;
use crate::config::Config;
use crate::notify::ConsoleNotifier;
use crate::queue::QueueViewModel;

#[derive(Parser)]
#[command(name = "cantoctl", about = "Admin console for the karaoke venue song queue")]
struct Cli {
    /// Override the configured API base URL.
    #[arg(long)]
    base_url: Option<String>,
    /// Override the configured admin API key.
    #[arg(long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current queue (now playing + upcoming).
    Status,
    /// Promote the next queued song to now-playing.
    Advance,
    /// Move an upcoming song one step up or down.
    Move {
        song_id: String,
        direction: MoveDirection,
    },
    /// Remove a song from the queue.
    Remove {
        song_id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Restart the current song from the beginning.
    Restart,
    /// Pause playback.
    Pause,
    /// Resume playback.
    Resume,
    /// Add a song to the shared queue, or to a table's queue.
    Add {
        title: String,
        media_id: String,
        duration_seconds: u32,
        /// Target table id; omitted means the shared queue.
        #[arg(long)]
        table: Option<String>,
    },
    /// Search the song catalog.
    Search {
        query: String,
        /// Prefer karaoke versions.
        #[arg(long)]
        karaoke: bool,
    },
    /// List tables currently open, for use as add targets.
    Tables,
}

#[derive(Clone, Copy, ValueEnum)]
enum MoveDirection {
    Up,
    Down,
}

impl From<MoveDirection> for Direction {
    fn from(d: MoveDirection) -> Self {
        match d {
            MoveDirection::Up => Direction::Up,
            MoveDirection::Down => Direction::Down,
        }
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(api_key) = cli.api_key {
        config.api.api_key = api_key;
    }
    logging::init()?;

    let viewmodel = QueueViewModel::new(ApiClient::new(&config));
    let mut panel = AdminPanel::new(viewmodel, ConsoleNotifier);

    match cli.command {
        Command::Status => {
            panel.handle(QueueAction::Load).await;
            if let Some(snapshot) = panel.viewmodel().snapshot() {
                for line in render::queue_lines(snapshot) {
                    println!("{line}");
                }
            }
        }
        Command::Advance => panel.handle(QueueAction::Advance).await,
        Command::Move { song_id, direction } => {
            // Moves need the current order first (cache-first, fetch-if-empty).
            panel.handle(QueueAction::Load).await;
            panel
                .handle(QueueAction::Reorder {
                    song_id,
                    direction: direction.into(),
                })
                .await;
        }
        Command::Remove { song_id, yes } => {
            if yes || confirm("Remove this song from the queue?")? {
                panel.handle(QueueAction::Remove { song_id }).await;
            }
        }
        Command::Restart => panel.handle(QueueAction::Restart).await,
        Command::Pause => panel.handle(QueueAction::SetPaused(true)).await,
        Command::Resume => panel.handle(QueueAction::SetPaused(false)).await,
        Command::Add {
            title,
            media_id,
            duration_seconds,
            table,
        } => {
            panel
                .handle(QueueAction::Add {
                    song: NewSong {
                        title,
                        media_id,
                        duration_seconds,
                    },
                    target: table,
                })
                .await;
        }
        Command::Search { query, karaoke } => {
            match panel.viewmodel().search(&query, karaoke).await {
                Ok(results) if results.is_empty() => println!("No results."),
                Ok(results) => {
                    for r in results {
                        println!("[{}] {} ({}s)", r.video_id, r.title, r.duration_seconds);
                    }
                }
                Err(e) => eprintln!("error: {e}"),
            }
        }
        Command::Tables => match panel.viewmodel().active_tables().await {
            Ok(tables) if tables.is_empty() => println!("No active tables."),
            Ok(tables) => {
                for t in tables {
                    println!("[{}] {}", t.id, t.name);
                }
            }
            Err(e) => eprintln!("error: {e}"),
        },
    }

    Ok(())
}
