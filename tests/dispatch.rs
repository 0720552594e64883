// AdminPanel dispatch: the notification taxonomy. Every backend-facing error
// ends as a notification; expected-empty and unsupported outcomes are not
// errors; boundary moves stay silent.

mod common;

use serde_json::json;

use cantoctl::action::{Direction, QueueAction};
use cantoctl::app::AdminPanel;
use cantoctl::notify::Level;
use cantoctl::queue::QueueViewModel;

use common::{snapshot_json, song_json, MockTransport, RecordingNotifier};

fn panel_with(transport: MockTransport) -> AdminPanel<MockTransport, RecordingNotifier> {
    AdminPanel::new(QueueViewModel::new(transport), RecordingNotifier::default())
}

#[tokio::test]
async fn test_restart_404_notifies_warning_not_error() {
    let transport = MockTransport::new();
    transport.push_http_error(404, "Not Found");
    let mut panel = panel_with(transport);
    panel
        .viewmodel_mut()
        .apply_push(serde_json::from_value(snapshot_json(None, vec![song_json("A", "A")])).unwrap());

    panel.handle(QueueAction::Restart).await;

    let messages = &panel.notifier_mut().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].1, Level::Warning);
    assert!(messages[0].0.contains("not available"));
    // cached order untouched
    assert_eq!(panel.viewmodel().upcoming_ids(), vec!["A"]);
}

#[tokio::test]
async fn test_advance_empty_notifies_info() {
    let transport = MockTransport::new();
    transport.push_empty(204);
    let mut panel = panel_with(transport);

    panel.handle(QueueAction::Advance).await;

    let messages = &panel.notifier_mut().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].1, Level::Info);
    assert!(messages[0].0.contains("No more songs"));
}

#[tokio::test]
async fn test_advance_success_notifies_promoted_title() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({ "cancion": song_json("5", "La Camisa Negra") }));
    transport.push_json(200, snapshot_json(Some(song_json("5", "La Camisa Negra")), vec![]));
    let mut panel = panel_with(transport);

    panel.handle(QueueAction::Advance).await;

    let messages = &panel.notifier_mut().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].1, Level::Success);
    assert!(messages[0].0.contains("La Camisa Negra"));
}

#[tokio::test]
async fn test_advance_failure_surfaces_server_detail() {
    let transport = MockTransport::new();
    transport.push_http_error(500, "no se pudo avanzar");
    let mut panel = panel_with(transport);

    panel.handle(QueueAction::Advance).await;

    let messages = &panel.notifier_mut().messages;
    assert_eq!(messages[0].1, Level::Error);
    assert!(messages[0].0.contains("no se pudo avanzar"));
}

#[tokio::test]
async fn test_boundary_reorder_is_fully_silent() {
    let mut panel = panel_with(MockTransport::new());
    panel
        .viewmodel_mut()
        .apply_push(serde_json::from_value(snapshot_json(None, vec![song_json("A", "A")])).unwrap());

    panel
        .handle(QueueAction::Reorder {
            song_id: "A".to_string(),
            direction: Direction::Up,
        })
        .await;

    assert!(panel.viewmodel().transport().calls().is_empty());
    assert!(panel.notifier_mut().messages.is_empty());
}

#[tokio::test]
async fn test_mutation_success_with_failed_refresh_adds_stale_warning() {
    let transport = MockTransport::new();
    transport.push_empty(200); // remove accepted
    transport.push_http_error(500, "db locked"); // refresh fails
    let mut panel = panel_with(transport);

    panel
        .handle(QueueAction::Remove {
            song_id: "3".to_string(),
        })
        .await;

    let messages = &panel.notifier_mut().messages;
    assert_eq!(messages.len(), 2);
    // the mutation's own notification still fires first
    assert_eq!(messages[0].1, Level::Info);
    assert!(messages[0].0.contains("removed"));
    assert_eq!(messages[1].1, Level::Warning);
    assert!(messages[1].0.contains("out of date"));
}

#[tokio::test]
async fn test_pause_and_resume_notify_info() {
    let transport = MockTransport::new();
    transport.push_empty(200);
    transport.push_empty(200);
    let mut panel = panel_with(transport);

    panel.handle(QueueAction::SetPaused(true)).await;
    panel.handle(QueueAction::SetPaused(false)).await;

    let messages = &panel.notifier_mut().messages;
    assert_eq!(messages.len(), 2);
    assert!(messages[0].0.contains("paused"));
    assert!(messages[1].0.contains("resumed"));
    assert!(messages.iter().all(|(_, level)| *level == Level::Info));
}

#[tokio::test]
async fn test_add_success_names_destination() {
    let transport = MockTransport::new();
    transport.push_json(200, song_json("8", "Rayando el Sol"));
    transport.push_json(200, snapshot_json(None, vec![song_json("8", "Rayando el Sol")]));
    let mut panel = panel_with(transport);

    panel
        .handle(QueueAction::Add {
            song: cantoctl::api::models::NewSong {
                title: "Rayando el Sol".to_string(),
                media_id: "m".to_string(),
                duration_seconds: 200,
            },
            target: Some("4".to_string()),
        })
        .await;

    let messages = &panel.notifier_mut().messages;
    assert_eq!(messages[0].1, Level::Success);
    assert!(messages[0].0.contains("Rayando el Sol"));
    assert!(messages[0].0.contains("table 4"));
}

#[tokio::test]
async fn test_load_failure_notifies_and_keeps_cache() {
    let transport = MockTransport::new();
    transport.push_http_error(502, "backend down");
    let mut panel = panel_with(transport);

    panel.handle(QueueAction::Load).await;

    let messages = &panel.notifier_mut().messages;
    assert_eq!(messages[0].1, Level::Error);
    assert!(messages[0].0.contains("backend down"));
    assert!(panel.viewmodel().snapshot().is_none());
}
