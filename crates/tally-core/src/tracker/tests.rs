//! Tests for the tracker module.

use tempfile::TempDir;

use super::*;
use crate::params::{
    CheckIn, CreateBookmark, CreateHabit, CreateTask, Delete, Id, ListBookmarks, ListTasks,
    ShowDashboard, UpdateBookmark, UpdateHabit, UpdateTask,
};

/// Helper function to create a test tracker
async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn task(title: &str) -> CreateTask {
    CreateTask {
        title: title.to_string(),
        ..Default::default()
    }
}

fn habit(name: &str, cadence: &str) -> CreateHabit {
    CreateHabit {
        name: name.to_string(),
        description: None,
        cadence: Some(cadence.to_string()),
    }
}

fn check_in(id: u64, date: &str) -> CheckIn {
    CheckIn {
        id,
        date: Some(date.to_string()),
    }
}

#[tokio::test]
async fn test_build_creates_parent_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested/dir/tally.db");

    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");

    assert!(db_path.exists());
    assert_eq!(tracker.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_update_task_reports_changes() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let created = tracker.create_task(&task("Pay rent")).await.unwrap();

    let result = tracker
        .update_task(&UpdateTask {
            id: created.id,
            priority: Some("high".to_string()),
            due_date: Some("2024-07-01".to_string()),
            completed: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(result.resource.completed);
    assert!(result.resource.completed_at.is_some());
    assert_eq!(
        result.changes,
        vec![
            "Set due date to 2024-07-01".to_string(),
            "Set priority to high".to_string(),
            "Marked as completed".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_update_missing_task_is_not_found() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let err = tracker
        .update_task(&UpdateTask {
            id: 99,
            title: Some("Nope".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::TaskNotFound { id: 99 }));
}

#[tokio::test]
async fn test_list_tasks_rejects_unknown_priority() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let err = tracker
        .list_tasks(&ListTasks {
            priority: Some("urgent".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let created = tracker.create_task(&task("Keep me")).await.unwrap();

    let err = tracker
        .delete_task(&Delete {
            id: created.id,
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("requires explicit confirmation"));
    assert!(tracker
        .get_task(&Id { id: created.id })
        .await
        .unwrap()
        .is_some());

    let deleted = tracker
        .delete_task(&Delete {
            id: created.id,
            confirmed: true,
        })
        .await
        .unwrap();
    assert_eq!(deleted.title, "Keep me");
    assert!(tracker
        .get_task(&Id { id: created.id })
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_check_in_persists_only_when_changed() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let created = tracker.create_habit(&habit("Walk", "daily")).await.unwrap();

    let first = tracker
        .check_in_habit(&check_in(created.id, "2024-02-01"))
        .await
        .unwrap();
    assert!(first.changed);
    assert_eq!(first.habit.streak, 1);

    let again = tracker
        .check_in_habit(&check_in(created.id, "2024-02-01"))
        .await
        .unwrap();
    assert!(!again.changed);
    assert_eq!(again.habit, first.habit);

    let next = tracker
        .check_in_habit(&check_in(created.id, "2024-02-02"))
        .await
        .unwrap();
    assert!(next.changed);
    assert_eq!(next.habit.streak, 2);

    let stored = tracker
        .get_habit(&Id { id: created.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, next.habit);
}

#[tokio::test]
async fn test_check_in_missing_habit() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let err = tracker
        .check_in_habit(&check_in(5, "2024-02-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::HabitNotFound { id: 5 }));
}

#[tokio::test]
async fn test_check_in_rejects_bad_date() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let created = tracker.create_habit(&habit("Walk", "daily")).await.unwrap();
    let err = tracker
        .check_in_habit(&check_in(created.id, "02/01/2024"))
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "date"));
}

#[tokio::test]
async fn test_check_in_defaults_to_today() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let created = tracker.create_habit(&habit("Walk", "daily")).await.unwrap();

    let outcome = tracker
        .check_in_habit(&CheckIn {
            id: created.id,
            date: None,
        })
        .await
        .unwrap();
    assert!(outcome.changed);
    assert_eq!(outcome.habit.last_done, Some(crate::streak::today_utc()));
}

#[tokio::test]
async fn test_update_habit_keeps_streak() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let created = tracker.create_habit(&habit("Swim", "weekly")).await.unwrap();
    tracker
        .check_in_habit(&check_in(created.id, "2024-01-01"))
        .await
        .unwrap();
    tracker
        .check_in_habit(&check_in(created.id, "2024-01-08"))
        .await
        .unwrap();

    let result = tracker
        .update_habit(&UpdateHabit {
            id: created.id,
            name: Some("Swim laps".to_string()),
            description: Some("Pool on Main St".to_string()),
            cadence: Some("daily".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(result.resource.name, "Swim laps");
    assert_eq!(result.resource.streak, 2);
    assert_eq!(result.resource.best_streak, 2);
    assert_eq!(
        result.resource.last_done,
        Some(jiff::civil::date(2024, 1, 8))
    );
    assert!(result.changes.contains(&"Set cadence to daily".to_string()));
}

#[tokio::test]
async fn test_bookmark_visit_and_favorite() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let created = tracker
        .create_bookmark(&CreateBookmark {
            title: "Tokio".to_string(),
            url: "https://tokio.rs".to_string(),
            tags: Some("Rust, async".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.tags, vec!["async".to_string(), "rust".to_string()]);

    let visited = tracker.visit_bookmark(&Id { id: created.id }).await.unwrap();
    assert_eq!(visited.clicks, 1);

    let favored = tracker
        .toggle_favorite(&Id { id: created.id })
        .await
        .unwrap();
    assert!(favored.favorite);
    assert_eq!(favored.clicks, 1);

    let err = tracker.visit_bookmark(&Id { id: 404 }).await.unwrap_err();
    assert!(matches!(err, TrackerError::BookmarkNotFound { id: 404 }));
}

#[tokio::test]
async fn test_update_bookmark_replaces_tags() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let created = tracker
        .create_bookmark(&CreateBookmark {
            title: "Serde".to_string(),
            url: "https://serde.rs".to_string(),
            tags: Some("rust,json".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let result = tracker
        .update_bookmark(&UpdateBookmark {
            id: created.id,
            tags: Some("serialization".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(result.resource.tags, vec!["serialization".to_string()]);
    assert_eq!(
        result.changes,
        vec!["Set tags to serialization".to_string()]
    );

    let filtered = tracker
        .list_bookmarks(&ListBookmarks {
            tag: Some("rust".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(filtered.is_empty());

    // Tags stay in the catalog after being unlinked
    let tags = tracker.list_tags().await.unwrap();
    assert_eq!(tags, vec!["json", "rust", "serialization"]);
}

#[tokio::test]
async fn test_create_bookmark_rejects_relative_url() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let err = tracker
        .create_bookmark(&CreateBookmark {
            title: "Local".to_string(),
            url: "/docs/index.html".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "url"));
}

#[tokio::test]
async fn test_dashboard_for_explicit_date() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker.create_task(&task("Open one")).await.unwrap();

    let dashboard = tracker
        .dashboard(&ShowDashboard {
            date: Some("2024-03-14".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(dashboard.today, jiff::civil::date(2024, 3, 14));
    assert_eq!(dashboard.open_tasks, 1);
    assert_eq!(dashboard.completions.len(), 14);
    assert_eq!(
        dashboard.completions.first().map(|d| d.date),
        Some(jiff::civil::date(2024, 3, 1))
    );
}
