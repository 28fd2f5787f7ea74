use jiff::{civil::date, Timestamp};

use crate::{
    models::{
        Bookmark, BookmarkChanges, BookmarkFilter, BookmarkSort, Cadence, Habit, HabitChanges,
        NewBookmark, NewHabit, NewTask, Priority, Task, TaskChanges, TaskFilter,
    },
    params::{
        CreateBookmark, CreateHabit, CreateTask, ListBookmarks, ListTasks, UpdateBookmark,
        UpdateHabit, UpdateTask,
    },
    TrackerError,
};

fn create_test_task(completed: bool) -> Task {
    Task {
        id: 7,
        title: "File taxes".to_string(),
        notes: Some("Bring receipts".to_string()),
        due_date: Some(date(2024, 4, 15)),
        priority: Priority::High,
        completed,
        created_at: Timestamp::from_second(1704067200).unwrap(), // 2024-01-01 00:00:00 UTC
        completed_at: completed.then(|| Timestamp::from_second(1704153600).unwrap()),
    }
}

fn create_test_bookmark() -> Bookmark {
    Bookmark {
        id: 3,
        title: "Rust Book".to_string(),
        url: "https://doc.rust-lang.org/book/".to_string(),
        notes: None,
        favorite: true,
        clicks: 12,
        created_at: Timestamp::from_second(1704067200).unwrap(),
        tags: vec!["docs".to_string(), "rust".to_string()],
    }
}

#[test]
fn test_cadence_from_str() {
    assert_eq!("daily".parse::<Cadence>().unwrap(), Cadence::Daily);
    assert_eq!("Weekly".parse::<Cadence>().unwrap(), Cadence::Weekly);
    assert_eq!("w".parse::<Cadence>().unwrap(), Cadence::Weekly);
    assert!("monthly".parse::<Cadence>().is_err());
}

#[test]
fn test_cadence_period_label() {
    assert_eq!(Cadence::Daily.period_label(1), "day");
    assert_eq!(Cadence::Daily.period_label(4), "days");
    assert_eq!(Cadence::Weekly.period_label(0), "weeks");
}

#[test]
fn test_priority_round_trips_through_db_string() {
    for priority in [Priority::Low, Priority::Normal, Priority::High] {
        assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
    }
    assert!("urgent".parse::<Priority>().is_err());
}

#[test]
fn test_priority_ordering() {
    assert!(Priority::High > Priority::Normal);
    assert!(Priority::Normal > Priority::Low);
    assert_eq!(Priority::default(), Priority::Normal);
}

#[test]
fn test_bookmark_sort_from_str() {
    assert_eq!("clicks".parse::<BookmarkSort>().unwrap(), BookmarkSort::Clicks);
    assert_eq!("TITLE".parse::<BookmarkSort>().unwrap(), BookmarkSort::Title);
    assert_eq!("newest".parse::<BookmarkSort>().unwrap(), BookmarkSort::New);
    assert!("random".parse::<BookmarkSort>().is_err());
}

#[test]
fn test_task_set_completed_stamps_and_clears() {
    let mut task = create_test_task(false);
    let now = Timestamp::from_second(1710000000).unwrap();

    assert!(task.set_completed(true, now));
    assert!(task.completed);
    assert_eq!(task.completed_at, Some(now));

    // Already completed: timestamp is preserved
    let later = Timestamp::from_second(1720000000).unwrap();
    assert!(!task.set_completed(true, later));
    assert_eq!(task.completed_at, Some(now));

    assert!(task.set_completed(false, later));
    assert!(!task.completed);
    assert_eq!(task.completed_at, None);
}

#[test]
fn test_habit_new_starts_empty() {
    let habit = Habit::new(1, "Read", Cadence::Weekly);
    assert_eq!(habit.streak, 0);
    assert_eq!(habit.best_streak, 0);
    assert_eq!(habit.cadence, Cadence::Weekly);
    assert_eq!(habit.description, None);
}

#[test]
fn test_habit_serializes_date_only() {
    let mut habit = Habit::new(1, "Read", Cadence::Daily);
    habit.last_done = Some(date(2024, 1, 10));
    let json = serde_json::to_string(&habit).unwrap();
    assert!(json.contains("\"last_done\":\"2024-01-10\""));
    assert!(json.contains("\"cadence\":\"daily\""));
}

#[test]
fn test_new_task_defaults_priority() {
    let params = CreateTask {
        title: " Buy milk ".to_string(),
        ..Default::default()
    };
    let new_task = NewTask::try_from(&params).unwrap();
    assert_eq!(new_task.title, "Buy milk");
    assert_eq!(new_task.priority, Priority::Normal);
    assert_eq!(new_task.due_date, None);
}

#[test]
fn test_new_task_rejects_long_title() {
    let params = CreateTask {
        title: "x".repeat(121),
        ..Default::default()
    };
    match NewTask::try_from(&params).unwrap_err() {
        TrackerError::InvalidInput { field, .. } => assert_eq!(field, "title"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
}

#[test]
fn test_new_task_rejects_bad_priority() {
    let params = CreateTask {
        title: "Task".to_string(),
        priority: Some("urgent".to_string()),
        ..Default::default()
    };
    match NewTask::try_from(&params).unwrap_err() {
        TrackerError::InvalidInput { field, reason } => {
            assert_eq!(field, "priority");
            assert!(reason.contains("urgent"));
        }
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
}

#[test]
fn test_blank_priority_counts_as_absent() {
    let params = CreateTask {
        title: "Task".to_string(),
        priority: Some(" ".to_string()),
        ..Default::default()
    };
    assert_eq!(NewTask::try_from(&params).unwrap().priority, Priority::Normal);

    let params = UpdateTask {
        id: 1,
        priority: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(TaskChanges::try_from(&params).unwrap().priority, None);

    let params = ListTasks {
        priority: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(TaskFilter::try_from(&params).unwrap().priority, None);
}

#[test]
fn test_task_changes_empty_string_clears() {
    let params = UpdateTask {
        id: 1,
        notes: Some(String::new()),
        due_date: Some(" ".to_string()),
        ..Default::default()
    };
    let changes = TaskChanges::try_from(&params).unwrap();
    assert_eq!(changes.notes, Some(None));
    assert_eq!(changes.due_date, Some(None));
    assert_eq!(changes.title, None);
    assert_eq!(changes.completed, None);
}

#[test]
fn test_task_changes_rejects_blank_title() {
    let params = UpdateTask {
        id: 1,
        title: Some("  ".to_string()),
        ..Default::default()
    };
    assert!(TaskChanges::try_from(&params).is_err());
}

#[test]
fn test_new_habit_parses_cadence() {
    let params = CreateHabit {
        name: "Run".to_string(),
        description: Some("5k".to_string()),
        cadence: Some("weekly".to_string()),
    };
    let habit = NewHabit::try_from(&params).unwrap();
    assert_eq!(habit.cadence, Cadence::Weekly);
    assert_eq!(habit.description.as_deref(), Some("5k"));
}

#[test]
fn test_new_habit_rejects_long_name() {
    let params = CreateHabit {
        name: "n".repeat(81),
        ..Default::default()
    };
    assert!(NewHabit::try_from(&params).is_err());
}

#[test]
fn test_habit_changes() {
    let params = UpdateHabit {
        id: 2,
        cadence: Some("daily".to_string()),
        description: Some(String::new()),
        ..Default::default()
    };
    let changes = HabitChanges::try_from(&params).unwrap();
    assert_eq!(changes.cadence, Some(Cadence::Daily));
    assert_eq!(changes.description, Some(None));
    assert_eq!(changes.name, None);
}

#[test]
fn test_blank_cadence_counts_as_absent() {
    let params = UpdateHabit {
        id: 2,
        cadence: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(HabitChanges::try_from(&params).unwrap().cadence, None);

    let params = CreateHabit {
        name: "Run".to_string(),
        cadence: Some("  ".to_string()),
        ..Default::default()
    };
    assert_eq!(NewHabit::try_from(&params).unwrap().cadence, Cadence::Daily);
}

#[test]
fn test_new_bookmark_validates_url_and_tags() {
    let params = CreateBookmark {
        title: "Docs".to_string(),
        url: "https://docs.rs".to_string(),
        tags: Some("Rust, docs, rust".to_string()),
        ..Default::default()
    };
    let bookmark = NewBookmark::try_from(&params).unwrap();
    assert_eq!(bookmark.tags, vec!["rust", "docs"]);
    assert!(!bookmark.favorite);

    let params = CreateBookmark {
        title: "Docs".to_string(),
        url: "not a url".to_string(),
        ..Default::default()
    };
    match NewBookmark::try_from(&params).unwrap_err() {
        TrackerError::InvalidInput { field, .. } => assert_eq!(field, "url"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
}

#[test]
fn test_bookmark_changes_empty_tags_clear() {
    let params = UpdateBookmark {
        id: 1,
        tags: Some(String::new()),
        ..Default::default()
    };
    let changes = BookmarkChanges::try_from(&params).unwrap();
    assert_eq!(changes.tags, Some(Vec::new()));
    assert_eq!(changes.url, None);
}

#[test]
fn test_task_filter_defaults_include_completed() {
    let filter = TaskFilter::try_from(&ListTasks::default()).unwrap();
    assert_eq!(filter, TaskFilter::default());
    assert!(filter.include_completed);
}

#[test]
fn test_bookmark_filter_from_params() {
    let params = ListBookmarks {
        query: Some("rust".to_string()),
        tag: Some("Docs".to_string()),
        favorites: true,
        sort: Some("clicks".to_string()),
    };
    let filter = BookmarkFilter::try_from(&params).unwrap();
    assert_eq!(filter.query.as_deref(), Some("rust"));
    assert_eq!(filter.tag.as_deref(), Some("docs"));
    assert!(filter.favorites_only);
    assert_eq!(filter.sort, BookmarkSort::Clicks);
}

#[test]
fn test_bookmark_filter_rejects_unknown_sort() {
    let params = ListBookmarks {
        sort: Some("popular".to_string()),
        ..Default::default()
    };
    assert!(BookmarkFilter::try_from(&params).is_err());
}

#[test]
fn test_task_display_contains_details() {
    let output = format!("{}", create_test_task(true));
    assert!(output.contains("# 7. File taxes"));
    assert!(output.contains("▲ High"));
    assert!(output.contains("Due: 2024-04-15"));
    assert!(output.contains("✓ Done"));
    assert!(output.contains("Bring receipts"));
}

#[test]
fn test_bookmark_display_contains_tags() {
    let output = format!("{}", create_test_bookmark());
    assert!(output.contains("Rust Book"));
    assert!(output.contains("★"));
    assert!(output.contains("#docs"));
    assert!(output.contains("Clicks: 12"));
}

#[test]
fn test_habit_display_shows_streak() {
    let mut habit = Habit::new(4, "Meditate", Cadence::Daily);
    habit.streak = 3;
    habit.best_streak = 5;
    habit.last_done = Some(date(2024, 1, 10));
    let output = format!("{habit}");
    assert!(output.contains("# 4. Meditate"));
    assert!(output.contains("Streak: 3 days"));
    assert!(output.contains("Best: 5 days"));
    assert!(output.contains("Last done: 2024-01-10"));
}
