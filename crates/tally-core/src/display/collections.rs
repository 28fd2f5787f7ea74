//! Collection wrapper types for displaying groups of domain objects.
//!
//! Every wrapper renders one line per item and prints a fixed message when
//! the collection is empty.

use std::{fmt, ops::Index};

use crate::models::{Bookmark, Habit, TagCount, Task};

/// Declares a newtype over `Vec<$item>` with slice-like accessors.
macro_rules! collection {
    ($(#[$meta:meta])* $name:ident($item:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get a reference to the item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Iterate over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

collection! {
    /// Task list, one checkbox line per task.
    ///
    /// ```rust
    /// use jiff::Timestamp;
    /// use tally_core::{display::Tasks, models::{Priority, Task}};
    ///
    /// let task = Task {
    ///     id: 1,
    ///     title: "Renew passport".to_string(),
    ///     notes: None,
    ///     due_date: None,
    ///     priority: Priority::High,
    ///     completed: false,
    ///     created_at: Timestamp::now(),
    ///     completed_at: None,
    /// };
    /// let output = Tasks(vec![task]).to_string();
    /// assert!(output.contains("- [ ] **Renew passport** (ID: 1)"));
    /// ```
    Tasks(Task)
}

collection! {
    /// Habit list with current and best streaks.
    Habits(Habit)
}

collection! {
    /// Bookmark list as markdown links.
    Bookmarks(Bookmark)
}

collection! {
    /// Tags with usage counts.
    TagCounts(TagCount)
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.0 {
            task.fmt_line(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Habits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No habits found.");
        }
        for habit in &self.0 {
            habit.fmt_line(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Bookmarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No bookmarks found.");
        }
        for bookmark in &self.0 {
            bookmark.fmt_line(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for TagCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tags found.");
        }
        for tag in &self.0 {
            writeln!(f, "- {tag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::{Cadence, Priority};

    fn create_test_task(id: u64, completed: bool) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            notes: None,
            due_date: Some(date(2024, 5, 1)),
            priority: Priority::Low,
            completed,
            created_at: Timestamp::from_second(1704067200).unwrap(), // 2024-01-01 00:00:00 UTC
            completed_at: None,
        }
    }

    fn create_test_bookmark(favorite: bool) -> Bookmark {
        Bookmark {
            id: 9,
            title: "Docs".to_string(),
            url: "https://docs.rs".to_string(),
            notes: None,
            favorite,
            clicks: 2,
            created_at: Timestamp::from_second(1704067200).unwrap(),
            tags: vec!["rust".to_string()],
        }
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
        assert_eq!(Habits(vec![]).to_string(), "No habits found.\n");
        assert_eq!(Bookmarks(vec![]).to_string(), "No bookmarks found.\n");
        assert_eq!(TagCounts(vec![]).to_string(), "No tags found.\n");
    }

    #[test]
    fn test_tasks_display_checkboxes() {
        let tasks = Tasks(vec![create_test_task(1, false), create_test_task(2, true)]);
        let output = tasks.to_string();

        assert!(output.contains("- [ ] **Task 1** (ID: 1)"));
        assert!(output.contains("- [x] **Task 2** (ID: 2)"));
        assert!(output.contains("due 2024-05-01"));
        assert!(output.contains("▽ Low"));
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, 2);
    }

    #[test]
    fn test_habits_display_streaks() {
        let mut habit = Habit::new(5, "Run", Cadence::Weekly);
        habit.streak = 1;
        habit.best_streak = 4;
        let output = Habits(vec![habit]).to_string();

        assert!(output.contains("**Run** (ID: 5)"));
        assert!(output.contains("streak 1 week (best 4 weeks)"));
        assert!(!output.contains("last"));
    }

    #[test]
    fn test_bookmarks_display_links() {
        let output = Bookmarks(vec![create_test_bookmark(true)]).to_string();
        assert!(output.contains("- ★ [Docs](https://docs.rs) (ID: 9)"));
        assert!(output.contains("#rust"));
        assert!(output.contains("2 clicks"));

        let output = Bookmarks(vec![create_test_bookmark(false)]).to_string();
        assert!(!output.contains('★'));
    }

    #[test]
    fn test_tag_counts_display() {
        let tags = TagCounts(vec![
            TagCount {
                name: "rust".to_string(),
                count: 3,
            },
            TagCount {
                name: "web".to_string(),
                count: 1,
            },
        ]);
        assert_eq!(tags.to_string(), "- #rust (3)\n- #web (1)\n");
    }
}
