//! Display for the dashboard overview.

use std::fmt;

use super::collections::TagCounts;
use crate::{db::dashboard_queries::COMPLETION_WINDOW_DAYS, models::Dashboard};

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dashboard for {}", self.today)?;
        writeln!(f)?;
        writeln!(f, "- Open tasks: {}", self.open_tasks)?;
        writeln!(
            f,
            "- Completed in the last {COMPLETION_WINDOW_DAYS} days: {}",
            self.completed_in_window()
        )?;

        writeln!(f, "\n## Top habits")?;
        writeln!(f)?;
        if self.top_habits.is_empty() {
            writeln!(f, "No habits yet.")?;
        } else {
            for habit in &self.top_habits {
                habit.fmt_line(f)?;
            }
        }

        writeln!(f, "\n## Top tags")?;
        writeln!(f)?;
        if self.top_tags.is_empty() {
            writeln!(f, "No tags yet.")?;
        } else {
            write!(f, "{}", TagCounts(self.top_tags.clone()))?;
        }

        writeln!(f, "\n## Recent bookmarks")?;
        writeln!(f)?;
        if self.recent_bookmarks.is_empty() {
            writeln!(f, "No bookmarks yet.")?;
        } else {
            for bookmark in &self.recent_bookmarks {
                bookmark.fmt_line(f)?;
            }
        }

        writeln!(f, "\n## Completed tasks")?;
        writeln!(f)?;
        writeln!(f, "| Date | Done |")?;
        writeln!(f, "|------|-----:|")?;
        for day in &self.completions {
            writeln!(f, "| {} | {} |", day.date, day.count)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::models::{Cadence, DailyCount, Dashboard, Habit, TagCount};

    #[test]
    fn test_dashboard_display_sections() {
        let mut habit = Habit::new(1, "Floss", Cadence::Daily);
        habit.streak = 9;
        habit.best_streak = 9;

        let dashboard = Dashboard {
            today: date(2024, 3, 14),
            open_tasks: 4,
            top_habits: vec![habit],
            top_tags: vec![TagCount {
                name: "rust".to_string(),
                count: 2,
            }],
            recent_bookmarks: vec![],
            completions: vec![
                DailyCount {
                    date: date(2024, 3, 13),
                    count: 1,
                },
                DailyCount {
                    date: date(2024, 3, 14),
                    count: 2,
                },
            ],
        };

        let output = dashboard.to_string();
        assert!(output.starts_with("# Dashboard for 2024-03-14"));
        assert!(output.contains("- Open tasks: 4"));
        assert!(output.contains("- Completed in the last 14 days: 3"));
        assert!(output.contains("**Floss** (ID: 1)"));
        assert!(output.contains("- #rust (2)"));
        assert!(output.contains("No bookmarks yet."));
        assert!(output.contains("| 2024-03-14 | 2 |"));
    }
}
