//! Display implementations for domain models.
//!
//! Each model renders as a small markdown document: a numbered heading, a
//! metadata list, then free text. List views in [`super::collections`] use
//! the one-line forms defined here.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Bookmark, Cadence, Habit, Priority, TagCount, Task};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn completion_label(completed: bool) -> &'static str {
    if completed {
        "✓ Done"
    } else {
        "○ Open"
    }
}

fn hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", completion_label(self.completed))?;
        writeln!(f, "- Priority: {}", self.priority.with_icon())?;
        if let Some(due) = self.due_date {
            writeln!(f, "- Due: {due}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}

impl Task {
    /// One-line list form.
    pub(crate) fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(
            f,
            "- [{mark}] **{}** (ID: {}) · {}",
            self.title,
            self.id,
            self.priority.with_icon()
        )?;
        if let Some(due) = self.due_date {
            write!(f, " · due {due}")?;
        }
        writeln!(f)
    }
}

impl Habit {
    fn streak_label(&self, count: u32) -> String {
        format!("{count} {}", self.cadence.period_label(count))
    }

    /// One-line list form.
    pub(crate) fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}** (ID: {}) · {} · streak {} (best {})",
            self.name,
            self.id,
            self.cadence,
            self.streak_label(self.streak),
            self.streak_label(self.best_streak)
        )?;
        if let Some(last) = self.last_done {
            write!(f, " · last {last}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Cadence: {}", self.cadence)?;
        writeln!(f, "- Streak: {}", self.streak_label(self.streak))?;
        writeln!(f, "- Best: {}", self.streak_label(self.best_streak))?;
        match self.last_done {
            Some(last) => writeln!(f, "- Last done: {last}")?,
            None => writeln!(f, "- Last done: never")?,
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let star = if self.favorite { "★ " } else { "" };
        writeln!(f, "# {}. {star}{}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- URL: <{}>", self.url)?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", hashtags(&self.tags))?;
        }
        writeln!(f, "- Clicks: {}", self.clicks)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}

impl Bookmark {
    /// One-line list form.
    pub(crate) fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let star = if self.favorite { "★ " } else { "" };
        write!(f, "- {star}[{}]({}) (ID: {})", self.title, self.url, self.id)?;
        if !self.tags.is_empty() {
            write!(f, " · {}", hashtags(&self.tags))?;
        }
        writeln!(f, " · {} clicks", self.clicks)
    }
}

impl fmt::Display for TagCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.name, self.count)
    }
}
