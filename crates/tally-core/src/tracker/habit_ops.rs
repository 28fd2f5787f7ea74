//! Habit operations for the Tracker.

use log::{debug, info};

use super::Tracker;
use crate::{
    display::{CheckInOutcome, Habits, UpdateResult},
    error::{Result, TrackerError},
    models::{Habit, HabitChanges, NewHabit},
    params::{CheckIn, CreateHabit, Delete, Id, UpdateHabit},
    streak::today_utc,
};

impl Tracker {
    /// Creates a habit with no check-ins yet.
    pub async fn create_habit(&self, params: &CreateHabit) -> Result<Habit> {
        let habit = NewHabit::try_from(params)?;
        debug!("Creating {} habit '{}'", habit.cadence, habit.name);
        self.with_database(move |db| db.create_habit(&habit)).await
    }

    /// Retrieves a habit by its ID.
    pub async fn get_habit(&self, params: &Id) -> Result<Option<Habit>> {
        let id = params.id;
        self.with_database(move |db| db.get_habit(id)).await
    }

    /// Lists all habits, longest running streak first.
    pub async fn list_habits(&self) -> Result<Habits> {
        let habits = self.with_database(|db| db.list_habits(None)).await?;
        Ok(Habits(habits))
    }

    /// Edits a habit's name, description or cadence.
    ///
    /// Streak state is never changed here; a cadence switch takes effect at
    /// the next check-in.
    pub async fn update_habit(&self, params: &UpdateHabit) -> Result<UpdateResult<Habit>> {
        let id = params.id;
        let changes = HabitChanges::try_from(params)?;

        let mut described = Vec::new();
        if changes.name.is_some() {
            described.push("Updated name".to_string());
        }
        if let Some(ref description) = changes.description {
            described.push(
                if description.is_some() { "Updated description" } else { "Cleared description" }
                    .to_string(),
            );
        }
        if let Some(cadence) = changes.cadence {
            described.push(format!("Set cadence to {cadence}"));
        }

        debug!("Updating habit {id}");
        let habit = self
            .with_database(move |db| db.update_habit(id, &changes))
            .await?
            .ok_or(TrackerError::HabitNotFound { id })?;

        Ok(UpdateResult::with_changes(habit, described))
    }

    /// Checks in a habit for `params.date`, or today in UTC.
    ///
    /// The habit is persisted only when the check-in is accepted. Checking in
    /// twice in the same day (daily) or ISO week (weekly) is not an error;
    /// the outcome reports `changed: false`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::HabitNotFound` if the habit doesn't exist and
    /// `TrackerError::InvalidInput` if the date isn't `YYYY-MM-DD`.
    pub async fn check_in_habit(&self, params: &CheckIn) -> Result<CheckInOutcome> {
        let id = params.id;
        let as_of = params.as_of()?.unwrap_or_else(today_utc);

        let (habit, changed) = self
            .with_database(move |db| db.check_in_habit(id, as_of))
            .await?
            .ok_or(TrackerError::HabitNotFound { id })?;

        if changed {
            info!(
                "Habit {id} checked in on {as_of}: streak {} (best {})",
                habit.streak, habit.best_streak
            );
        } else {
            info!("Habit {id} already checked in for the period containing {as_of}");
        }

        Ok(CheckInOutcome { habit, changed })
    }

    /// Permanently deletes a habit, returning it for confirmation.
    pub async fn delete_habit(&self, params: &Delete) -> Result<Habit> {
        params.ensure_confirmed("Habit")?;
        let id = params.id;

        self.with_database(move |db| {
            let habit = db.get_habit(id)?.ok_or(TrackerError::HabitNotFound { id })?;
            db.delete_habit(id)?;
            Ok(habit)
        })
        .await
    }
}
