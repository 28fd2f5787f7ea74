//! Habit check-in and streak computation.
//!
//! A check-in either extends the streak (the previous check-in fell in the
//! immediately preceding period), resets it to one (no previous check-in, or
//! a gap of at least one whole period), or is rejected because the current
//! period already has a check-in. Periods are calendar days for
//! [`Cadence::Daily`] and ISO weeks, Monday through Sunday, for
//! [`Cadence::Weekly`].
//!
//! Everything here is a pure function of the habit and an explicit reference
//! date; callers that want "today" use [`today_utc`].
//!
//! ```rust
//! use jiff::civil::date;
//! use tally_core::{models::{Cadence, Habit}, streak::check_in};
//!
//! let mut habit = Habit::new(1, "Review inbox", Cadence::Weekly);
//! habit.streak = 3;
//! habit.best_streak = 3;
//! habit.last_done = Some(date(2024, 1, 1)); // Monday
//!
//! assert!(check_in(&mut habit, date(2024, 1, 10))); // Wednesday, next week
//! assert_eq!(habit.streak, 4);
//! assert_eq!(habit.last_done, Some(date(2024, 1, 10)));
//! ```

use jiff::{civil::Date, tz::TimeZone, Timestamp, ToSpan};

use crate::models::{Cadence, Habit};

/// The current calendar date in UTC.
pub fn today_utc() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

/// The ISO week containing `date`, as `(monday, sunday)`.
///
/// Saturates at the bounds of the supported date range.
pub fn week_of(date: Date) -> (Date, Date) {
    let offset = i64::from(date.weekday().to_monday_zero_offset());
    let monday = date.saturating_sub(offset.days());
    let sunday = monday.saturating_add(6.days());
    (monday, sunday)
}

fn within((start, end): (Date, Date), date: Date) -> bool {
    start <= date && date <= end
}

/// Record a check-in for `habit` on `as_of`.
///
/// Returns `false` without touching the habit when the period containing
/// `as_of` is already checked in. Otherwise updates `streak`, `best_streak`
/// and `last_done` and returns `true`.
pub fn check_in(habit: &mut Habit, as_of: Date) -> bool {
    let next = match habit.cadence {
        Cadence::Daily => next_daily_streak(habit, as_of),
        Cadence::Weekly => next_weekly_streak(habit, as_of),
    };

    let Some(streak) = next else {
        return false;
    };

    habit.streak = streak;
    habit.best_streak = habit.best_streak.max(streak);
    habit.last_done = Some(as_of);
    true
}

fn next_daily_streak(habit: &Habit, today: Date) -> Option<u32> {
    match habit.last_done {
        Some(last) if last == today => None,
        Some(last) if last == today.saturating_sub(1.day()) => {
            Some(habit.streak.saturating_add(1))
        }
        _ => Some(1),
    }
}

fn next_weekly_streak(habit: &Habit, today: Date) -> Option<u32> {
    let this_week = week_of(today);
    let last_week = week_of(today.saturating_sub(7.days()));

    match habit.last_done {
        Some(last) if within(this_week, last) => None,
        Some(last) if within(last_week, last) => Some(habit.streak.saturating_add(1)),
        _ => Some(1),
    }
}
