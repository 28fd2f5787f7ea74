//! Dashboard overview for the Tracker.

use log::debug;

use super::Tracker;
use crate::{error::Result, models::Dashboard, params::ShowDashboard, streak::today_utc};

impl Tracker {
    /// Summarizes all three resources as of `params.date`, or today in UTC.
    ///
    /// Includes the open task count, the five habits with the longest
    /// streaks, the ten most used tags, the six newest bookmarks, and the
    /// number of tasks completed on each of the last fourteen days.
    pub async fn dashboard(&self, params: &ShowDashboard) -> Result<Dashboard> {
        let today = params.as_of()?.unwrap_or_else(today_utc);
        debug!("Building dashboard for {today}");
        self.with_database(move |db| db.dashboard(today)).await
    }
}
