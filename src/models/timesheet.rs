//! Weekly timesheet model used by the working-hours query.

use serde::{Deserialize, Serialize};

/// Hours worked by one employee over a week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTimesheet {
    /// Numeric employee identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Hours worked per day, normally seven entries.
    #[serde(alias = "dailyHours", default)]
    pub daily_hours: Vec<f64>,
}

impl WeeklyTimesheet {
    /// Returns the mean of the daily hours, or `0.0` when no days are recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::WeeklyTimesheet;
    ///
    /// let sheet = WeeklyTimesheet {
    ///     id: 1,
    ///     name: "Mei Lin".to_string(),
    ///     daily_hours: vec![8.0, 9.0, 10.0],
    /// };
    /// assert_eq!(sheet.average_hours(), 9.0);
    /// ```
    pub fn average_hours(&self) -> f64 {
        if self.daily_hours.is_empty() {
            return 0.0;
        }
        self.daily_hours.iter().sum::<f64>() / self.daily_hours.len() as f64
    }
}
