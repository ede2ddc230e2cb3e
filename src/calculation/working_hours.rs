//! Working-hours ranking.
//!
//! Orderings are plain comparator functions rather than an `Ord` impl on
//! [`WeeklyTimesheet`], so callers pick the ordering at the call site.

use std::cmp::Ordering;

use crate::models::WeeklyTimesheet;

/// Default minimum average for the top-employees query.
pub const DEFAULT_MIN_AVERAGE_HOURS: f64 = 8.0;

/// Default result limit for the top-employees query.
pub const DEFAULT_TOP_LIMIT: usize = 20;

/// Orders timesheets by name, A to Z.
pub fn by_name_asc(a: &WeeklyTimesheet, b: &WeeklyTimesheet) -> Ordering {
    a.name.cmp(&b.name)
}

/// Orders timesheets by average hours, lowest first.
pub fn by_average_hours_asc(a: &WeeklyTimesheet, b: &WeeklyTimesheet) -> Ordering {
    a.average_hours().total_cmp(&b.average_hours())
}

/// Orders timesheets by average hours, highest first.
pub fn by_average_hours_desc(a: &WeeklyTimesheet, b: &WeeklyTimesheet) -> Ordering {
    by_average_hours_asc(a, b).reverse()
}

/// Returns up to `limit` timesheets whose average daily hours are strictly
/// greater than `min_average`, busiest first.
///
/// The sort is stable, so employees with equal averages keep their input
/// order.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::top_by_average_hours;
/// use payroll_engine::models::WeeklyTimesheet;
///
/// let sheets = vec![
///     WeeklyTimesheet { id: 1, name: "Ana".to_string(), daily_hours: vec![8.0; 7] },
///     WeeklyTimesheet { id: 2, name: "Ben".to_string(), daily_hours: vec![10.0; 7] },
///     WeeklyTimesheet { id: 3, name: "Cy".to_string(), daily_hours: vec![9.0; 7] },
/// ];
///
/// let top = top_by_average_hours(&sheets, 8.0, 10);
/// let ids: Vec<u64> = top.iter().map(|s| s.id).collect();
/// assert_eq!(ids, vec![2, 3]);
/// ```
pub fn top_by_average_hours(
    timesheets: &[WeeklyTimesheet],
    min_average: f64,
    limit: usize,
) -> Vec<WeeklyTimesheet> {
    let mut matching: Vec<WeeklyTimesheet> = timesheets
        .iter()
        .filter(|sheet| sheet.average_hours() > min_average)
        .cloned()
        .collect();
    matching.sort_by(by_average_hours_desc);
    matching.truncate(limit);
    matching
}
