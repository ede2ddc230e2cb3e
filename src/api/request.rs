//! Request types for the payroll engine API.

use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_MIN_AVERAGE_HOURS, DEFAULT_TOP_LIMIT};

/// Query string for `GET /top-employees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEmployeesQuery {
    /// Only employees averaging strictly more than this many hours a day.
    #[serde(default = "default_min_avg", alias = "minAvg")]
    pub min_avg: f64,
    /// Maximum number of employees returned.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for TopEmployeesQuery {
    fn default() -> Self {
        Self {
            min_avg: default_min_avg(),
            limit: default_limit(),
        }
    }
}

fn default_min_avg() -> f64 {
    DEFAULT_MIN_AVERAGE_HOURS
}

fn default_limit() -> usize {
    DEFAULT_TOP_LIMIT
}
