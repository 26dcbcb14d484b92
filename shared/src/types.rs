//! Common types used across the platform

use serde::{Deserialize, Serialize};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl YearMonth {
    /// First month of the synthetic price history window
    pub const HISTORY_START: YearMonth = YearMonth { year: 2022, month: 1 };

    pub fn new(year: i32, month: u32) -> Self {
        let month = month.clamp(1, 12);
        Self { year, month }
    }

    /// The month `count` months later
    pub fn plus_months(&self, count: usize) -> Self {
        let zero_based = self.year as i64 * 12 + (self.month as i64 - 1) + count as i64;
        Self {
            year: zero_based.div_euclid(12) as i32,
            month: zero_based.rem_euclid(12) as u32 + 1,
        }
    }

    /// Label such as "Jan 2022"
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// `count` consecutive months starting at `start`
pub fn month_range(start: YearMonth, count: usize) -> Vec<YearMonth> {
    (0..count).map(|i| start.plus_months(i)).collect()
}
