use serde::{Deserialize, Serialize};

use crate::calendar::date::CalendarDate;
use crate::calendar::math::{end_of_month, end_of_week, start_of_month, start_of_week};

/// Shortcut that resolves to a complete range relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuickSelect {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    #[serde(rename = "last7Days")]
    Last7Days,
    #[serde(rename = "last30Days")]
    Last30Days,
}

impl QuickSelect {
    pub const ALL: [QuickSelect; 8] = [
        Self::Today,
        Self::Yesterday,
        Self::ThisWeek,
        Self::LastWeek,
        Self::ThisMonth,
        Self::LastMonth,
        Self::Last7Days,
        Self::Last30Days,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::ThisWeek => "This week",
            Self::LastWeek => "Last week",
            Self::ThisMonth => "This month",
            Self::LastMonth => "Last month",
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
        }
    }

    /// `(start, end)` with `start <= end`.
    pub fn resolve(self, today: CalendarDate) -> (CalendarDate, CalendarDate) {
        match self {
            Self::Today => (today, today),
            Self::Yesterday => {
                let day = today.add_days(-1);
                (day, day)
            }
            Self::ThisWeek => (start_of_week(today), today),
            Self::LastWeek => {
                let prior = today.add_days(-7);
                (start_of_week(prior), end_of_week(prior))
            }
            Self::ThisMonth => (start_of_month(today), today),
            Self::LastMonth => {
                let prior = start_of_month(today).add_days(-1);
                (start_of_month(prior), end_of_month(prior))
            }
            Self::Last7Days => (today.add_days(-6), today),
            Self::Last30Days => (today.add_days(-29), today),
        }
    }
}
