//! Computed view models returned by the engine and serialized by collaborators.

use serde::{Deserialize, Serialize};

/// Raw totals for a single month's budget.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthTotals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
}

impl MonthTotals {
    pub fn net_income(&self) -> f64 {
        self.total_income - self.total_expenses
    }
}

/// Headline dashboard statistics for one month.
///
/// Field names are the wire contract; the `*_change` fields are percentage
/// deltas against the previous calendar month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub net_income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub goals_achieved: usize,
    pub income_change: f64,
    pub savings_change: f64,
    pub expenses_change: f64,
}

/// One point of the cumulative savings trend, labelled with a display month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub cumulative_shared: f64,
    pub cumulative_fun: f64,
}

/// Per-category share of a month's totals for one category kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakdownEntry {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}
