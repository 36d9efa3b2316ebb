//! Month-level aggregation: headline totals, dashboard stats, and breakdowns.

use std::cmp::Ordering;
use std::collections::HashMap;

use hearth_domain::{BreakdownEntry, CategoryKind, DashboardStats, MonthKey, MonthTotals, OwnerSlot};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::goals::GoalService;
use crate::store::{categories_for_items, HouseholdStore};
use crate::CoreError;

/// Aggregates one user's line items into month statistics.
///
/// A missing budget is the defined empty state, not an error: every total is
/// zero. Line items whose category reference does not resolve contribute
/// nothing to any bucket.
pub struct StatsService<'a, S: HouseholdStore> {
    store: &'a S,
}

impl<'a, S: HouseholdStore> StatsService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Raw totals for the given month (current month when unspecified).
    ///
    /// Bucket rules: income and expense amounts count regardless of owner
    /// slot; savings counts only the shared slot; fun counts in the savings
    /// bucket regardless of slot.
    pub fn month_totals(
        &self,
        user_id: Uuid,
        month: Option<MonthKey>,
    ) -> Result<MonthTotals, CoreError> {
        let month = month.unwrap_or_else(MonthKey::current);
        let Some(budget) = self.store.budget_for_month(user_id, month)? else {
            return Ok(MonthTotals::default());
        };

        let items = self.store.line_items(budget.id)?;
        let categories = categories_for_items(self.store, &items)?;

        let mut totals = MonthTotals::default();
        for item in &items {
            let Some(category) = categories.get(&item.category_id) else {
                warn!(
                    line_item = %item.id,
                    category = %item.category_id,
                    "skipping line item with unresolved category"
                );
                continue;
            };
            match category.kind {
                CategoryKind::Income => totals.total_income += item.amount,
                CategoryKind::Expense => totals.total_expenses += item.amount,
                CategoryKind::Savings => {
                    if item.owner_slot == OwnerSlot::Shared {
                        totals.total_savings += item.amount;
                    }
                }
                CategoryKind::Fun => totals.total_savings += item.amount,
            }
        }
        debug!(user = %user_id, %month, ?totals, "computed month totals");
        Ok(totals)
    }

    /// Headline dashboard statistics for the given month.
    ///
    /// `goals_achieved` is recomputed from the cumulative trend and the
    /// user's goal list; the change fields compare against the previous
    /// calendar month and are 0 when that month has no activity.
    pub fn dashboard_stats(
        &self,
        user_id: Uuid,
        month: Option<MonthKey>,
    ) -> Result<DashboardStats, CoreError> {
        let month = month.unwrap_or_else(MonthKey::current);
        let current = self.month_totals(user_id, Some(month))?;
        let previous = self.month_totals(user_id, Some(month.prev()))?;
        let goals_achieved = GoalService::new(self.store).goals_achieved(user_id)?;

        Ok(DashboardStats {
            net_income: current.net_income(),
            expenses: current.total_expenses,
            savings: current.total_savings,
            goals_achieved,
            income_change: percent_change(current.total_income, previous.total_income),
            savings_change: percent_change(current.total_savings, previous.total_savings),
            expenses_change: percent_change(current.total_expenses, previous.total_expenses),
        })
    }

    /// Per-category totals for one category kind in the given month,
    /// sorted descending by amount.
    ///
    /// Percentages are shares of the kind's total, rounded to one decimal,
    /// and 0 when the total is 0.
    pub fn breakdown(
        &self,
        user_id: Uuid,
        month: Option<MonthKey>,
        kind: CategoryKind,
    ) -> Result<Vec<BreakdownEntry>, CoreError> {
        let month = month.unwrap_or_else(MonthKey::current);
        let Some(budget) = self.store.budget_for_month(user_id, month)? else {
            return Ok(Vec::new());
        };

        let items = self.store.line_items(budget.id)?;
        let categories = categories_for_items(self.store, &items)?;

        let mut per_category: HashMap<Uuid, (String, f64)> = HashMap::new();
        let mut total = 0.0;
        for item in &items {
            let Some(category) = categories.get(&item.category_id) else {
                continue;
            };
            if category.kind != kind {
                continue;
            }
            per_category
                .entry(category.id)
                .or_insert_with(|| (category.name.clone(), 0.0))
                .1 += item.amount;
            total += item.amount;
        }

        let mut breakdown: Vec<BreakdownEntry> = per_category
            .into_values()
            .map(|(category, amount)| {
                let percentage = if total > 0.0 {
                    round_one_decimal(amount / total * 100.0)
                } else {
                    0.0
                };
                BreakdownEntry {
                    category,
                    amount,
                    percentage,
                }
            })
            .collect();
        breakdown.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
        Ok(breakdown)
    }
}

/// Percentage delta against a baseline, 0 when the baseline is 0.
fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        round_one_decimal((current - previous) / previous * 100.0)
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
