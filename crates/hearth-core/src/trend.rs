//! Cumulative savings trend across all of a user's budgets.

use hearth_domain::{CategoryKind, OwnerSlot, TrendPoint};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::store::{categories_for_items, HouseholdStore};
use crate::CoreError;

/// Builds the chronologically ordered cumulative savings series.
///
/// Emits exactly one point per existing budget; a user with no budgets gets
/// an empty series, never placeholder data. Both series are running totals,
/// so they are non-decreasing as long as amounts are non-negative.
pub struct TrendService<'a, S: HouseholdStore> {
    store: &'a S,
}

impl<'a, S: HouseholdStore> TrendService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn savings_trend(&self, user_id: Uuid) -> Result<Vec<TrendPoint>, CoreError> {
        let mut budgets = self.store.budgets_for_user(user_id)?;
        budgets.sort_by_key(|budget| budget.month);

        let mut cumulative_shared = 0.0;
        let mut cumulative_fun = 0.0;
        let mut points = Vec::with_capacity(budgets.len());

        for budget in &budgets {
            let items = self.store.line_items(budget.id)?;
            let categories = categories_for_items(self.store, &items)?;

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
                    CategoryKind::Savings if item.owner_slot == OwnerSlot::Shared => {
                        cumulative_shared += item.amount;
                    }
                    CategoryKind::Fun => cumulative_fun += item.amount,
                    _ => {}
                }
            }

            points.push(TrendPoint {
                month: budget.month.label(),
                cumulative_shared,
                cumulative_fun,
            });
        }

        debug!(user = %user_id, points = points.len(), "built savings trend");
        Ok(points)
    }
}
