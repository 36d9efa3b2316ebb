//! Read-only store abstraction the engine is constructed over.

use std::collections::HashMap;

use hearth_domain::{Budget, Category, Goal, LineItem, MonthKey};
use uuid::Uuid;

use crate::CoreError;

/// Read-only accessors the engine needs from the persistence layer.
///
/// Implementations own all I/O and its failure modes; the engine propagates
/// store errors unchanged and performs no retries. Missing records are
/// represented as `None`/empty collections, never as errors.
pub trait HouseholdStore: Send + Sync {
    /// The budget for (user, month), if one exists.
    fn budget_for_month(&self, user_id: Uuid, month: MonthKey)
        -> Result<Option<Budget>, CoreError>;

    /// All budgets for a user, in any order. Callers sort.
    fn budgets_for_user(&self, user_id: Uuid) -> Result<Vec<Budget>, CoreError>;

    /// All line items belonging to a budget.
    fn line_items(&self, budget_id: Uuid) -> Result<Vec<LineItem>, CoreError>;

    /// Point lookup of a category. `None` when the reference is dangling.
    fn category(&self, category_id: Uuid) -> Result<Option<Category>, CoreError>;

    /// Bulk fetch of the given categories, keyed by id.
    ///
    /// Ids that do not resolve are simply absent from the map. The default
    /// implementation falls back to point lookups; backends with a native
    /// batch query should override it.
    fn categories_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Category>, CoreError> {
        let mut categories = HashMap::with_capacity(ids.len());
        for &id in ids {
            if categories.contains_key(&id) {
                continue;
            }
            if let Some(category) = self.category(id)? {
                categories.insert(id, category);
            }
        }
        Ok(categories)
    }

    /// All goals for a user, in any order. Callers sort by priority.
    fn goals_for_user(&self, user_id: Uuid) -> Result<Vec<Goal>, CoreError>;
}

/// Resolves the categories referenced by a set of line items in one batch.
pub(crate) fn categories_for_items<S: HouseholdStore + ?Sized>(
    store: &S,
    items: &[LineItem],
) -> Result<HashMap<Uuid, Category>, CoreError> {
    let mut ids: Vec<Uuid> = items.iter().map(|item| item.category_id).collect();
    ids.sort();
    ids.dedup();
    store.categories_by_ids(&ids)
}
