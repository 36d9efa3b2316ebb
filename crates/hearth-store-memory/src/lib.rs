//! hearth-store-memory
//!
//! In-memory implementation of [`HouseholdStore`], used as the collaborator
//! stand-in by tests and by embedders that want a non-persistent backend.

use std::collections::HashMap;

use hearth_core::{CoreError, HouseholdStore};
use hearth_domain::{Budget, Category, Goal, LineItem, MonthKey};
use uuid::Uuid;

/// Vec-backed store for one process.
///
/// Enforces the collaborator-level invariant that at most one budget exists
/// per (user, month). Dangling category references are representable on
/// purpose: the engine must skip them, so tests need to create them.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    categories: Vec<Category>,
    budgets: Vec<Budget>,
    line_items: Vec<LineItem>,
    goals: Vec<Goal>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        id
    }

    /// Removes a category, leaving any line items that reference it dangling.
    pub fn remove_category(&mut self, category_id: Uuid) {
        self.categories.retain(|category| category.id != category_id);
    }

    pub fn add_budget(&mut self, budget: Budget) -> Result<Uuid, CoreError> {
        let duplicate = self
            .budgets
            .iter()
            .any(|existing| existing.user_id == budget.user_id && existing.month == budget.month);
        if duplicate {
            return Err(CoreError::Validation(format!(
                "budget already exists for user {} in {}",
                budget.user_id, budget.month
            )));
        }
        let id = budget.id;
        self.budgets.push(budget);
        Ok(id)
    }

    pub fn add_line_item(&mut self, item: LineItem) -> Uuid {
        let id = item.id;
        self.line_items.push(item);
        id
    }

    pub fn add_goal(&mut self, goal: Goal) -> Uuid {
        let id = goal.id;
        self.goals.push(goal);
        id
    }
}

impl HouseholdStore for MemoryStore {
    fn budget_for_month(
        &self,
        user_id: Uuid,
        month: MonthKey,
    ) -> Result<Option<Budget>, CoreError> {
        Ok(self
            .budgets
            .iter()
            .find(|budget| budget.user_id == user_id && budget.month == month)
            .cloned())
    }

    fn budgets_for_user(&self, user_id: Uuid) -> Result<Vec<Budget>, CoreError> {
        Ok(self
            .budgets
            .iter()
            .filter(|budget| budget.user_id == user_id)
            .cloned()
            .collect())
    }

    fn line_items(&self, budget_id: Uuid) -> Result<Vec<LineItem>, CoreError> {
        Ok(self
            .line_items
            .iter()
            .filter(|item| item.budget_id == budget_id)
            .cloned()
            .collect())
    }

    fn category(&self, category_id: Uuid) -> Result<Option<Category>, CoreError> {
        Ok(self
            .categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned())
    }

    fn categories_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Category>, CoreError> {
        Ok(self
            .categories
            .iter()
            .filter(|category| ids.contains(&category.id))
            .map(|category| (category.id, category.clone()))
            .collect())
    }

    fn goals_for_user(&self, user_id: Uuid) -> Result<Vec<Goal>, CoreError> {
        Ok(self
            .goals
            .iter()
            .filter(|goal| goal.user_id == user_id)
            .cloned()
            .collect())
    }
}
