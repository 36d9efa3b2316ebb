//! Monthly budgets and the planned line items they own.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, MonthKey};

/// The set of planned line items for one user for one calendar month.
///
/// At most one budget exists per (user, month); the storage layer enforces
/// that invariant before records reach the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub user_id: Uuid,
    pub month: MonthKey,
}

impl Budget {
    pub fn new(user_id: Uuid, month: MonthKey) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            month,
        }
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// A single planned amount within a budget.
///
/// Its contribution to any aggregate is determined solely by the referenced
/// category's kind, the owner slot, and the amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: Uuid,
    pub budget_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub owner_slot: OwnerSlot,
}

impl LineItem {
    pub fn new(
        budget_id: Uuid,
        category_id: Uuid,
        name: impl Into<String>,
        amount: f64,
        owner_slot: OwnerSlot,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            budget_id,
            category_id,
            name: name.into(),
            amount,
            owner_slot,
        }
    }
}

impl Identifiable for LineItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Which household member (or "shared") a line item's amount is attributed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OwnerSlot {
    User1,
    User2,
    Shared,
}

impl fmt::Display for OwnerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OwnerSlot::User1 => "user1",
            OwnerSlot::User2 => "user2",
            OwnerSlot::Shared => "shared",
        };
        f.write_str(label)
    }
}
