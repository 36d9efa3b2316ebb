//! Prioritized savings goals drawn against the household's cumulative pools.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// A savings target funded from either the shared or fun cumulative pool.
///
/// Whether a goal is achieved is always derived per request by the allocator;
/// it is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub kind: GoalKind,
    pub priority: u32,
}

impl Goal {
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        target_amount: f64,
        kind: GoalKind,
        priority: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            target_amount,
            kind,
            priority,
        }
    }

    /// Builds a goal whose target is the sum of its sub-items' amounts.
    pub fn from_item_amounts(
        user_id: Uuid,
        name: impl Into<String>,
        amounts: impl IntoIterator<Item = f64>,
        kind: GoalKind,
        priority: u32,
    ) -> Self {
        let target_amount = amounts.into_iter().sum();
        Self::new(user_id, name, target_amount, kind, priority)
    }
}

impl Identifiable for Goal {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Which cumulative pool a goal is funded from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    #[default]
    Shared,
    Fun,
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalKind::Shared => "shared",
            GoalKind::Fun => "fun",
        };
        f.write_str(label)
    }
}
