//! Domain types representing budgeting categories.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// Classifies budget line items for aggregation and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(user_id: Uuid, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            kind,
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// The closed set of category classifications recognized by the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
    Savings,
    Fun,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryKind::Income => "income",
            CategoryKind::Expense => "expense",
            CategoryKind::Savings => "savings",
            CategoryKind::Fun => "fun",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_to_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&CategoryKind::Income).unwrap(),
            "\"income\""
        );
        assert_eq!(serde_json::to_string(&CategoryKind::Fun).unwrap(), "\"fun\"");
        let kind: CategoryKind = serde_json::from_str("\"savings\"").unwrap();
        assert_eq!(kind, CategoryKind::Savings);
    }
}
