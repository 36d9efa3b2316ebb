//! Waterfall allocation of cumulative savings across prioritized goals.

use hearth_domain::{Goal, GoalKind};
use uuid::Uuid;

use crate::store::HouseholdStore;
use crate::trend::TrendService;
use crate::CoreError;

/// Funding outcome for a single goal.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal_id: Uuid,
    pub funded: f64,
    pub achieved: bool,
}

/// Result of allocating the cumulative pools across a goal list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalAllocation {
    pub progress: Vec<GoalProgress>,
    pub achieved_count: usize,
    pub leftover_shared: f64,
    pub leftover_fun: f64,
}

/// Allocates the cumulative shared and fun pools across goals in strict
/// ascending priority order (stable for ties).
///
/// Each goal draws from the wallet matching its kind: it is funded with
/// `min(remaining, target)` and achieved when that covers the target.
/// Consumed funds are never revisited. A goal with a non-positive target is
/// always achieved and consumes nothing.
pub fn allocate(cumulative_shared: f64, cumulative_fun: f64, goals: &[Goal]) -> GoalAllocation {
    let mut ordered: Vec<&Goal> = goals.iter().collect();
    ordered.sort_by_key(|goal| goal.priority);

    let mut remaining_shared = cumulative_shared;
    let mut remaining_fun = cumulative_fun;
    let mut allocation = GoalAllocation::default();

    for goal in ordered {
        let wallet = match goal.kind {
            GoalKind::Shared => &mut remaining_shared,
            GoalKind::Fun => &mut remaining_fun,
        };

        let (funded, achieved) = if goal.target_amount <= 0.0 {
            (0.0, true)
        } else {
            let funded = wallet.min(goal.target_amount);
            (funded, funded >= goal.target_amount)
        };

        *wallet = (*wallet - funded).max(0.0);
        if achieved {
            allocation.achieved_count += 1;
        }
        allocation.progress.push(GoalProgress {
            goal_id: goal.id,
            funded,
            achieved,
        });
    }

    allocation.leftover_shared = remaining_shared;
    allocation.leftover_fun = remaining_fun;
    allocation
}

/// Reassigns priorities densely as 1..=N in the slice's current order.
pub fn renumber_priorities(goals: &mut [Goal]) {
    for (index, goal) in goals.iter_mut().enumerate() {
        goal.priority = index as u32 + 1;
    }
}

/// Evaluates the user's goals against their cumulative savings pools.
pub struct GoalService<'a, S: HouseholdStore> {
    store: &'a S,
}

impl<'a, S: HouseholdStore> GoalService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Runs the allocator over the final point of the user's savings trend.
    pub fn allocation(&self, user_id: Uuid) -> Result<GoalAllocation, CoreError> {
        let trend = TrendService::new(self.store).savings_trend(user_id)?;
        let (cumulative_shared, cumulative_fun) = trend
            .last()
            .map(|point| (point.cumulative_shared, point.cumulative_fun))
            .unwrap_or((0.0, 0.0));
        let goals = self.store.goals_for_user(user_id)?;
        Ok(allocate(cumulative_shared, cumulative_fun, &goals))
    }

    /// How many of the user's goals are currently achieved.
    pub fn goals_achieved(&self, user_id: Uuid) -> Result<usize, CoreError> {
        Ok(self.allocation(user_id)?.achieved_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_goal(name: &str, target: f64, priority: u32) -> Goal {
        Goal::new(Uuid::new_v4(), name, target, GoalKind::Shared, priority)
    }

    #[test]
    fn waterfall_funds_higher_priority_first() {
        let goals = vec![
            shared_goal("Emergency fund", 5_000.0, 1),
            shared_goal("House deposit", 10_000.0, 2),
        ];
        let allocation = allocate(8_000.0, 0.0, &goals);

        assert_eq!(allocation.achieved_count, 1);
        assert_eq!(allocation.progress[0].funded, 5_000.0);
        assert!(allocation.progress[0].achieved);
        assert_eq!(allocation.progress[1].funded, 3_000.0);
        assert!(!allocation.progress[1].achieved);
        assert_eq!(allocation.leftover_shared, 0.0);
    }

    #[test]
    fn priority_order_wins_over_list_order() {
        let second = shared_goal("Second", 4_000.0, 2);
        let first = shared_goal("First", 4_000.0, 1);
        let allocation = allocate(4_000.0, 0.0, &[second.clone(), first.clone()]);

        assert_eq!(allocation.achieved_count, 1);
        let by_first = allocation
            .progress
            .iter()
            .find(|p| p.goal_id == first.id)
            .unwrap();
        assert!(by_first.achieved);
        let by_second = allocation
            .progress
            .iter()
            .find(|p| p.goal_id == second.id)
            .unwrap();
        assert!(!by_second.achieved);
        assert_eq!(by_second.funded, 0.0);
    }

    #[test]
    fn equal_priorities_keep_list_order() {
        let a = shared_goal("A", 3_000.0, 1);
        let b = shared_goal("B", 3_000.0, 1);
        let allocation = allocate(3_000.0, 0.0, &[a.clone(), b]);

        assert_eq!(allocation.progress[0].goal_id, a.id);
        assert!(allocation.progress[0].achieved);
        assert!(!allocation.progress[1].achieved);
    }

    #[test]
    fn wallets_are_independent_per_kind() {
        let goals = vec![
            shared_goal("Shared", 2_000.0, 1),
            Goal::new(Uuid::new_v4(), "Fun", 1_500.0, GoalKind::Fun, 2),
        ];
        let allocation = allocate(2_000.0, 1_000.0, &goals);

        assert_eq!(allocation.achieved_count, 1);
        assert_eq!(allocation.progress[1].funded, 1_000.0);
        assert!(!allocation.progress[1].achieved);
        assert_eq!(allocation.leftover_fun, 0.0);
    }

    #[test]
    fn zero_target_goal_is_achieved_and_consumes_nothing() {
        let goals = vec![
            shared_goal("Free", 0.0, 1),
            shared_goal("Real", 1_000.0, 2),
        ];
        let allocation = allocate(1_000.0, 0.0, &goals);

        assert_eq!(allocation.achieved_count, 2);
        assert_eq!(allocation.progress[0].funded, 0.0);
        assert!(allocation.progress[0].achieved);
        assert!(allocation.progress[1].achieved);
    }

    #[test]
    fn empty_inputs_yield_zero_achieved() {
        assert_eq!(allocate(10_000.0, 10_000.0, &[]).achieved_count, 0);

        let goals = vec![shared_goal("Anything", 500.0, 1)];
        let allocation = allocate(0.0, 0.0, &goals);
        assert_eq!(allocation.achieved_count, 0);
        assert_eq!(allocation.progress[0].funded, 0.0);
    }

    #[test]
    fn wallets_never_go_negative_and_goals_never_overfund() {
        let goals = vec![
            shared_goal("A", 700.0, 1),
            shared_goal("B", 700.0, 2),
            shared_goal("C", 700.0, 3),
        ];
        let allocation = allocate(1_000.0, 0.0, &goals);

        for progress in &allocation.progress {
            assert!(progress.funded <= 700.0);
        }
        assert!(allocation.leftover_shared >= 0.0);
        assert_eq!(
            allocation.progress.iter().map(|p| p.funded).sum::<f64>(),
            1_000.0
        );
    }

    #[test]
    fn renumbering_assigns_dense_ascending_priorities() {
        let mut goals = vec![
            shared_goal("A", 100.0, 7),
            shared_goal("B", 100.0, 3),
            shared_goal("C", 100.0, 9),
        ];
        renumber_priorities(&mut goals);
        let priorities: Vec<u32> = goals.iter().map(|g| g.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3]);
    }
}
