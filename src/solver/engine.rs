use std::{collections::HashMap, sync::Arc, time::Instant};

use tracing::debug;

use crate::{
    error::{PuzzleError, Result},
    solver::{constraint::Constraint, registry::Registry, solution::Solution},
};

pub type ConstraintId = usize;

/// Cumulative statistics for one solve run.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub branches_explored: u64,
    pub branches_pruned: u64,
    pub forced_bindings: u64,
    pub surviving_states: usize,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PerConstraintStats {
    pub branches: u64,
    pub pruned: u64,
    pub forced_bindings: u64,
    pub time_spent_micros: u64,
}

/// The main engine for solving a logic grid puzzle.
///
/// The engine folds the ordered constraint list over the candidate-state
/// set: each constraint branches every candidate over its alternatives,
/// conflicted branches are pruned, and survivors are re-stabilized by
/// elimination before the next constraint is applied.
pub struct SolverEngine;

impl SolverEngine {
    /// Creates a new `SolverEngine`.
    pub fn new() -> Self {
        Self
    }

    /// Solves the puzzle described by `registry` and `constraints`.
    ///
    /// Starts from the single reflexive-identity state and applies every
    /// constraint in order. The final candidate set is independent of that
    /// order; keeping the documented order makes diagnostics reproducible.
    ///
    /// # Returns
    ///
    /// * `Ok((states, stats))` if solving ran to completion; an empty list means
    ///   the puzzle is unsatisfiable, more than one means it is
    ///   under-constrained.
    /// * `Err(error)` if a constraint references a value outside the
    ///   registry, which is invalid input rather than a search dead-end.
    pub fn solve(
        &self,
        registry: &Arc<Registry>,
        constraints: &[Constraint],
    ) -> Result<(Vec<Solution>, SearchStats)> {
        for constraint in constraints {
            validate(registry, constraint)?;
        }

        let mut states = vec![Solution::new(registry.clone())];
        let mut stats = SearchStats::default();

        for (constraint_id, constraint) in constraints.iter().enumerate() {
            let start = Instant::now();
            let outcome = constraint.apply(std::mem::take(&mut states));
            states = outcome.states;
            let elapsed = start.elapsed().as_micros() as u64;

            stats.branches_explored += outcome.branches;
            stats.branches_pruned += outcome.pruned;
            stats.forced_bindings += outcome.forced_bindings;
            let entry = stats.constraint_stats.entry(constraint_id).or_default();
            entry.branches += outcome.branches;
            entry.pruned += outcome.pruned;
            entry.forced_bindings += outcome.forced_bindings;
            entry.time_spent_micros += elapsed;

            debug!(
                constraint = constraint_id,
                description = %constraint.descriptor.description,
                branches = outcome.branches,
                pruned = outcome.pruned,
                surviving = states.len(),
                "applied constraint"
            );

            if states.is_empty() {
                debug!("candidate set exhausted, puzzle is unsatisfiable");
                break;
            }
        }

        stats.surviving_states = states.len();
        Ok((states, stats))
    }
}

fn validate(registry: &Registry, constraint: &Constraint) -> Result<()> {
    for alternative in &constraint.alternatives {
        for &(a, b) in &alternative.pairs {
            for reference in [a, b] {
                if !registry.contains(reference) {
                    return Err(PuzzleError::ValueRefOutOfRange {
                        category: reference.category,
                        value: reference.value,
                    }
                    .into());
                }
            }
        }
    }
    Ok(())
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        constraint::{Alternative, ConstraintDescriptor},
        registry::{Category, ValueRef},
    };

    fn registry() -> Arc<Registry> {
        Arc::new(
            Registry::new(vec![
                Category::new("name", ["Alice", "Bob", "Carol"]),
                Category::new("color", ["red", "green", "blue"]),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn single_constraint_yields_one_underconstrained_state() {
        let registry = registry();
        let alice = registry.value("name", "Alice").unwrap();
        let red = registry.value("color", "red").unwrap();
        let constraints = vec![Constraint::same_entity(&registry, alice, red).unwrap()];

        let (states, stats) = SolverEngine::new().solve(&registry, &constraints).unwrap();

        assert_eq!(states.len(), 1);
        assert_eq!(stats.surviving_states, 1);
        assert!(states[0].is_bound(alice, red));
        // Nothing else is deducible from a single binding.
        let bob = registry.value("name", "Bob").unwrap();
        assert_eq!(states[0].lookup(bob, red.category), None);
        assert!(!states[0].is_complete());
    }

    #[test]
    fn contradictory_constraints_report_unsatisfiable() {
        let registry = registry();
        let alice = registry.value("name", "Alice").unwrap();
        let red = registry.value("color", "red").unwrap();
        let blue = registry.value("color", "blue").unwrap();
        let constraints = vec![
            Constraint::same_entity(&registry, alice, red).unwrap(),
            Constraint::same_entity(&registry, alice, blue).unwrap(),
        ];

        let (states, stats) = SolverEngine::new().solve(&registry, &constraints).unwrap();

        assert_eq!(states.len(), 0);
        assert_eq!(stats.surviving_states, 0);
        assert_eq!(stats.branches_pruned, 1);
    }

    #[test]
    fn malformed_constraint_fails_fast() {
        let registry = registry();
        let constraints = vec![Constraint {
            alternatives: vec![Alternative {
                pairs: vec![(
                    ValueRef {
                        category: 0,
                        value: 0,
                    },
                    ValueRef {
                        category: 5,
                        value: 9,
                    },
                )],
            }],
            descriptor: ConstraintDescriptor {
                name: "Bogus".to_string(),
                description: "out of range".to_string(),
            },
        }];

        assert!(SolverEngine::new().solve(&registry, &constraints).is_err());
    }

    #[test]
    fn stats_track_branching_work() {
        let registry = Arc::new(
            Registry::new(vec![
                Category::new("name", ["Alice", "Bob", "Carol"]),
                Category::new("seat", ["left", "middle", "right"]),
            ])
            .unwrap(),
        );
        let seat = registry.category_id("seat").unwrap();
        let alice = registry.value("name", "Alice").unwrap();
        let bob = registry.value("name", "Bob").unwrap();
        let constraints = vec![Constraint::adjacent(&registry, seat, alice, bob).unwrap()];

        let (states, stats) = SolverEngine::new().solve(&registry, &constraints).unwrap();

        assert_eq!(stats.branches_explored, 4);
        assert_eq!(
            stats.branches_explored,
            stats.branches_pruned + states.len() as u64
        );
        assert_eq!(stats.constraint_stats.len(), 1);
    }
}
