use crate::{
    error::{AlreadyAssociated, PuzzleError, Result},
    solver::{
        elimination,
        registry::{CategoryId, Registry, ValueRef},
        solution::Solution,
    },
};

/// Human-readable identification of a constraint, used by logging and by the
/// stats table.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// One mutually-exclusive way a constraint can be satisfied: a set of pairs
/// that must all be bound together for the alternative to hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    pub pairs: Vec<(ValueRef, ValueRef)>,
}

/// A disjunctive constraint: an ordered set of [`Alternative`]s.
///
/// Built once from the puzzle statement and never mutated during solving.
/// Applying a constraint branches every candidate state into one branch per
/// alternative and keeps the branches that survive.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub alternatives: Vec<Alternative>,
    pub descriptor: ConstraintDescriptor,
}

/// The result of applying one constraint to the candidate-state set.
#[derive(Debug)]
pub struct ApplyOutcome {
    /// Surviving branches, input-state-major, alternative-minor.
    pub states: Vec<Solution>,
    pub branches: u64,
    pub pruned: u64,
    pub forced_bindings: u64,
}

impl Constraint {
    /// A single-alternative constraint binding `a` and `b` to one entity.
    pub fn same_entity(registry: &Registry, a: ValueRef, b: ValueRef) -> Result<Self> {
        check_ref(registry, a)?;
        check_ref(registry, b)?;
        Ok(Self {
            alternatives: vec![Alternative { pairs: vec![(a, b)] }],
            descriptor: ConstraintDescriptor {
                name: "SameEntity".to_string(),
                description: format!("{} == {}", registry.display(a), registry.display(b)),
            },
        })
    }

    /// `a` sits immediately before `b` in the ordered `positions` category:
    /// one alternative per adjacent position pair, N-1 in total.
    pub fn left_of(
        registry: &Registry,
        positions: CategoryId,
        a: ValueRef,
        b: ValueRef,
    ) -> Result<Self> {
        check_ref(registry, a)?;
        check_ref(registry, b)?;
        if positions >= registry.category_count() {
            return Err(PuzzleError::CategoryOutOfRange(positions).into());
        }
        Ok(Self {
            alternatives: adjacency_alternatives(registry, positions, a, b),
            descriptor: ConstraintDescriptor {
                name: "LeftOf".to_string(),
                description: format!(
                    "{} directly before {} in {}",
                    registry.display(a),
                    registry.display(b),
                    registry.category_name(positions)
                ),
            },
        })
    }

    /// `a` and `b` occupy adjacent positions, in either order: the
    /// alternatives of `left_of(a, b)` followed by those of `left_of(b, a)`,
    /// 2(N-1) in total.
    pub fn adjacent(
        registry: &Registry,
        positions: CategoryId,
        a: ValueRef,
        b: ValueRef,
    ) -> Result<Self> {
        check_ref(registry, a)?;
        check_ref(registry, b)?;
        if positions >= registry.category_count() {
            return Err(PuzzleError::CategoryOutOfRange(positions).into());
        }
        let mut alternatives = adjacency_alternatives(registry, positions, a, b);
        alternatives.extend(adjacency_alternatives(registry, positions, b, a));
        Ok(Self {
            alternatives,
            descriptor: ConstraintDescriptor {
                name: "Adjacent".to_string(),
                description: format!(
                    "{} next to {} in {}",
                    registry.display(a),
                    registry.display(b),
                    registry.category_name(positions)
                ),
            },
        })
    }

    /// Branches every candidate state over this constraint's alternatives.
    ///
    /// Each branch is an independent copy of the state (the last alternative
    /// reuses the original in place, which is purely an allocation saving);
    /// the alternative's pairs are associated in order, the branch is dropped
    /// on the first conflict, and surviving branches are re-stabilized by
    /// elimination before being kept. An empty result means the puzzle is
    /// unsatisfiable under the constraints applied so far, a valid outcome
    /// rather than an error.
    pub fn apply(&self, states: Vec<Solution>) -> ApplyOutcome {
        let mut outcome = ApplyOutcome {
            states: Vec::new(),
            branches: 0,
            pruned: 0,
            forced_bindings: 0,
        };
        for state in states {
            if let Some((last, rest)) = self.alternatives.split_last() {
                for alternative in rest {
                    self.explore(state.clone(), alternative, &mut outcome);
                }
                self.explore(state, last, &mut outcome);
            }
        }
        outcome
    }

    fn explore(&self, mut branch: Solution, alternative: &Alternative, outcome: &mut ApplyOutcome) {
        outcome.branches += 1;
        for &(a, b) in &alternative.pairs {
            if branch.associate(a, b).is_err() {
                outcome.pruned += 1;
                return;
            }
        }
        match elimination::to_fixpoint(&mut branch) {
            Ok(forced) => {
                outcome.forced_bindings += forced as u64;
                outcome.states.push(branch);
            }
            Err(AlreadyAssociated) => outcome.pruned += 1,
        }
    }
}

fn check_ref(registry: &Registry, reference: ValueRef) -> Result<()> {
    if registry.contains(reference) {
        Ok(())
    } else {
        Err(PuzzleError::ValueRefOutOfRange {
            category: reference.category,
            value: reference.value,
        }
        .into())
    }
}

fn adjacency_alternatives(
    registry: &Registry,
    positions: CategoryId,
    a: ValueRef,
    b: ValueRef,
) -> Vec<Alternative> {
    (0..registry.cardinality() - 1)
        .map(|i| Alternative {
            pairs: vec![
                (
                    a,
                    ValueRef {
                        category: positions,
                        value: i,
                    },
                ),
                (
                    b,
                    ValueRef {
                        category: positions,
                        value: i + 1,
                    },
                ),
            ],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::registry::Category;

    fn registry() -> Arc<Registry> {
        Arc::new(
            Registry::new(vec![
                Category::new("name", ["Alice", "Bob", "Carol"]),
                Category::new("seat", ["left", "middle", "right"]),
                Category::new("color", ["red", "green", "blue"]),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn same_entity_has_a_single_alternative() {
        let registry = registry();
        let alice = registry.value("name", "Alice").unwrap();
        let red = registry.value("color", "red").unwrap();

        let constraint = Constraint::same_entity(&registry, alice, red).unwrap();

        assert_eq!(constraint.alternatives.len(), 1);
        assert_eq!(constraint.alternatives[0].pairs, vec![(alice, red)]);
    }

    #[test]
    fn left_of_enumerates_adjacent_position_pairs() {
        let registry = registry();
        let seat = registry.category_id("seat").unwrap();
        let alice = registry.value("name", "Alice").unwrap();
        let bob = registry.value("name", "Bob").unwrap();

        let constraint = Constraint::left_of(&registry, seat, alice, bob).unwrap();
        assert_eq!(constraint.alternatives.len(), 2);

        let adjacent = Constraint::adjacent(&registry, seat, alice, bob).unwrap();
        assert_eq!(adjacent.alternatives.len(), 4);
    }

    #[test]
    fn apply_branches_per_alternative_in_order() {
        let registry = registry();
        let seat = registry.category_id("seat").unwrap();
        let alice = registry.value("name", "Alice").unwrap();
        let bob = registry.value("name", "Bob").unwrap();
        let left = registry.value("seat", "left").unwrap();
        let middle = registry.value("seat", "middle").unwrap();

        let constraint = Constraint::left_of(&registry, seat, alice, bob).unwrap();
        let outcome = constraint.apply(vec![Solution::new(registry.clone())]);

        assert_eq!(outcome.branches, 2);
        assert_eq!(outcome.pruned, 0);
        assert_eq!(outcome.states.len(), 2);
        // Deterministic alternative-minor order.
        assert!(outcome.states[0].is_bound(alice, left));
        assert!(outcome.states[1].is_bound(alice, middle));
    }

    #[test]
    fn apply_drops_contradicted_branches() {
        let registry = registry();
        let seat = registry.category_id("seat").unwrap();
        let alice = registry.value("name", "Alice").unwrap();
        let bob = registry.value("name", "Bob").unwrap();
        let left = registry.value("seat", "left").unwrap();

        let mut pinned = Solution::new(registry.clone());
        pinned.associate(alice, left).unwrap();

        // Alice is leftmost, so only the first alternative can hold.
        let constraint = Constraint::left_of(&registry, seat, alice, bob).unwrap();
        let outcome = constraint.apply(vec![pinned]);

        assert_eq!(outcome.branches, 2);
        assert_eq!(outcome.pruned, 1);
        assert_eq!(outcome.states.len(), 1);
        let middle = registry.value("seat", "middle").unwrap();
        let right = registry.value("seat", "right").unwrap();
        assert!(outcome.states[0].is_bound(bob, middle));
        // Elimination hands Carol the leftover seat.
        let carol = registry.value("name", "Carol").unwrap();
        assert!(outcome.states[0].is_bound(carol, right));
    }

    #[test]
    fn surviving_branches_are_restabilized_by_elimination() {
        let registry = registry();
        let alice = registry.value("name", "Alice").unwrap();
        let bob = registry.value("name", "Bob").unwrap();
        let carol = registry.value("name", "Carol").unwrap();
        let red = registry.value("color", "red").unwrap();
        let green = registry.value("color", "green").unwrap();
        let blue = registry.value("color", "blue").unwrap();

        let mut state = Solution::new(registry.clone());
        state.associate(alice, red).unwrap();

        let constraint = Constraint::same_entity(&registry, bob, green).unwrap();
        let outcome = constraint.apply(vec![state]);

        assert_eq!(outcome.states.len(), 1);
        assert!(outcome.forced_bindings >= 1);
        assert!(outcome.states[0].is_bound(carol, blue));
    }

    #[test]
    fn contradictory_constraints_empty_the_candidate_set() {
        let registry = registry();
        let alice = registry.value("name", "Alice").unwrap();
        let red = registry.value("color", "red").unwrap();
        let blue = registry.value("color", "blue").unwrap();

        let first = Constraint::same_entity(&registry, alice, red).unwrap();
        let second = Constraint::same_entity(&registry, alice, blue).unwrap();

        let states = first.apply(vec![Solution::new(registry.clone())]).states;
        let outcome = second.apply(states);

        assert_eq!(outcome.states.len(), 0);
        assert_eq!(outcome.pruned, 1);
    }

    #[test]
    fn builders_reject_out_of_range_references() {
        let registry = registry();
        let bogus = ValueRef {
            category: 7,
            value: 0,
        };
        let alice = registry.value("name", "Alice").unwrap();

        assert!(Constraint::same_entity(&registry, alice, bogus).is_err());
        assert!(Constraint::left_of(&registry, 9, alice, alice).is_err());
    }
}
