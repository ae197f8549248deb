//! Gridlock solves finite-domain logic grid ("zebra") puzzles: several
//! categories of equal size matched into a single bijection across implicit
//! entities, under equality and relative-position clues.
//!
//! The engine keeps a set of candidate association states. Each constraint
//! branches every candidate over its alternatives, conflicted branches are
//! pruned, and survivors are re-stabilized by elimination (deducing any
//! binding whose every other candidate is excluded) before the next
//! constraint applies. Most puzzles collapse to a single state without any
//! exhaustive search.
//!
//! # Core Concepts
//!
//! - **[`Registry`]**: the immutable category/value index of a puzzle, with
//!   dense integer ids.
//! - **[`Solution`]**: one candidate association state, cheap to branch.
//! - **[`Clue`] / [`Constraint`]**: the declarative statement of a rule, and
//!   its resolved, runnable form.
//! - **[`SolverEngine`]**: folds the clue list over the candidate set and
//!   returns the survivors.
//!
//! # Example: Two Friends, Two Drinks
//!
//! ```
//! use gridlock::solver::clue::{Clue, ValueName};
//! use gridlock::solver::engine::SolverEngine;
//! use gridlock::solver::puzzle::Puzzle;
//! use gridlock::solver::registry::Category;
//!
//! let puzzle = Puzzle {
//!     categories: vec![
//!         Category::new("name", ["Alice", "Bob"]),
//!         Category::new("drink", ["tea", "coffee"]),
//!     ],
//!     clues: vec![Clue::same_entity(
//!         ValueName::new("name", "Alice"),
//!         ValueName::new("drink", "coffee"),
//!     )],
//! };
//!
//! let (registry, constraints) = puzzle.compile().unwrap();
//! let (solutions, _stats) = SolverEngine::new().solve(&registry, &constraints).unwrap();
//!
//! assert_eq!(solutions.len(), 1);
//! let alice = registry.value("name", "Alice").unwrap();
//! let coffee = registry.value("drink", "coffee").unwrap();
//! assert!(solutions[0].is_bound(alice, coffee));
//!
//! // Elimination hands Bob the only drink left.
//! let bob = registry.value("name", "Bob").unwrap();
//! let tea = registry.value("drink", "tea").unwrap();
//! assert!(solutions[0].is_bound(bob, tea));
//! ```
//!
//! [`Registry`]: solver::registry::Registry
//! [`Solution`]: solver::solution::Solution
//! [`Clue`]: solver::clue::Clue
//! [`Constraint`]: solver::constraint::Constraint
//! [`SolverEngine`]: solver::engine::SolverEngine

pub mod error;
pub mod puzzles;
pub mod solver;
