//! Forced-binding deduction by exclusion.
//!
//! For a value `x` still unresolved toward some category, any candidate
//! partner `y` is ruled out when the two already disagree somewhere: some
//! category holds a binding for both, and the bindings differ. When exactly
//! one candidate survives, the pairing is forced. This is the unit-propagation
//! step that lets mostly-disjunctive puzzles resolve without exhaustive
//! branching.

use tracing::debug;

use crate::{
    error::AlreadyAssociated,
    solver::{registry::ValueRef, solution::Solution},
};

/// Runs elimination passes until a pass deduces nothing new.
///
/// Forced pairs found during a pass are applied through
/// [`Solution::associate`] afterwards, which may cascade further bindings and
/// re-arm the next pass. Idempotent at fixpoint: running it again changes
/// nothing and returns zero.
///
/// A conflict while applying a forced pair means the branch is contradictory;
/// the caller discards it. Returns the number of forced pairs applied.
pub fn to_fixpoint(solution: &mut Solution) -> Result<usize, AlreadyAssociated> {
    let mut total = 0;
    loop {
        let forced = forced_pairs(solution);
        if forced.is_empty() {
            break;
        }
        debug!(forced = forced.len(), "applying forced bindings");
        for &(x, y) in &forced {
            solution.associate(x, y)?;
        }
        total += forced.len();
    }
    Ok(total)
}

/// One full scan over all category pairs, collecting every pairing with
/// exactly one surviving candidate. Does not mutate the state; pairs forced
/// by the same pass are applied together by the caller.
fn forced_pairs(solution: &Solution) -> Vec<(ValueRef, ValueRef)> {
    let registry = solution.registry();
    let category_count = registry.category_count();
    let cardinality = registry.cardinality();
    let mut forced = Vec::new();

    for category in 0..category_count {
        for target in 0..category_count {
            if category == target {
                continue;
            }
            for value in 0..cardinality {
                let x = ValueRef { category, value };
                if solution.lookup(x, target).is_some() {
                    continue;
                }
                let mut candidates = (0..cardinality)
                    .map(|v| ValueRef {
                        category: target,
                        value: v,
                    })
                    .filter(|&y| !excluded(solution, x, y));
                if let (Some(only), None) = (candidates.next(), candidates.next()) {
                    forced.push((x, only));
                }
            }
        }
    }
    forced
}

/// `y` is excluded as a partner for `x` when some category already binds
/// both, and to different values.
fn excluded(solution: &Solution, x: ValueRef, y: ValueRef) -> bool {
    (0..solution.registry().category_count()).any(|z| {
        matches!(
            (solution.lookup(x, z), solution.lookup(y, z)),
            (Some(bx), Some(by)) if bx != by
        )
    })
}
