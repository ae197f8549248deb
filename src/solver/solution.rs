use std::sync::Arc;

use im::Vector;

use crate::{
    error::AlreadyAssociated,
    solver::registry::{CategoryId, Registry, ValueIndex, ValueRef},
};

/// A single candidate state in the solver's search space.
///
/// A `Solution` records, for every value of every category, which value of
/// each *other* category it is currently bound to, or nothing if that pair
/// is still unresolved. Every value is bound to itself in its own category.
///
/// The table is kept symmetric (if A is bound to B then B is bound to A) and
/// injective per category pair (no two values of one category ever share a
/// partner in another). Violating injectivity is the sole failure mode, and
/// it is how dead-end branches are detected.
///
/// Backed by a persistent vector, so the deep copy taken when a disjunctive
/// constraint branches is cheap.
#[derive(Clone, Debug)]
pub struct Solution {
    registry: Arc<Registry>,
    /// Slot `(category * N + value) * C + target` holds the partner of that
    /// value in category `target`, if resolved.
    bindings: Vector<Option<ValueIndex>>,
}

impl Solution {
    /// Creates a fresh state holding only the reflexive identity bindings.
    pub fn new(registry: Arc<Registry>) -> Self {
        let category_count = registry.category_count();
        let cardinality = registry.cardinality();
        let mut bindings = Vector::new();
        for category in 0..category_count {
            for value in 0..cardinality {
                for target in 0..category_count {
                    bindings.push_back((target == category).then_some(value));
                }
            }
        }
        Self { registry, bindings }
    }

    /// Read-only access to the puzzle's registry, shared across all states.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    fn slot(&self, reference: ValueRef, target: CategoryId) -> usize {
        let category_count = self.registry.category_count();
        let cardinality = self.registry.cardinality();
        (reference.category * cardinality + reference.value) * category_count + target
    }

    /// The value of `target` bound to `a`, or `None` while unresolved.
    pub fn lookup(&self, a: ValueRef, target: CategoryId) -> Option<ValueRef> {
        self.bindings[self.slot(a, target)].map(|value| ValueRef {
            category: target,
            value,
        })
    }

    /// Whether `a` and `b` are recorded as denoting the same entity.
    pub fn is_bound(&self, a: ValueRef, b: ValueRef) -> bool {
        self.lookup(a, b.category) == Some(b)
    }

    /// All values currently known to denote the same entity as `a`,
    /// including `a` itself. At most one per category.
    fn cluster(&self, a: ValueRef) -> Vec<ValueRef> {
        (0..self.registry.category_count())
            .filter_map(|target| self.lookup(a, target))
            .collect()
    }

    /// Records one symmetric binding, without transitive propagation.
    fn bind_pair(&mut self, x: ValueRef, y: ValueRef) -> Result<(), AlreadyAssociated> {
        if x == y {
            return Ok(());
        }
        // Two distinct values of one category can never be the same entity.
        if x.category == y.category {
            return Err(AlreadyAssociated);
        }
        match self.bindings[self.slot(x, y.category)] {
            Some(existing) if existing == y.value => return Ok(()),
            Some(_) => return Err(AlreadyAssociated),
            None => {}
        }
        if let Some(existing) = self.bindings[self.slot(y, x.category)] {
            if existing != x.value {
                return Err(AlreadyAssociated);
            }
        }
        let forward = self.slot(x, y.category);
        self.bindings.set(forward, Some(y.value));
        let backward = self.slot(y, x.category);
        self.bindings.set(backward, Some(x.value));
        Ok(())
    }

    /// Requests that `a` and `b` denote the same entity.
    ///
    /// "Same entity" is an equivalence relation, so the call cross-binds
    /// everything already bound to `a` with everything already bound to `b`.
    /// A conflict with an existing binding yields [`AlreadyAssociated`]; the
    /// state may have been partially extended by then, which is fine because
    /// conflicted branches are discarded wholesale, never retained.
    pub fn associate(&mut self, a: ValueRef, b: ValueRef) -> Result<(), AlreadyAssociated> {
        debug_assert!(self.registry.contains(a) && self.registry.contains(b));
        let left = self.cluster(a);
        let right = self.cluster(b);
        for &x in &left {
            for &y in &right {
                self.bind_pair(x, y)?;
            }
        }
        Ok(())
    }

    /// Whether every value is bound to a partner in every category.
    pub fn is_complete(&self) -> bool {
        self.bindings.iter().all(Option::is_some)
    }

    /// The `from` → `to` mapping, in `from`'s value order, `None` where
    /// still unresolved.
    pub fn projection(&self, from: CategoryId, to: CategoryId) -> Vec<Option<ValueRef>> {
        (0..self.registry.cardinality())
            .map(|value| {
                self.lookup(
                    ValueRef {
                        category: from,
                        value,
                    },
                    to,
                )
            })
            .collect()
    }
}
