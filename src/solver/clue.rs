use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    solver::{constraint::Constraint, registry::Registry},
};

/// A (category name, value name) pair as it appears in a puzzle statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueName {
    pub category: String,
    pub value: String,
}

impl ValueName {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }
}

/// A declarative clue from the puzzle statement, referencing categories and
/// values by name.
///
/// Clues are the external, serializable form of a constraint; [`Clue::build`]
/// resolves the names against a [`Registry`] into a runnable [`Constraint`],
/// failing fast on anything unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Clue {
    /// `a` and `b` describe the same entity.
    SameEntity { a: ValueName, b: ValueName },
    /// `a` sits immediately before `b` in the ordered `positions` category.
    LeftOf {
        positions: String,
        a: ValueName,
        b: ValueName,
    },
    /// `a` and `b` occupy adjacent positions, in either order.
    Adjacent {
        positions: String,
        a: ValueName,
        b: ValueName,
    },
}

impl Clue {
    pub fn same_entity(a: ValueName, b: ValueName) -> Self {
        Clue::SameEntity { a, b }
    }

    pub fn left_of(positions: impl Into<String>, a: ValueName, b: ValueName) -> Self {
        Clue::LeftOf {
            positions: positions.into(),
            a,
            b,
        }
    }

    pub fn adjacent(positions: impl Into<String>, a: ValueName, b: ValueName) -> Self {
        Clue::Adjacent {
            positions: positions.into(),
            a,
            b,
        }
    }

    /// Resolves this clue into a runnable constraint.
    pub fn build(&self, registry: &Registry) -> Result<Constraint> {
        match self {
            Clue::SameEntity { a, b } => {
                let a = registry.value(&a.category, &a.value)?;
                let b = registry.value(&b.category, &b.value)?;
                Constraint::same_entity(registry, a, b)
            }
            Clue::LeftOf { positions, a, b } => {
                let positions = registry.category_id(positions)?;
                let a = registry.value(&a.category, &a.value)?;
                let b = registry.value(&b.category, &b.value)?;
                Constraint::left_of(registry, positions, a, b)
            }
            Clue::Adjacent { positions, a, b } => {
                let positions = registry.category_id(positions)?;
                let a = registry.value(&a.category, &a.value)?;
                let b = registry.value(&b.category, &b.value)?;
                Constraint::adjacent(registry, positions, a, b)
            }
        }
    }
}
