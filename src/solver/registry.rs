use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};

pub type CategoryId = usize;
pub type ValueIndex = usize;

/// A puzzle dimension: a name and an ordered list of distinct values.
///
/// Purely descriptive; all behaviour lives in the [`Registry`] built from a
/// set of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub values: Vec<String>,
}

impl Category {
    pub fn new<N, V, I>(name: N, values: I) -> Self
    where
        N: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = V>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A specific (category, value) pair, the atomic unit the engine reasons
/// about. Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueRef {
    pub category: CategoryId,
    pub value: ValueIndex,
}

/// An immutable, validated index over a puzzle's categories.
///
/// Assigns dense integer ids to every category and value once at setup, so
/// the association tables can be plain fixed-size arrays rather than
/// string-keyed maps. Fixed for the lifetime of a solve; there is no global
/// registry, callers pass one explicitly into the solver.
#[derive(Debug)]
pub struct Registry {
    categories: Vec<Category>,
    cardinality: usize,
}

impl Registry {
    /// Builds a registry, validating the puzzle's shape.
    ///
    /// All categories must have the same non-zero number of values, category
    /// names must be distinct, and values must be distinct within their
    /// category.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.len() < 2 {
            return Err(PuzzleError::TooFewCategories(categories.len()).into());
        }
        let cardinality = categories[0].values.len();
        if cardinality == 0 {
            return Err(PuzzleError::EmptyCategory(categories[0].name.clone()).into());
        }
        for (i, category) in categories.iter().enumerate() {
            if category.values.len() != cardinality {
                return Err(PuzzleError::CardinalityMismatch {
                    category: category.name.clone(),
                    actual: category.values.len(),
                    expected: cardinality,
                }
                .into());
            }
            if categories[..i].iter().any(|c| c.name == category.name) {
                return Err(PuzzleError::DuplicateCategory(category.name.clone()).into());
            }
            for (j, value) in category.values.iter().enumerate() {
                if category.values[..j].contains(value) {
                    return Err(PuzzleError::DuplicateValue {
                        category: category.name.clone(),
                        value: value.clone(),
                    }
                    .into());
                }
            }
        }
        Ok(Self {
            categories,
            cardinality,
        })
    }

    /// The number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// The number of values in every category (N).
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Resolves a category name to its dense id.
    pub fn category_id(&self, name: &str) -> Result<CategoryId> {
        self.categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| PuzzleError::UnknownCategory(name.to_string()).into())
    }

    /// Resolves a (category name, value name) pair to a [`ValueRef`].
    pub fn value(&self, category: &str, value: &str) -> Result<ValueRef> {
        let category_id = self.category_id(category)?;
        let index = self.categories[category_id]
            .values
            .iter()
            .position(|v| v == value)
            .ok_or_else(|| PuzzleError::UnknownValue {
                category: category.to_string(),
                value: value.to_string(),
            })?;
        Ok(ValueRef {
            category: category_id,
            value: index,
        })
    }

    /// Whether a reference points inside this registry.
    pub fn contains(&self, reference: ValueRef) -> bool {
        reference.category < self.categories.len() && reference.value < self.cardinality
    }

    pub fn category_name(&self, id: CategoryId) -> &str {
        &self.categories[id].name
    }

    pub fn value_name(&self, reference: ValueRef) -> &str {
        &self.categories[reference.category].values[reference.value]
    }

    /// Renders a reference as `category:value`, for descriptors and logs.
    pub fn display(&self, reference: ValueRef) -> String {
        format!(
            "{}:{}",
            self.category_name(reference.category),
            self.value_name(reference)
        )
    }
}
