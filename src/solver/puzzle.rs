use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    error::{PuzzleError, Result},
    solver::{
        clue::Clue,
        constraint::Constraint,
        registry::{Category, Registry},
    },
};

/// The external input unit: the category list plus the ordered clue list.
///
/// The engine itself exposes no file format; a `Puzzle` is simply the
/// serializable statement a caller hands in, compiled into a registry and
/// runnable constraints before solving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub categories: Vec<Category>,
    pub clues: Vec<Clue>,
}

impl Puzzle {
    /// Parses a puzzle statement from JSON.
    pub fn from_json(input: &str) -> Result<Self> {
        let puzzle = serde_json::from_str(input).map_err(PuzzleError::from)?;
        Ok(puzzle)
    }

    /// Validates the statement and resolves every clue, failing fast on a
    /// malformed category set or a clue referencing unknown names.
    pub fn compile(&self) -> Result<(Arc<Registry>, Vec<Constraint>)> {
        let registry = Arc::new(Registry::new(self.categories.clone())?);
        let constraints = self
            .clues
            .iter()
            .map(|clue| clue.build(&registry))
            .collect::<Result<Vec<_>>>()?;
        Ok((registry, constraints))
    }
}
