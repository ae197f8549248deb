pub mod clue;
pub mod constraint;
pub mod elimination;
pub mod engine;
pub mod puzzle;
pub mod registry;
pub mod solution;
pub mod stats;
