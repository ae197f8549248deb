//! Ready-made puzzle statements, usable as examples and as end-to-end tests.

pub mod jindosh;
