#![deny(missing_docs)]
//! This crate renders the exact-cover constraint matrix underlying a
//! Sudoku-like puzzle as a Graphviz DOT document of pinned, colored nodes.

/// The `matrix` module maps candidate placements to the exact-cover matrix
/// columns they satisfy and serializes the matrix as a DOT document.
pub mod matrix;
