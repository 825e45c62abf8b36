//! Shape variants (closed set) and their measurements.
//!
//! Purpose
//! - Provide a small, closed `Shape` enum so the container can identify a
//!   variant (e.g. circles for bulk removal) by matching, not by inspection.
//! - Each variant is a plain `Copy` struct implementing `Measure`.
//!
//! Code cross-refs: `ShapeBox`, `rand::draw_shape`

pub mod rand;
mod types;

pub use types::{Circle, Measure, Rectangle, Shape, ShapeKind, Square, Triangle};

#[cfg(test)]
mod tests;
