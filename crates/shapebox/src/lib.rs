//! Fixed-capacity container for polymorphic 2D shapes.
//!
//! Layout
//! - `shapes`: the closed set of shape variants and the `Measure` trait.
//! - `shapes::rand`: reproducible shape sampler (replay tokens).
//! - `shape_box`: the `ShapeBox` container and its typed errors.
//!
//! API Policy
//! - Single-threaded and synchronous. A `ShapeBox` performs no internal
//!   locking; callers that share one across threads wrap it themselves.

pub mod shape_box;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use shape_box::{BoxError, ErrorKind, Operation, ShapeBox};
pub use shapes::{Circle, Measure, Rectangle, Shape, ShapeKind, Square, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::shape_box::{approx_eq, BoxError, ErrorKind, Operation, ShapeBox, SUM_EPS};
    pub use crate::shapes::rand::{draw_shape, draw_shapes, KindMix, ReplayToken, SampleCfg};
    pub use crate::shapes::{Circle, Measure, Rectangle, Shape, ShapeKind, Square, Triangle};
    pub use nalgebra::Vector2 as Vec2;
}

use nalgebra::Vector2;

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
