//! Tolerance defaults for aggregate sums.
//!
//! Policy
//! - Sums are accumulated in sequence order. Reordering the held shapes may
//!   change the result in the last bits, so comparisons go through `SUM_EPS`.

/// Relative tolerance for comparing perimeter/area sums.
pub const SUM_EPS: f64 = 1e-9;

/// `|a - b| <= SUM_EPS * max(1, |a|, |b|)`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= SUM_EPS * 1f64.max(a.abs()).max(b.abs())
}

/// Upper bound on slots reserved by `ShapeBox::new`; any capacity is accepted.
pub const PREALLOC_LIMIT: usize = 1024;
