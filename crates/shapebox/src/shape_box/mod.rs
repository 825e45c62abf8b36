//! Fixed-capacity, ordered container of shapes.
//!
//! Purpose
//! - Own up to `capacity` shapes in insertion order and offer indexed
//!   get/extract/replace, aggregate sums, and bulk removal of circles.
//!
//! Capacity accounting
//! - `add_shape` consumes one unit of `remaining`. Extraction and bulk removal
//!   shrink the sequence but never give capacity back, so a box that had shapes
//!   taken out cannot be refilled to its original bound. This asymmetry is the
//!   established behavior; callers that want reusable slots need a fresh box.
//! - Invariant: `len + remaining + removed == capacity`.
//!
//! Representation
//! - A compacting `Vec<Shape>`: removals close the gap, so no empty slot ever
//!   persists and `BoxError::ShapeDoesNotExist` is never produced here.
//!
//! Code cross-refs: `shapes::{Shape, Measure}`, `error::BoxError`

mod cfg;
mod error;

pub use cfg::{approx_eq, PREALLOC_LIMIT, SUM_EPS};
pub use error::{BoxError, ErrorKind, Operation};

use crate::shapes::{Measure, Shape, ShapeKind};

#[derive(Clone, Debug)]
pub struct ShapeBox {
    shapes: Vec<Shape>,
    capacity: usize,
    remaining: usize,
    removed: usize,
}

impl ShapeBox {
    /// Empty box holding at most `capacity` shapes. Storage grows on demand;
    /// at most `PREALLOC_LIMIT` slots are reserved up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity.min(PREALLOC_LIMIT)),
            capacity,
            remaining: capacity,
            removed: 0,
        }
    }

    /// Append `shape`. Fails with `BoxIsFull` (returning the shape inside the
    /// error) once the remaining capacity is used up.
    pub fn add_shape(&mut self, shape: Shape) -> Result<(), BoxError> {
        if self.remaining == 0 {
            tracing::trace!(%shape, capacity = self.capacity, "add_shape rejected: box full");
            return Err(BoxError::BoxIsFull {
                op: Operation::AddShape,
                shape,
            });
        }
        tracing::debug!(%shape, index = self.shapes.len(), "add_shape");
        self.shapes.push(shape);
        self.remaining -= 1;
        self.debug_check();
        Ok(())
    }

    pub fn get_by_index(&self, i: usize) -> Result<&Shape, BoxError> {
        self.check_index(Operation::GetByIndex, i)?;
        Ok(&self.shapes[i])
    }

    /// Remove and return the shape at `i`; later shapes shift one step toward
    /// the front. Capacity is not restored.
    pub fn extract_by_index(&mut self, i: usize) -> Result<Shape, BoxError> {
        self.check_index(Operation::ExtractByIndex, i)?;
        let shape = self.shapes.remove(i);
        self.removed += 1;
        tracing::debug!(%shape, index = i, len = self.shapes.len(), "extract_by_index");
        self.debug_check();
        Ok(shape)
    }

    /// Put `shape` at `i` and return the shape previously there.
    pub fn replace_by_index(&mut self, i: usize, shape: Shape) -> Result<Shape, BoxError> {
        self.check_index(Operation::ReplaceByIndex, i)?;
        let old = std::mem::replace(&mut self.shapes[i], shape);
        tracing::debug!(old = %old, new = %shape, index = i, "replace_by_index");
        Ok(old)
    }

    /// Sum of perimeters in sequence order; `0.0` when empty.
    pub fn sum_perimeter(&self) -> f64 {
        self.shapes.iter().map(Measure::perimeter).sum()
    }

    /// Sum of areas in sequence order; `0.0` when empty.
    pub fn sum_area(&self) -> f64 {
        self.shapes.iter().map(Measure::area).sum()
    }

    /// Remove every circle, keeping the survivors' relative order. Returns the
    /// number removed; fails with `NoCirclesPresent` (box untouched) if none.
    pub fn remove_all_circles(&mut self) -> Result<usize, BoxError> {
        let before = self.shapes.len();
        self.shapes.retain(|s| !s.is_circle());
        let n = before - self.shapes.len();
        if n == 0 {
            tracing::trace!(len = before, "remove_all_circles rejected: no circles");
            return Err(BoxError::NoCirclesPresent {
                op: Operation::RemoveAllCircles,
            });
        }
        self.removed += n;
        tracing::debug!(removed = n, len = self.shapes.len(), "remove_all_circles");
        self.debug_check();
        Ok(n)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Bound fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many more `add_shape` calls can succeed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Shapes taken out by extraction or bulk removal so far.
    #[inline]
    pub fn removed(&self) -> usize {
        self.removed
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn count_kind(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind() == kind).count()
    }

    fn check_index(&self, op: Operation, i: usize) -> Result<(), BoxError> {
        let len = self.shapes.len();
        if i >= len {
            tracing::trace!(op = op.name(), index = i, len, "index out of range");
            return Err(BoxError::IndexOutOfRange { op, index: i, len });
        }
        Ok(())
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert_eq!(
            self.shapes.len() + self.remaining + self.removed,
            self.capacity,
            "capacity accounting drifted"
        );
    }
}

impl<'a> IntoIterator for &'a ShapeBox {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
