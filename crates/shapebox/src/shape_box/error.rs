//! Typed failures of `ShapeBox` operations.
//!
//! Every error names the operation it came from and, where it applies, the
//! index or shape involved. Messages read
//! `<Operation>: <action> ...: <reason>`.

use std::fmt;

use thiserror::Error;

use crate::shapes::Shape;

/// Operation that produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    AddShape,
    GetByIndex,
    ExtractByIndex,
    ReplaceByIndex,
    RemoveAllCircles,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::AddShape => "AddShape",
            Operation::GetByIndex => "GetByIndex",
            Operation::ExtractByIndex => "ExtractByIndex",
            Operation::ReplaceByIndex => "ReplaceByIndex",
            Operation::RemoveAllCircles => "RemoveAllCircles",
        }
    }

    /// Gerund used in messages ("getting shape by index 3 ...").
    pub fn action(self) -> &'static str {
        match self {
            Operation::AddShape => "adding",
            Operation::GetByIndex => "getting",
            Operation::ExtractByIndex => "extracting",
            Operation::ReplaceByIndex => "replacing",
            Operation::RemoveAllCircles => "removing",
        }
    }

    /// Message of an out-of-range failure at `index`. Takes any displayable
    /// index so callers holding a signed value report it unchanged.
    pub fn index_out_of_range(self, index: impl fmt::Display) -> String {
        format!(
            "{self}: {} shape by index {index} from the box: index out of range",
            self.action()
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error category, for callers that branch on the kind only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    BoxIsFull,
    IndexOutOfRange,
    ShapeDoesNotExist,
    NoCirclesPresent,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum BoxError {
    /// No remaining capacity; the rejected shape is handed back.
    #[error("{op}: {action} shape {shape} to the box: box is full", action = .op.action())]
    BoxIsFull { op: Operation, shape: Shape },
    /// Index outside `[0, len)`.
    #[error("{}", .op.index_out_of_range(.index))]
    IndexOutOfRange {
        op: Operation,
        index: usize,
        len: usize,
    },
    /// Index in range but the slot holds no shape.
    ///
    /// The box compacts on every removal, so this is not produced by
    /// `ShapeBox`; it stays in the set so callers match on the full contract.
    #[error("{op}: {action} shape by index {index} from the box: shape does not exist", action = .op.action())]
    ShapeDoesNotExist { op: Operation, index: usize },
    /// Bulk circle removal found nothing to remove.
    #[error("{op}: {action} all circles from the box: there is no circles in the box", action = .op.action())]
    NoCirclesPresent { op: Operation },
}

impl BoxError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoxError::BoxIsFull { .. } => ErrorKind::BoxIsFull,
            BoxError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            BoxError::ShapeDoesNotExist { .. } => ErrorKind::ShapeDoesNotExist,
            BoxError::NoCirclesPresent { .. } => ErrorKind::NoCirclesPresent,
        }
    }

    pub fn operation(&self) -> Operation {
        match *self {
            BoxError::BoxIsFull { op, .. }
            | BoxError::IndexOutOfRange { op, .. }
            | BoxError::ShapeDoesNotExist { op, .. }
            | BoxError::NoCirclesPresent { op } => op,
        }
    }

    /// The shape a failed `add_shape` was called with.
    pub fn into_shape(self) -> Option<Shape> {
        match self {
            BoxError::BoxIsFull { shape, .. } => Some(shape),
            _ => None,
        }
    }
}
