#![forbid(unsafe_code)]

//! Errors for droppable geometry operations.

use std::fmt;

use crate::dimension::DroppableId;

/// Failure of a droppable geometry operation.
///
/// Degenerate geometry is not an error: a subject clipped away entirely is
/// represented as `None` and treated as not visible downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DndError {
    /// The operation needs geometric context the dimension does not have.
    InvalidState {
        droppable_id: DroppableId,
        reason: &'static str,
    },
}

impl fmt::Display for DndError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState {
                droppable_id,
                reason,
            } => write!(f, "droppable {droppable_id} is in an invalid state: {reason}"),
        }
    }
}

impl std::error::Error for DndError {}
