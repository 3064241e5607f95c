#![forbid(unsafe_code)]

//! Droppable geometry and per-frame drag impact for list reordering.
//!
//! # Role
//! A drag driver calls into this crate once per pointer update. It keeps
//! one [`DroppableDimension`] per container (rebuilt with
//! [`scroll_droppable`] whenever the container's frame scrolls) and feeds the
//! previous frame's [`DragImpact`] back into [`in_home_list`] to get the next.
//!
//! Everything here is a pure function of its arguments. Measuring elements,
//! listening for pointer events, and animating siblings belong to the host.

pub mod dimension;
pub mod displacement;
pub mod droppable;
pub mod error;
pub mod home_impact;
pub mod impact;
pub mod viewport;

pub use dimension::{
    DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor, DroppableId,
};
pub use displacement::{DisplacementArgs, get_displacement};
pub use dnd_core::{Area, Axis, BoxModel, BoxSpec, Direction, Position, Spacing};
pub use droppable::{
    ClosestScrollableArgs, DroppableArgs, DroppableDimension, DroppableViewport, MaxScrollArgs,
    ScrollDiff, ScrollState, Scrollable, clip, droppable_dimension, max_scroll, scroll_droppable,
};
pub use error::DndError;
pub use home_impact::{HomeImpactArgs, in_home_list};
pub use impact::{Displacement, DisplacementMap, DragImpact, DragMovement, DraggableLocation};
pub use viewport::Viewport;
