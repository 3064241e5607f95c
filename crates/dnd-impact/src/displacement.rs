#![forbid(unsafe_code)]

//! Displacement of a single sibling.

use dnd_core::{Area, trace};

use crate::dimension::DraggableDimension;
use crate::droppable::DroppableDimension;
use crate::impact::{Displacement, DisplacementMap};

/// Inputs for [`get_displacement`].
#[derive(Debug, Clone, Copy)]
pub struct DisplacementArgs<'a> {
    /// The sibling being displaced.
    pub draggable: &'a DraggableDimension,
    pub destination: &'a DroppableDimension,
    /// Displacements of the previous frame, built once per frame with
    /// [`DragMovement::displacement_map`](crate::impact::DragMovement::displacement_map).
    pub previous: &'a DisplacementMap<'a>,
    /// Visible region of the destination, `None` when it is clipped away.
    pub viewport: Option<&'a Area>,
}

/// Describe how a sibling that must make room should be displaced.
///
/// A sibling is visible when its page border box center, moved by any
/// scroll of the destination's frame since the drag started, still lies
/// inside `viewport`. It animates only if it was already displaced on the
/// previous frame: a sibling snapping in after a scroll-driven recalculation
/// moves without a transition.
pub fn get_displacement(args: DisplacementArgs<'_>) -> Displacement {
    let DisplacementArgs {
        draggable,
        destination,
        previous,
        viewport,
    } = args;

    let id = draggable.id();
    let center = match destination.closest_scrollable() {
        Some(scrollable) => draggable.page.border_box.center + scrollable.scroll.diff.displacement,
        None => draggable.page.border_box.center,
    };
    let is_visible = viewport.is_some_and(|viewport| viewport.contains(center));
    let should_animate = previous.contains_key(id);

    trace!(
        draggable_id = %id,
        droppable_id = %destination.id(),
        is_visible,
        should_animate,
        "displacement"
    );

    Displacement {
        draggable_id: id.clone(),
        is_visible,
        should_animate,
    }
}
