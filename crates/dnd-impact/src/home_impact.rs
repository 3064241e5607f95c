#![forbid(unsafe_code)]

//! Impact of a drag within its home list.
//!
//! Every frame the driver passes the dragged item's current page center and
//! the previous frame's impact. The calculator decides which siblings the
//! item has moved over, in which order they are displaced, and which slot a
//! drop would land in.
//!
//! # Invariants
//!
//! 1. The dragged item is never in its own `displaced` list.
//! 2. `displaced` is ordered closest to the current center first.
//! 3. Moving forward past `k` siblings gives `start_index + k`; moving
//!    backward past `k` siblings gives `start_index - k`.
//! 4. The result depends only on the arguments: identical arguments give an
//!    identical impact.
//!
//! # Failure Modes
//!
//! None. `inside_home` must contain `draggable`, and siblings must not
//! overlap it so that moving backward never displaces more siblings than
//! precede it. The driver guarantees both; debug builds assert them.

use dnd_core::{Area, Position, debug, trace_span};

use crate::dimension::DraggableDimension;
use crate::displacement::{DisplacementArgs, get_displacement};
use crate::droppable::{DroppableDimension, clip};
use crate::impact::{Displacement, DragImpact, DragMovement, DraggableLocation};
use crate::viewport::Viewport;

/// Inputs for [`in_home_list`].
#[derive(Debug, Clone, Copy)]
pub struct HomeImpactArgs<'a> {
    /// Current page-space center of the dragged item.
    pub page_center: Position,
    pub draggable: &'a DraggableDimension,
    pub home: &'a DroppableDimension,
    /// Every draggable in `home`, in list order, including `draggable`.
    pub inside_home: &'a [DraggableDimension],
    pub previous_impact: &'a DragImpact,
    pub viewport: &'a Viewport,
}

/// Compute the impact of dragging `draggable` within its home list.
pub fn in_home_list(args: HomeImpactArgs<'_>) -> DragImpact {
    let HomeImpactArgs {
        page_center,
        draggable,
        home,
        inside_home,
        previous_impact,
        viewport,
    } = args;

    let _span = trace_span!(
        "dnd.home_impact",
        droppable_id = %home.id(),
        draggable_id = %draggable.id()
    )
    .entered();

    let axis = home.axis;
    let line = axis.line();
    let original_center = draggable.page.border_box.center;
    let current_center = home.with_droppable_scroll(page_center);

    // Border box centers, not margins, so items move on visible edges.
    let is_beyond_start_position = current_center.get(line) - original_center.get(line) > 0.0;

    let amount = Position::patch(line, draggable.client.margin_box.size(axis.size()));

    let visible = visible_region(home, viewport);
    let previous = previous_impact.movement.displacement_map();

    let mut displaced: Vec<Displacement> = inside_home
        .iter()
        .filter(|child| child.id() != draggable.id())
        .filter(|child| {
            let area = &child.page.border_box;
            if is_beyond_start_position {
                // Must start ahead of the dragged item and have been moved over.
                if area.center.get(line) < original_center.get(line) {
                    return false;
                }
                return current_center.get(line) > area.edge(axis.start());
            }
            // Must start behind the dragged item and have been moved over.
            if original_center.get(line) < area.center.get(line) {
                return false;
            }
            current_center.get(line) < area.edge(axis.end())
        })
        .map(|child| {
            get_displacement(DisplacementArgs {
                draggable: child,
                destination: home,
                previous: &previous,
                viewport: visible.as_ref(),
            })
        })
        .collect();

    // Closest impacted item first.
    if is_beyond_start_position {
        displaced.reverse();
    }

    let start_index = inside_home
        .iter()
        .position(|child| child.id() == draggable.id());
    debug_assert!(
        start_index.is_some(),
        "dragged item must be inside its home list"
    );
    let start_index = start_index.unwrap_or_default();

    let index = match (displaced.len(), is_beyond_start_position) {
        (0, _) => start_index,
        (moved, true) => start_index + moved,
        (moved, false) => {
            debug_assert!(
                moved <= start_index,
                "more siblings displaced backward than precede the dragged item"
            );
            start_index.saturating_sub(moved)
        }
    };

    debug!(
        forward = is_beyond_start_position,
        displaced = displaced.len(),
        index,
        "home impact"
    );

    DragImpact {
        movement: DragMovement {
            amount,
            displaced,
            is_beyond_start_position,
        },
        direction: Some(axis.direction()),
        destination: Some(DraggableLocation {
            droppable_id: home.id().clone(),
            index,
        }),
    }
}

/// Part of `home` visible on screen: its clipped subject within the window.
fn visible_region(home: &DroppableDimension, viewport: &Viewport) -> Option<Area> {
    home.viewport
        .clipped
        .and_then(|clipped| clip(&viewport.subject, &clipped))
}
