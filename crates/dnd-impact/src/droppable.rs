#![forbid(unsafe_code)]

//! Droppable dimension records and their scroll lifecycle.
//!
//! A [`DroppableDimension`] is built once when a container is registered for
//! a drag. If the container sits inside a scroll container (its *frame*),
//! the record also tracks the frame's scroll and the part of the container
//! that is actually visible through the frame.
//!
//! # Invariants
//!
//! 1. `viewport.clipped` is `None` only when the subject and the frame do
//!    not overlap with positive width and height.
//! 2. Without a frame, or when `should_clip_subject` is false,
//!    `viewport.clipped == Some(viewport.subject)`.
//! 3. `scroll.max` is fixed at construction; `scroll.current` may exceed it.
//! 4. [`scroll_droppable`] derives the new subject from the unscrolled page
//!    border box, so repeated scrolls never accumulate error.
//! 5. [`scroll_droppable`] never mutates its input.
//!
//! # Failure Modes
//!
//! Scrolling a droppable without a frame returns
//! [`DndError::InvalidState`].

use dnd_core::{Area, Axis, BoxModel, BoxSpec, Direction, Position, create_box};
use dnd_core::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::dimension::{DroppableDescriptor, DroppableId};
use crate::error::DndError;

/// Change in frame scroll since the drag started.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollDiff {
    /// `current - initial`.
    pub value: Position,
    /// `-value`: how far content already on screen has moved.
    pub displacement: Position,
}

/// Scroll state of a droppable's frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub initial: Position,
    pub current: Position,
    /// Greatest offset the original content allows.
    pub max: Position,
    pub diff: ScrollDiff,
}

/// The closest scroll container of a droppable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scrollable {
    /// Page-space border box of the scroll container.
    pub frame: Area,
    pub should_clip_subject: bool,
    pub scroll: ScrollState,
}

/// Visible geometry of a droppable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroppableViewport {
    pub closest_scrollable: Option<Scrollable>,
    /// Page border box, moved by any frame scroll since the drag started.
    pub subject: Area,
    /// `subject` clipped to the frame, `None` when nothing is visible.
    pub clipped: Option<Area>,
}

/// Geometry record of a droppable container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppableDimension {
    pub descriptor: DroppableDescriptor,
    pub is_enabled: bool,
    pub axis: Axis,
    pub client: BoxModel,
    pub page: BoxModel,
    pub viewport: DroppableViewport,
}

impl DroppableDimension {
    #[inline]
    pub fn id(&self) -> &DroppableId {
        &self.descriptor.id
    }

    #[inline]
    pub fn closest_scrollable(&self) -> Option<&Scrollable> {
        self.viewport.closest_scrollable.as_ref()
    }

    /// Translate a page position into the droppable's coordinate space at
    /// drag start, compensating for frame scroll since then.
    pub fn with_droppable_scroll(&self, point: Position) -> Position {
        match self.closest_scrollable() {
            Some(scrollable) => point + scrollable.scroll.diff.value,
            None => point,
        }
    }
}

/// Measurements of a droppable's closest scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestScrollableArgs {
    pub client: BoxModel,
    pub page: BoxModel,
    pub scroll_width: f64,
    pub scroll_height: f64,
    /// Scroll offset at drag start.
    pub scroll: Position,
    pub should_clip_subject: bool,
}

/// Inputs for [`droppable_dimension`].
#[derive(Debug, Clone, PartialEq)]
pub struct DroppableArgs {
    pub descriptor: DroppableDescriptor,
    pub is_enabled: bool,
    pub client: BoxModel,
    pub page: BoxModel,
    pub direction: Direction,
    pub closest: Option<ClosestScrollableArgs>,
}

impl DroppableArgs {
    /// An enabled vertical droppable whose client and page boxes are both
    /// `border_box`, with no frame.
    pub fn from_border_box(descriptor: DroppableDescriptor, border_box: Area) -> Self {
        let model = create_box(BoxSpec::new(border_box));
        Self {
            descriptor,
            is_enabled: true,
            client: model,
            page: model,
            direction: Direction::Vertical,
            closest: None,
        }
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    #[must_use]
    pub fn closest(mut self, closest: ClosestScrollableArgs) -> Self {
        self.closest = Some(closest);
        self
    }
}

/// Content and frame sizes for [`max_scroll`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxScrollArgs {
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub width: f64,
    pub height: f64,
}

/// Greatest scroll offset on each axis, never negative.
pub fn max_scroll(args: MaxScrollArgs) -> Position {
    Position::new(
        (args.scroll_width - args.width).max(0.0),
        (args.scroll_height - args.height).max(0.0),
    )
}

/// Intersect `subject` with `frame`.
///
/// Returns `None` unless the overlap has positive width and height: a subject
/// outside the frame on any single side, or only touching its edge, is not
/// visible at all.
pub fn clip(frame: &Area, subject: &Area) -> Option<Area> {
    let result = Area::from_edges(
        frame.top.max(subject.top),
        frame.right.min(subject.right),
        frame.bottom.min(subject.bottom),
        frame.left.max(subject.left),
    );

    if result.width <= 0.0 || result.height <= 0.0 {
        return None;
    }
    Some(result)
}

fn clip_subject(scrollable: Option<&Scrollable>, subject: Area) -> Option<Area> {
    match scrollable {
        Some(scrollable) if scrollable.should_clip_subject => clip(&scrollable.frame, &subject),
        _ => Some(subject),
    }
}

/// Build a droppable dimension from its measured boxes.
pub fn droppable_dimension(args: DroppableArgs) -> DroppableDimension {
    let DroppableArgs {
        descriptor,
        is_enabled,
        client,
        page,
        direction,
        closest,
    } = args;

    let closest_scrollable = closest.map(|closest| {
        let frame = closest.page.border_box;
        Scrollable {
            frame,
            should_clip_subject: closest.should_clip_subject,
            scroll: ScrollState {
                initial: closest.scroll,
                current: closest.scroll,
                max: max_scroll(MaxScrollArgs {
                    scroll_width: closest.scroll_width,
                    scroll_height: closest.scroll_height,
                    width: frame.width,
                    height: frame.height,
                }),
                diff: ScrollDiff::default(),
            },
        }
    });

    let subject = page.border_box;
    let clipped = clip_subject(closest_scrollable.as_ref(), subject);

    DroppableDimension {
        descriptor,
        is_enabled,
        axis: Axis::from(direction),
        client,
        page,
        viewport: DroppableViewport {
            closest_scrollable,
            subject,
            clipped,
        },
    }
}

/// Return a copy of `droppable` with its frame scrolled to `new_scroll`.
///
/// `new_scroll` may exceed the frame's max scroll (a foreign placeholder can
/// grow the content mid-drag); `max` is left as measured.
pub fn scroll_droppable(
    droppable: &DroppableDimension,
    new_scroll: Position,
) -> Result<DroppableDimension, DndError> {
    let Some(existing) = droppable.closest_scrollable() else {
        warn!(
            droppable_id = %droppable.id(),
            "scroll on a droppable without a closest scrollable"
        );
        return Err(DndError::InvalidState {
            droppable_id: droppable.id().clone(),
            reason: "cannot scroll a droppable that has no closest scrollable",
        });
    };

    let value = new_scroll - existing.scroll.initial;
    let displacement = -value;
    let closest_scrollable = Scrollable {
        scroll: ScrollState {
            current: new_scroll,
            diff: ScrollDiff {
                value,
                displacement,
            },
            ..existing.scroll
        },
        ..*existing
    };

    let subject = droppable.page.border_box.offset_by_position(displacement);
    let clipped = clip_subject(Some(&closest_scrollable), subject);

    trace!(
        droppable_id = %droppable.id(),
        scroll_x = new_scroll.x,
        scroll_y = new_scroll.y,
        visible = clipped.is_some(),
        "droppable scrolled"
    );

    Ok(DroppableDimension {
        viewport: DroppableViewport {
            closest_scrollable: Some(closest_scrollable),
            subject,
            clipped,
        },
        ..droppable.clone()
    })
}
