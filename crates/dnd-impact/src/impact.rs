#![forbid(unsafe_code)]

//! Per-frame drag impact records.

use std::collections::HashMap;

use dnd_core::{Direction, Position};
use serde::{Deserialize, Serialize};

use crate::dimension::{DraggableId, DroppableId};

/// Whether one sibling is pushed aside, and how the renderer should move it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Displacement {
    pub draggable_id: DraggableId,
    pub is_visible: bool,
    pub should_animate: bool,
}

/// How siblings move in response to the drag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DragMovement {
    /// Shift applied to every displaced sibling: the dragged item's margin
    /// box size on the main axis, zero on the cross axis.
    pub amount: Position,
    /// Displaced siblings, closest to the dragged item first.
    pub displaced: Vec<Displacement>,
    pub is_beyond_start_position: bool,
}

impl DragMovement {
    /// Previous displacement of `id`, if it was displaced.
    pub fn find(&self, id: &DraggableId) -> Option<&Displacement> {
        self.displaced
            .iter()
            .find(|displacement| &displacement.draggable_id == id)
    }

    /// Index the displaced siblings by id for per-frame lookups.
    pub fn displacement_map(&self) -> DisplacementMap<'_> {
        self.displaced
            .iter()
            .map(|displacement| (&displacement.draggable_id, displacement))
            .collect()
    }
}

/// Displacements of one frame keyed by draggable id.
pub type DisplacementMap<'a> = HashMap<&'a DraggableId, &'a Displacement>;

/// Slot a drop would land in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraggableLocation {
    pub droppable_id: DroppableId,
    pub index: usize,
}

/// The complete effect of a drag on one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DragImpact {
    pub movement: DragMovement,
    pub direction: Option<Direction>,
    pub destination: Option<DraggableLocation>,
}

impl DragImpact {
    /// Nothing displaced and no destination: the impact before the first
    /// move of a drag, or while over no droppable.
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Displacement, DragImpact, DragMovement};
    use crate::dimension::DraggableId;

    #[test]
    fn none_is_empty() {
        let impact = DragImpact::none();
        assert!(impact.movement.displaced.is_empty());
        assert!(impact.destination.is_none());
        assert!(impact.direction.is_none());
        assert!(!impact.movement.is_beyond_start_position);
    }

    #[test]
    fn find_looks_up_by_id() {
        let movement = DragMovement {
            displaced: vec![Displacement {
                draggable_id: DraggableId::from("b"),
                is_visible: true,
                should_animate: true,
            }],
            ..Default::default()
        };
        assert!(movement.find(&DraggableId::from("b")).is_some());
        assert!(movement.find(&DraggableId::from("a")).is_none());
    }

    #[test]
    fn displacement_map_indexes_every_sibling() {
        let movement = DragMovement {
            displaced: ["b", "c"]
                .into_iter()
                .map(|id| Displacement {
                    draggable_id: DraggableId::from(id),
                    is_visible: id == "b",
                    should_animate: false,
                })
                .collect(),
            ..Default::default()
        };
        let map = movement.displacement_map();
        assert_eq!(map.len(), 2);
        assert!(map[&DraggableId::from("b")].is_visible);
        assert!(!map[&DraggableId::from("c")].is_visible);
        assert!(!map.contains_key(&DraggableId::from("a")));
        assert!(DragImpact::none().movement.displacement_map().is_empty());
    }
}
