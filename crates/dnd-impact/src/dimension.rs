#![forbid(unsafe_code)]

//! Identifiers, descriptors, and draggable dimension snapshots.

use std::fmt;

use dnd_core::{BoxModel, Position, with_scroll};
use serde::{Deserialize, Serialize};

/// Stable identifier for a draggable item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraggableId(String);

/// Stable identifier for a droppable container.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DroppableId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(DraggableId);
string_id!(DroppableId);

/// Where a draggable lives when the drag starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraggableDescriptor {
    pub id: DraggableId,
    pub droppable_id: DroppableId,
    /// Index within the home droppable.
    pub index: usize,
}

/// Geometry of a draggable, captured once and never mutated during a drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraggableDimension {
    pub descriptor: DraggableDescriptor,
    /// Boxes relative to the viewport.
    pub client: BoxModel,
    /// Boxes relative to the document: `client` plus the window scroll.
    pub page: BoxModel,
}

impl DraggableDimension {
    /// Snapshot a measured client box, deriving the page box from the window
    /// scroll at measurement time.
    pub fn new(descriptor: DraggableDescriptor, client: BoxModel, window_scroll: Position) -> Self {
        Self {
            descriptor,
            page: with_scroll(&client, window_scroll),
            client,
        }
    }

    #[inline]
    pub fn id(&self) -> &DraggableId {
        &self.descriptor.id
    }
}

/// Identity of a droppable container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DroppableDescriptor {
    pub id: DroppableId,
    /// Drag type: only draggables of the same type may be dropped here.
    #[serde(rename = "type")]
    pub kind: String,
}

impl DroppableDescriptor {
    pub fn new(id: impl Into<DroppableId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}
