#![forbid(unsafe_code)]

//! Window viewport snapshot.

use dnd_core::{Area, Position};
use serde::{Deserialize, Serialize};

/// The visible part of the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Page-space rectangle currently on screen.
    pub subject: Area,
    pub scroll: Position,
    pub max_scroll: Position,
}

impl Viewport {
    /// A viewport of `width` x `height` scrolled to `scroll`.
    pub fn new(width: f64, height: f64, scroll: Position, max_scroll: Position) -> Self {
        Self {
            subject: Area::from_edges(scroll.y, scroll.x + width, scroll.y + height, scroll.x),
            scroll,
            max_scroll,
        }
    }
}
