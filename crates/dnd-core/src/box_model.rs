#![forbid(unsafe_code)]

//! CSS box model snapshots.
//!
//! A [`BoxModel`] is built from an already-measured border box plus the
//! margin, border, and padding widths. Measuring elements is the host's job;
//! this module only derives the four nested boxes and moves them between
//! client and page space.

use serde::{Deserialize, Serialize};

use crate::geometry::{Area, Position, Spacing};

/// The four nested boxes of an element and the spacings between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxModel {
    /// Border box expanded by the margin.
    pub margin_box: Area,
    pub border_box: Area,
    /// Border box shrunk by the border.
    pub padding_box: Area,
    /// Padding box shrunk by the padding.
    pub content_box: Area,
    pub margin: Spacing,
    pub border: Spacing,
    pub padding: Spacing,
}

/// Inputs for [`create_box`]. Unset spacings default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSpec {
    pub border_box: Spacing,
    pub margin: Spacing,
    pub border: Spacing,
    pub padding: Spacing,
}

impl BoxSpec {
    pub fn new(border_box: impl Into<Spacing>) -> Self {
        Self {
            border_box: border_box.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn border(mut self, border: Spacing) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }
}

/// Derive every box from a border box and its spacings.
pub fn create_box(spec: BoxSpec) -> BoxModel {
    let border_box = Area::new(spec.border_box);
    let padding_box = border_box.shrink_by(spec.border);
    BoxModel {
        margin_box: border_box.expand_by(spec.margin),
        border_box,
        padding_box,
        content_box: padding_box.shrink_by(spec.padding),
        margin: spec.margin,
        border: spec.border,
        padding: spec.padding,
    }
}

/// Move a client-space box model into page space by adding the window scroll.
pub fn with_scroll(model: &BoxModel, scroll: Position) -> BoxModel {
    create_box(
        BoxSpec::new(model.border_box.offset_by_position(scroll))
            .margin(model.margin)
            .border(model.border)
            .padding(model.padding),
    )
}
