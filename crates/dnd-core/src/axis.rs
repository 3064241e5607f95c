#![forbid(unsafe_code)]

//! Main-axis abstraction for lists.
//!
//! Every axis-dependent computation indexes through [`Axis`]: the coordinate
//! that matters ([`Axis::line`]), the leading and trailing edges, and the size
//! measured along it. A vertical list reorders along `y`; a horizontal list
//! along `x`.

use serde::{Deserialize, Serialize};

use crate::geometry::{Edge, Extent, Line};

/// Layout direction of a list, as reported to UI consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// The axis a list reorders along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Coordinate dimension the list reorders along.
    #[inline]
    pub const fn line(self) -> Line {
        match self {
            Self::Vertical => Line::Y,
            Self::Horizontal => Line::X,
        }
    }

    #[inline]
    pub const fn cross_axis_line(self) -> Line {
        self.line().cross()
    }

    /// Leading edge along the main axis.
    #[inline]
    pub const fn start(self) -> Edge {
        match self {
            Self::Vertical => Edge::Top,
            Self::Horizontal => Edge::Left,
        }
    }

    /// Trailing edge along the main axis.
    #[inline]
    pub const fn end(self) -> Edge {
        match self {
            Self::Vertical => Edge::Bottom,
            Self::Horizontal => Edge::Right,
        }
    }

    /// Size measured along the main axis.
    #[inline]
    pub const fn size(self) -> Extent {
        match self {
            Self::Vertical => Extent::Height,
            Self::Horizontal => Extent::Width,
        }
    }

    #[inline]
    pub const fn cross_axis_size(self) -> Extent {
        match self {
            Self::Vertical => Extent::Width,
            Self::Horizontal => Extent::Height,
        }
    }

    #[inline]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Vertical => Direction::Vertical,
            Self::Horizontal => Direction::Horizontal,
        }
    }
}

impl From<Direction> for Axis {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Vertical => Self::Vertical,
            Direction::Horizontal => Self::Horizontal,
        }
    }
}
