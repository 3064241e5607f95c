#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are in CSS pixels (`f64`), either in client space (relative to
//! the viewport) or in page space (client space plus window scroll). A value
//! never records which space it lives in; callers keep that straight.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// One of the two coordinate dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Line {
    X,
    Y,
}

impl Line {
    /// The other dimension.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// An edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// A size measurement of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    Width,
    Height,
}

/// A 2D point or vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The origin, also the zero vector.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A vector with `value` on `line` and zero on the other dimension.
    #[inline]
    pub const fn patch(line: Line, value: f64) -> Self {
        match line {
            Line::X => Self { x: value, y: 0.0 },
            Line::Y => Self { x: 0.0, y: value },
        }
    }

    /// Component along `line`.
    #[inline]
    pub const fn get(self, line: Line) -> f64 {
        match line {
            Line::X => self.x,
            Line::Y => self.y,
        }
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Position::add(self, rhs)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Neg for Position {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

/// Offsets from each edge of a box: margins, borders, paddings, or the raw
/// edge coordinates of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Spacing {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Spacing {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create new spacing with equal values.
    pub const fn all(val: f64) -> Self {
        Self::new(val, val, val, val)
    }

    /// Value for one edge.
    #[inline]
    pub const fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Move every edge by `point`.
    pub fn offset_by_position(&self, point: Position) -> Self {
        Self {
            top: self.top + point.y,
            right: self.right + point.x,
            bottom: self.bottom + point.y,
            left: self.left + point.x,
        }
    }

    /// Grow outward by `spacing` on each side.
    pub fn expand_by(&self, spacing: Spacing) -> Self {
        Self {
            top: self.top - spacing.top,
            right: self.right + spacing.right,
            bottom: self.bottom + spacing.bottom,
            left: self.left - spacing.left,
        }
    }

    /// Shrink inward by `spacing` on each side.
    pub fn shrink_by(&self, spacing: Spacing) -> Self {
        Self {
            top: self.top + spacing.top,
            right: self.right - spacing.right,
            bottom: self.bottom - spacing.bottom,
            left: self.left + spacing.left,
        }
    }
}

/// An axis-aligned rectangle with its derived size and center.
///
/// Edge coordinates are stored as given; `bottom >= top` and `right >= left`
/// are the caller's responsibility. Derived fields are computed once at
/// construction so every consumer agrees on them bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub center: Position,
}

impl Area {
    pub fn new(spacing: Spacing) -> Self {
        let Spacing {
            top,
            right,
            bottom,
            left,
        } = spacing;
        let width = right - left;
        let height = bottom - top;
        Self {
            top,
            right,
            bottom,
            left,
            width,
            height,
            center: Position::new((right + left) / 2.0, (top + bottom) / 2.0),
        }
    }

    /// Create from edge coordinates.
    pub fn from_edges(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self::new(Spacing::new(top, right, bottom, left))
    }

    /// Edge coordinates only.
    #[inline]
    pub const fn spacing(&self) -> Spacing {
        Spacing::new(self.top, self.right, self.bottom, self.left)
    }

    #[inline]
    pub const fn edge(&self, edge: Edge) -> f64 {
        self.spacing().edge(edge)
    }

    #[inline]
    pub const fn size(&self, extent: Extent) -> f64 {
        match extent {
            Extent::Width => self.width,
            Extent::Height => self.height,
        }
    }

    /// Check if a point is inside the rectangle. Edges count as inside.
    #[inline]
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    pub fn offset_by_position(&self, point: Position) -> Self {
        Self::new(self.spacing().offset_by_position(point))
    }

    pub fn expand_by(&self, spacing: Spacing) -> Self {
        Self::new(self.spacing().expand_by(spacing))
    }

    pub fn shrink_by(&self, spacing: Spacing) -> Self {
        Self::new(self.spacing().shrink_by(spacing))
    }
}

impl From<Spacing> for Area {
    fn from(spacing: Spacing) -> Self {
        Self::new(spacing)
    }
}

impl From<Area> for Spacing {
    fn from(area: Area) -> Self {
        area.spacing()
    }
}
