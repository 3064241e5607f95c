#![forbid(unsafe_code)]

//! Core: geometry primitives, list axes, and box model snapshots.
//!
//! # Role
//! `dnd-core` is the leaf layer of the reorder engine. It owns the value
//! types every other computation is expressed in and performs no measurement
//! of its own: hosts hand it already-measured border boxes.
//!
//! # Primary responsibilities
//! - **Geometry**: [`Position`], [`Spacing`], and [`Area`] arithmetic.
//! - **Axis**: [`Axis`] dispatch for vertical and horizontal lists.
//! - **Box model**: [`BoxModel`] derivation and client/page conversion.
//! - **Logging**: `tracing` macros behind the `tracing` feature.

pub mod axis;
pub mod box_model;
pub mod geometry;
pub mod logging;

pub use axis::{Axis, Direction};
pub use box_model::{BoxModel, BoxSpec, create_box, with_scroll};
pub use geometry::{Area, Edge, Extent, Line, Position, Spacing};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
