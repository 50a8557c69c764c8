//! Packing of weighted, box-shaped items into weight-limited 3D boxes and 2D envelopes.
//!
//! Items are seated one at a time with a deterministic corner-point heuristic: the first anchor
//! next to an already placed item (and the first orientation at that anchor) which fits is taken.
//! The order in which bins and items are visited is the only degree of freedom, see
//! [`PickStrategy`](entities::PickStrategy) and [`schematic_pick`](schematic::schematic_pick).

/// Items, bins and the packer distributing the former over the latter
pub mod entities;

/// Errors raised by the engine and the optimizers built on top of it
pub mod error;

/// Geometric primitives
pub mod geometry;

/// Corner-point placement heuristic
pub mod placement;

/// Conversion of a flat sequence of pick values into a visiting order
pub mod schematic;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::{PackError, Result};
