use std::fmt::Debug;

use crate::geometry::geo_enums::{Axis, Orientation};

/// Dimensional capabilities shared by a family of bins and the packer filling them.
///
/// Implemented by the zero-sized markers [`Volumetric`] and [`Planar`], so every capability is resolved at compile time.
pub trait Space: Copy + Clone + Debug + Default + Send + Sync + 'static {
    /// Orientations tried, in this order, when seating an item at an anchor
    const ORIENTATIONS: &'static [Orientation];
    /// Axes along which anchors are generated next to placed items, in this order
    const AXES: &'static [Axis];
    /// Depth imposed on every bin and item, if any
    const FIXED_DEPTH: Option<f64>;
    /// Name of the quantity measured by a bin's capacity
    const MEASURE: &'static str;
    const LABEL: &'static str;
}

/// Three dimensional packing: boxes go into boxes, in any of the six orientations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Volumetric;

impl Space for Volumetric {
    const ORIENTATIONS: &'static [Orientation] = &Orientation::ALL;
    const AXES: &'static [Axis] = &Axis::ALL;
    const FIXED_DEPTH: Option<f64> = None;
    const MEASURE: &'static str = "vol";
    const LABEL: &'static str = "3D";
}

/// Two dimensional packing: rectangles go into envelopes, optionally rotated a quarter turn.
/// Bins and items have a fixed depth of 1 and all placements lie at `z = 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Planar;

impl Space for Planar {
    const ORIENTATIONS: &'static [Orientation] = &Orientation::FLAT;
    const AXES: &'static [Axis] = &Axis::FLAT;
    const FIXED_DEPTH: Option<f64> = Some(1.0);
    const MEASURE: &'static str = "area";
    const LABEL: &'static str = "2D";
}
