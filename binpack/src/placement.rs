//! Corner point heuristic: an item is placed either at the origin of an empty bin,
//! or at one of the corner points of the items already placed in the bin.

use itertools::Itertools;

use crate::entities::{Bin, Item, START_POSITION, Space};
use crate::geometry::geo_enums::Axis;
use crate::geometry::primitives::Point;

/// Attempts to place `item` in `bin`, trying all anchors in order: first along the width of every placed item,
/// then along the height, and finally along the depth (only for [`Volumetric`](crate::entities::Volumetric) bins).
/// Returns the item unchanged if no anchor accommodates it.
#[allow(clippy::result_large_err)]
pub fn place_item<S: Space, P>(bin: &mut Bin<S, P>, item: Item<P>) -> Result<(), Item<P>> {
    if bin.is_empty() {
        return bin.try_place(item, START_POSITION);
    }
    // anchors are derived from the items placed before this attempt only
    let anchors = corner_points(bin).collect_vec();
    let mut item = item;
    for anchor in anchors {
        match bin.try_place(item, anchor) {
            Ok(()) => return Ok(()),
            Err(rejected) => item = rejected,
        }
    }
    Err(item)
}

/// All candidate anchors in `bin`, in the order they are tried
pub fn corner_points<S: Space, P>(bin: &Bin<S, P>) -> impl Iterator<Item = Point> + '_ {
    S::AXES
        .iter()
        .flat_map(move |&axis| bin.items().iter().map(move |placed| corner_point(placed, axis)))
}

/// The point adjacent to `item`'s minimum corner, shifted by its extent along `axis`
pub fn corner_point<P>(item: &Item<P>, axis: Axis) -> Point {
    let (w, h, d) = item.dimensions();
    let offset = match axis {
        Axis::Width => Point(w, 0.0, 0.0),
        Axis::Height => Point(0.0, h, 0.0),
        Axis::Depth => Point(0.0, 0.0, d),
    };
    item.position() + offset
}
