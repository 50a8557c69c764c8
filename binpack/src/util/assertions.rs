use std::collections::HashSet;

use itertools::Itertools;
use log::error;

use crate::entities::{Bin, Packer, Space};
use crate::geometry::geo_traits::{AlmostEncloses, CollidesWith, Solid};
use crate::util::FPA;
//Various checks to verify correctness of the state of the engine
//Used in debug_assert!() blocks

pub fn bin_is_feasible<S: Space, P>(bin: &Bin<S, P>) -> bool {
    items_are_disjoint(bin) && weight_within_limit(bin) && items_within_bounds(bin)
}

pub fn items_are_disjoint<S: Space, P>(bin: &Bin<S, P>) -> bool {
    for (a, b) in bin.items().iter().tuple_combinations() {
        let (bbox_a, bbox_b) = (a.bounding_box(), b.bounding_box());
        if bbox_a.collides_with(&bbox_b) {
            error!(
                "items {:?} and {:?} overlap in bin {}: {:?} vs {:?}",
                a.id,
                b.id,
                bin.name(),
                bbox_a,
                bbox_b
            );
            return false;
        }
    }
    true
}

pub fn weight_within_limit<S: Space, P>(bin: &Bin<S, P>) -> bool {
    let total_weight = bin.total_weight();
    if total_weight > bin.max_weight() {
        error!(
            "bin {} carries {total_weight}, exceeding its limit of {}",
            bin.name(),
            bin.max_weight()
        );
        return false;
    }
    true
}

pub fn items_within_bounds<S: Space, P>(bin: &Bin<S, P>) -> bool {
    let bin_bbox = bin.bbox();
    match bin
        .items()
        .iter()
        .find(|item| !bin_bbox.almost_encloses(&item.bbox()))
    {
        Some(item) => {
            error!(
                "item {:?} sticks out of bin {}: {:?}",
                item.id,
                bin.name(),
                item.bbox()
            );
            false
        }
        None => true,
    }
}

/// Every item is either placed exactly once or unfitted, and planar items never leave the `z = 0` plane
pub fn packer_conserves_items<S: Space, P>(packer: &Packer<S, P>, n_items: usize) -> bool {
    let placed = packer.bins().iter().flat_map(|bin| bin.items());
    let ids: HashSet<_> = placed
        .clone()
        .chain(packer.unfitted_items())
        .map(|item| item.id)
        .collect();
    let flat = match S::FIXED_DEPTH {
        Some(_) => placed.clone().all(|item| FPA(item.position().z()) == FPA(0.0)),
        None => true,
    };
    ids.len() == n_items && packer.n_items() == n_items && flat
}
