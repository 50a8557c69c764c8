use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::entities::bin::Bin;
use crate::entities::item::Item;
use crate::entities::space::Space;

/// Order in which bins and items are visited by the greedy packer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PickStrategy {
    /// Bins by ascending capacity, items by ascending volume.
    /// Often performs poorly, especially for many small items of increasing size.
    SmallerFirst,
    /// Bins by descending capacity, items by descending volume
    #[default]
    BiggerFirst,
    /// Uniformly random permutation of both bins and items
    Shuffle,
}

impl PickStrategy {
    /// Reorders `bins` and `items` in place.
    /// Sorting is stable, `rng` is only drawn from by [`PickStrategy::Shuffle`].
    pub fn apply<S: Space, P>(
        self,
        bins: &mut [Bin<S, P>],
        items: &mut [Item<P>],
        rng: &mut impl Rng,
    ) {
        match self {
            PickStrategy::SmallerFirst => smaller_first(bins, items),
            PickStrategy::BiggerFirst => bigger_first(bins, items),
            PickStrategy::Shuffle => {
                bins.shuffle(rng);
                items.shuffle(rng);
            }
        }
    }
}

pub(crate) fn smaller_first<S: Space, P>(bins: &mut [Bin<S, P>], items: &mut [Item<P>]) {
    bins.sort_by_key(|bin| OrderedFloat(bin.capacity()));
    items.sort_by_key(|item| OrderedFloat(item.volume()));
}

fn bigger_first<S: Space, P>(bins: &mut [Bin<S, P>], items: &mut [Item<P>]) {
    bins.sort_by_key(|bin| Reverse(OrderedFloat(bin.capacity())));
    items.sort_by_key(|item| Reverse(OrderedFloat(item.volume())));
}
