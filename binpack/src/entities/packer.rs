use std::fmt::{Debug, Display, Formatter};
use std::iter;
use std::mem;
use std::sync::Arc;

use itertools::Itertools;
use log::debug;
use rand::Rng;

use crate::entities::bin::{Bin, BinId, UNLIMITED_WEIGHT};
use crate::entities::item::{Item, ItemId};
use crate::entities::pick_strategy::{self, PickStrategy};
use crate::entities::space::{Planar, Space, Volumetric};
use crate::error::{PackError, Result};
use crate::placement;
use crate::schematic::schematic_pick;
use crate::util::assertions;

/// Distributes items over bins.
///
/// A packer is built empty, populated with bins and items, and packed exactly once.
/// Items that do not fit in any bin remain available as [`Packer::unfitted_items`].
/// To try alternative strategies on the same input, [`Packer::copy`] the packer before packing it.
pub struct Packer<S: Space, P> {
    bins: Vec<Bin<S, P>>,
    /// Items not (yet) placed in any bin
    items: Vec<Item<P>>,
    packed: bool,
    n_bins_added: usize,
    n_items_added: usize,
}

/// Packer for boxes in boxes
pub type Packer3D<P> = Packer<Volumetric, P>;

/// Packer for rectangles in envelopes
pub type FlatPacker<P> = Packer<Planar, P>;

impl<S: Space, P> Packer<S, P> {
    pub fn new() -> Self {
        Packer {
            bins: vec![],
            items: vec![],
            packed: false,
            n_bins_added: 0,
            n_items_added: 0,
        }
    }

    /// Creates an independent copy of an unpacked packer, to apply a different pack strategy to.
    /// Bins and items are copied, the payloads of the items are shared.
    pub fn copy(&self) -> Result<Self> {
        if self.packed {
            return Err(PackError::CopyPackedState);
        }
        if !self.bins.iter().all(|bin| bin.is_empty()) {
            return Err(PackError::CopyDirtyState);
        }
        Ok(Packer {
            bins: self.bins.clone(),
            items: self.items.clone(),
            packed: false,
            n_bins_added: self.n_bins_added,
            n_items_added: self.n_items_added,
        })
    }

    pub fn is_packed(&self) -> bool {
        self.packed
    }

    pub fn bins(&self) -> &[Bin<S, P>] {
        &self.bins
    }

    pub fn bin(&self, id: BinId) -> Option<&Bin<S, P>> {
        self.bins.iter().find(|bin| bin.id == id)
    }

    /// Items not placed in any bin. Before packing, these are all items.
    pub fn unfitted_items(&self) -> &[Item<P>] {
        &self.items
    }

    /// Looks up an item, whether it is placed or not
    pub fn item(&self, id: ItemId) -> Option<&Item<P>> {
        self.bins
            .iter()
            .flat_map(|bin| bin.items())
            .chain(self.items.iter())
            .find(|item| item.id == id)
    }

    /// Total number of items, placed or not
    pub fn n_items(&self) -> usize {
        self.n_placed_items() + self.items.len()
    }

    pub fn n_placed_items(&self) -> usize {
        self.bins.iter().map(|bin| bin.items().len()).sum()
    }

    fn ensure_unpacked(&self) -> Result<()> {
        match self.packed {
            true => Err(PackError::AlreadyPacked),
            false => Ok(()),
        }
    }

    fn append_bin(
        &mut self,
        name: String,
        (width, height, depth): (f64, f64, f64),
        max_weight: Option<f64>,
    ) -> Result<BinId> {
        self.ensure_unpacked()?;
        let id = BinId(self.n_bins_added);
        let bin = Bin::new(
            id,
            name,
            width,
            height,
            depth,
            max_weight.unwrap_or(UNLIMITED_WEIGHT),
        )?;
        self.bins.push(bin);
        self.n_bins_added += 1;
        Ok(id)
    }

    fn append_item(
        &mut self,
        payload: P,
        (width, height, depth): (f64, f64, f64),
        weight: Option<f64>,
    ) -> Result<ItemId> {
        self.ensure_unpacked()?;
        let id = ItemId(self.n_items_added);
        let item = Item::new(
            id,
            Arc::new(payload),
            width,
            height,
            depth,
            weight.unwrap_or(0.0),
            S::FIXED_DEPTH.is_some(),
        )?;
        self.items.push(item);
        self.n_items_added += 1;
        Ok(id)
    }

    /// Reorders bins and items according to `pick` and distributes all items across all bins.
    pub fn pack(&mut self, pick: PickStrategy, rng: &mut impl Rng) -> Result<()> {
        self.ensure_unpacked()?;
        pick.apply(&mut self.bins, &mut self.items, rng);
        let bin_order = (0..self.bins.len()).collect_vec();
        let item_order = (0..self.items.len()).collect_vec();
        self.distribute(&bin_order, &item_order);
        Ok(())
    }

    /// Distributes all items across all bins, visiting the items in the order defined by `item_schema`
    /// (see [`schematic_pick`]) and the bins from biggest to smallest.
    ///
    /// Both bins and items are sorted in ascending order first, which is the list the pick values refer to.
    pub fn schematic_pack(&mut self, item_schema: impl IntoIterator<Item = f64>) -> Result<()> {
        // always picking from the end of the ascending base order
        self.schematic_pack_with_bins(item_schema, iter::repeat(1.0))
    }

    /// Like [`Packer::schematic_pack`], but the bins are visited in the order defined by `bin_schema`.
    ///
    /// Both schemas are resolved before anything is modified:
    /// on an invalid or insufficient pick value the packer is left untouched.
    pub fn schematic_pack_with_bins(
        &mut self,
        item_schema: impl IntoIterator<Item = f64>,
        bin_schema: impl IntoIterator<Item = f64>,
    ) -> Result<()> {
        self.ensure_unpacked()?;
        let bin_order = schematic_pick(0..self.bins.len(), bin_schema)?;
        let item_order = schematic_pick(0..self.items.len(), item_schema)?;

        // fixed ascending base order, which the picked indices refer to
        pick_strategy::smaller_first(&mut self.bins, &mut self.items);
        self.distribute(&bin_order, &item_order);
        Ok(())
    }

    /// Greedily fills the bins: every bin is visited once, and for each bin every remaining item is offered once.
    /// Indices refer to the current order of `self.bins` and `self.items`.
    fn distribute(&mut self, bin_order: &[usize], item_order: &[usize]) {
        self.packed = true;
        let n_items = self.n_items();
        let mut remaining = mem::take(&mut self.items)
            .into_iter()
            .map(Some)
            .collect_vec();

        for &bin_idx in bin_order {
            let bin = &mut self.bins[bin_idx];
            for &item_idx in item_order {
                let Some(item) = remaining[item_idx].take() else {
                    continue; // already placed in a previous bin
                };
                if let Err(item) = placement::place_item(bin, item) {
                    remaining[item_idx] = Some(item);
                }
            }
            debug!(
                "[PACK] bin {} holds {} items, fill ratio {:.3}",
                bin.name(),
                bin.items().len(),
                bin.fill_ratio()
            );
        }

        // unfitted items remain, in their current order
        self.items = remaining.into_iter().flatten().collect_vec();
        debug_assert!(assertions::packer_conserves_items(self, n_items));
    }

    /// Ratio of the volume of all placed items to the capacity of all bins
    pub fn fill_ratio(&self) -> f64 {
        let total_capacity = self.capacity();
        if total_capacity == 0.0 {
            return 0.0;
        }
        self.total_volume() / total_capacity
    }

    /// The maximum fill volume of all bins
    pub fn capacity(&self) -> f64 {
        self.bins.iter().map(|bin| bin.capacity()).sum()
    }

    /// The total weight of all placed items in all bins
    pub fn total_weight(&self) -> f64 {
        self.bins.iter().map(|bin| bin.total_weight()).sum()
    }

    /// The total volume of all placed items in all bins
    pub fn total_volume(&self) -> f64 {
        self.bins.iter().map(|bin| bin.total_volume()).sum()
    }
}

impl<P> Packer<Volumetric, P> {
    /// Adds a box, without weight limit if `max_weight` is `None`.
    pub fn add_bin(
        &mut self,
        name: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        max_weight: Option<f64>,
    ) -> Result<BinId> {
        self.append_bin(name.into(), (width, height, depth), max_weight)
    }

    /// Adds an item, weightless if `weight` is `None`.
    pub fn add_item(
        &mut self,
        payload: P,
        width: f64,
        height: f64,
        depth: f64,
        weight: Option<f64>,
    ) -> Result<ItemId> {
        self.append_item(payload, (width, height, depth), weight)
    }
}

impl<P> Packer<Planar, P> {
    /// Adds an envelope, without weight limit if `max_weight` is `None`.
    pub fn add_bin(
        &mut self,
        name: impl Into<String>,
        width: f64,
        height: f64,
        max_weight: Option<f64>,
    ) -> Result<BinId> {
        let depth = Planar::FIXED_DEPTH.unwrap_or(1.0);
        self.append_bin(name.into(), (width, height, depth), max_weight)
    }

    /// Adds a flat item, weightless if `weight` is `None`.
    pub fn add_item(
        &mut self,
        payload: P,
        width: f64,
        height: f64,
        weight: Option<f64>,
    ) -> Result<ItemId> {
        let depth = Planar::FIXED_DEPTH.unwrap_or(1.0);
        self.append_item(payload, (width, height, depth), weight)
    }
}

impl<S: Space, P> Default for Packer<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Space, P: Debug> Debug for Packer<S, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Packer")
            .field("space", &S::LABEL)
            .field("bins", &self.bins)
            .field("unfitted_items", &self.items)
            .field("packed", &self.packed)
            .finish()
    }
}

impl<S: Space, P> Display for Packer<S, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} packer, {} bins", S::LABEL, self.bins.len())?;
        if self.packed {
            write!(f, ", fill ratio: {}", self.fill_ratio())?;
        }
        Ok(())
    }
}
