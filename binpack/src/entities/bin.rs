use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;

use log::trace;

use crate::entities::item::Item;
use crate::entities::space::{Planar, Space, Volumetric};
use crate::error::{PackError, Result};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Cuboid, Point};
use crate::util::assertions;

/// Default weight limit of a bin
pub const UNLIMITED_WEIGHT: f64 = f64::INFINITY;

/// Unique identifier of a [`Bin`] within a [`Packer`](crate::entities::Packer), retained by all its copies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BinId(pub usize);

/// A [`Bin`] is a weight-limited, box-shaped container in which items can be placed.
///
/// The placed items are kept in insertion order, which determines the order in which
/// new anchors are generated next to them.
pub struct Bin<S: Space, P> {
    pub id: BinId,
    name: String,
    width: f64,
    height: f64,
    depth: f64,
    max_weight: f64,
    items: Vec<Item<P>>,
    space: PhantomData<S>,
}

/// Volumetric bin
pub type Box3D<P> = Bin<Volumetric, P>;

/// Planar bin
pub type Envelope<P> = Bin<Planar, P>;

impl<S: Space, P> Bin<S, P> {
    pub(crate) fn new(
        id: BinId,
        name: String,
        width: f64,
        height: f64,
        depth: f64,
        max_weight: f64,
    ) -> Result<Self> {
        for (what, value) in [("width", width), ("height", height), ("depth", depth)] {
            if !value.is_finite() || value < 0.0 {
                return Err(PackError::InvalidMeasure { what, value });
            }
        }
        if max_weight.is_nan() || max_weight < 0.0 {
            return Err(PackError::InvalidMeasure {
                what: "max weight",
                value: max_weight,
            });
        }
        Ok(Bin {
            id,
            name,
            width,
            height,
            depth,
            max_weight,
            items: vec![],
            space: PhantomData,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// The placed items, in order of placement
    pub fn items(&self) -> &[Item<P>] {
        &self.items
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The interior of the bin
    pub fn bbox(&self) -> Cuboid {
        Cuboid::from_corner(Point(0.0, 0.0, 0.0), (self.width, self.height, self.depth))
    }

    /// Attempts to place `item` with its minimum corner at `anchor`.
    ///
    /// The orientations of the [`Space`] are tried in order, the first one for which the item stays inside the bin
    /// and does not collide with any placed item is committed, and the item is appended to the bin.
    /// If the item does not fit at all or would exceed the weight limit, it is handed back with its
    /// original orientation and position.
    #[allow(clippy::result_large_err)]
    pub fn try_place(&mut self, mut item: Item<P>, anchor: Point) -> std::result::Result<(), Item<P>> {
        if self.total_weight() + item.weight() > self.max_weight {
            return Err(item);
        }

        let (orig_orientation, orig_position) = (item.orientation(), item.position());
        let Point(x, y, z) = anchor;
        item.set_position(anchor);

        for &orientation in S::ORIENTATIONS {
            item.set_orientation(orientation);
            let (w, h, d) = item.dimensions();
            if self.width < x + w || self.height < y + h || self.depth < z + d {
                continue;
            }
            let bbox = item.bounding_box();
            if self
                .items
                .iter()
                .any(|placed| bbox.collides_with(&placed.bounding_box()))
            {
                continue;
            }
            trace!(
                "[PACK] item {:?} placed in bin {} at {anchor} ({orientation})",
                item.id,
                self.name
            );
            self.items.push(item);
            debug_assert!(assertions::bin_is_feasible(self));
            return Ok(());
        }

        item.set_orientation(orig_orientation);
        item.set_position(orig_position);
        Err(item)
    }

    /// The maximum fill volume of the bin
    pub fn capacity(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// The total weight of all placed items
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight()).sum()
    }

    /// The total volume of all placed items
    pub fn total_volume(&self) -> f64 {
        self.items.iter().map(|item| item.volume()).sum()
    }

    /// Ratio of the placed volume to the capacity, 0 for a bin without capacity
    pub fn fill_ratio(&self) -> f64 {
        let capacity = self.capacity();
        if capacity == 0.0 {
            return 0.0;
        }
        self.total_volume() / capacity
    }
}

impl<S: Space, P> Clone for Bin<S, P> {
    fn clone(&self) -> Self {
        Bin {
            id: self.id,
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            depth: self.depth,
            max_weight: self.max_weight,
            items: self.items.clone(),
            space: PhantomData,
        }
    }
}

impl<S: Space, P: Debug> Debug for Bin<S, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bin")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("space", &S::LABEL)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("depth", &self.depth)
            .field("max_weight", &self.max_weight)
            .field("items", &self.items)
            .finish()
    }
}

impl<S: Space, P> Display for Bin<S, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match S::FIXED_DEPTH {
            Some(_) => write!(f, "{}({:.3}x{:.3}", self.name, self.width, self.height)?,
            None => write!(
                f,
                "{}({:.3}x{:.3}x{:.3}",
                self.name, self.width, self.height, self.depth
            )?,
        }
        write!(
            f,
            ", max_weight:{}) {}({:.3})",
            self.max_weight,
            S::MEASURE,
            self.capacity()
        )
    }
}
