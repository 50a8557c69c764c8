use std::cell::Cell;
use std::f64::consts::FRAC_PI_2;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use crate::error::{PackError, Result};
use crate::geometry::Transformation;
use crate::geometry::geo_enums::Orientation;
use crate::geometry::geo_traits::Solid;
use crate::geometry::primitives::{Cuboid, Point};

/// Position of every item that has not been placed yet, and the anchor of the first item in an empty bin
pub const START_POSITION: Point = Point(0.0, 0.0, 0.0);

/// Unique identifier of an [`Item`] within a [`Packer`](crate::entities::Packer), retained by all its copies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// Box-shaped item to be placed in a bin.
///
/// The payload `P` belongs to the caller and is never interpreted.
/// Copies of an item share the payload, but have their own orientation and position.
pub struct Item<P> {
    pub id: ItemId,
    payload: Arc<P>,
    width: f64,
    height: f64,
    depth: f64,
    weight: f64,
    orientation: Orientation,
    position: Point,
    /// Depth is fixed, the item is reported by its footprint and area
    flat: bool,
    /// Bounding box for the current orientation and position, only valid if `bbox_dirty` is false
    bbox: Cell<Cuboid>,
    bbox_dirty: Cell<bool>,
}

impl<P> Item<P> {
    pub(crate) fn new(
        id: ItemId,
        payload: Arc<P>,
        width: f64,
        height: f64,
        depth: f64,
        weight: f64,
        flat: bool,
    ) -> Result<Self> {
        for (what, value) in [
            ("width", width),
            ("height", height),
            ("depth", depth),
            ("weight", weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PackError::InvalidMeasure { what, value });
            }
        }
        Ok(Item {
            id,
            payload,
            width,
            height,
            depth,
            weight,
            orientation: Orientation::default(),
            position: START_POSITION,
            flat,
            bbox: Cell::new(Cuboid::from_corner(START_POSITION, (0.0, 0.0, 0.0))),
            bbox_dirty: Cell::new(true),
        })
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// True if `self` and `other` refer to the very same payload
    pub fn shares_payload_with(&self, other: &Item<P>) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
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

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.bbox_dirty.set(true);
    }

    /// Minimum corner of the item
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.bbox_dirty.set(true);
    }

    /// Extents along `(x, y, z)` in the current orientation
    pub fn dimensions(&self) -> (f64, f64, f64) {
        self.orientation
            .permute((self.width, self.height, self.depth))
    }

    /// Axis-aligned box spanned from the position to the position plus the dimensions.
    /// Recomputed lazily after the orientation or position changed.
    pub fn bounding_box(&self) -> Cuboid {
        if self.bbox_dirty.get() {
            self.bbox
                .set(Cuboid::from_corner(self.position, self.dimensions()));
            self.bbox_dirty.set(false);
        }
        self.bbox.get()
    }

    /// Independent of the orientation
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Transformation which moves an entity, modelled with the minimum corner of its bounding box at the origin
    /// in the item's original `(width, height, depth)` layout, to its final location in the bin.
    ///
    /// Only [`Orientation::Whd`] and [`Orientation::Hwd`] are supported,
    /// all other orientations return [`PackError::UnsupportedOrientation`].
    pub fn transformation(&self) -> Result<Transformation> {
        let Point(x, y, z) = self.position;
        match self.orientation {
            Orientation::Whd => Ok(Transformation::from_translation(self.position)),
            Orientation::Hwd => {
                // quarter turn maps [0, w] x [0, h] onto [-h, 0] x [0, w]
                Ok(Transformation::from_z_rotation(FRAC_PI_2)
                    .translate(Point(x + self.height, y, z)))
            }
            unsupported => Err(PackError::UnsupportedOrientation(unsupported)),
        }
    }
}

impl<P> Solid for Item<P> {
    fn volume(&self) -> f64 {
        Item::volume(self)
    }

    fn bbox(&self) -> Cuboid {
        self.bounding_box()
    }
}

impl<P> Clone for Item<P> {
    fn clone(&self) -> Self {
        Item {
            id: self.id,
            payload: self.payload.clone(),
            width: self.width,
            height: self.height,
            depth: self.depth,
            weight: self.weight,
            orientation: self.orientation,
            position: self.position,
            flat: self.flat,
            bbox: self.bbox.clone(),
            bbox_dirty: self.bbox_dirty.clone(),
        }
    }
}

impl<P: Debug> Debug for Item<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("payload", &self.payload)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("depth", &self.depth)
            .field("weight", &self.weight)
            .field("orientation", &self.orientation)
            .field("position", &self.position)
            .finish()
    }
}

impl<P: Display> Display for Item<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let measure = if self.flat {
            write!(f, "{}({}x{}", self.payload, self.width, self.height)?;
            "area"
        } else {
            write!(
                f,
                "{}({}x{}x{}",
                self.payload, self.width, self.height, self.depth
            )?;
            "vol"
        };
        write!(
            f,
            ", weight: {}) pos{} rt({}) {}({})",
            self.weight,
            self.position,
            self.orientation,
            measure,
            self.volume()
        )
    }
}
