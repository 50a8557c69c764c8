use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Permutation of an item's `(width, height, depth)` onto the `(x, y, z)` axes of a bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// `(width, height, depth)`, the item as it was defined
    #[default]
    Whd,
    /// `(height, width, depth)`, rotated a quarter turn around the z-axis
    Hwd,
    /// `(height, depth, width)`
    Hdw,
    /// `(depth, height, width)`
    Dhw,
    /// `(depth, width, height)`
    Dwh,
    /// `(width, depth, height)`
    Wdh,
}

impl Orientation {
    /// All orientations, in the order in which they are tried
    pub const ALL: [Orientation; 6] = [
        Orientation::Whd,
        Orientation::Hwd,
        Orientation::Hdw,
        Orientation::Dhw,
        Orientation::Dwh,
        Orientation::Wdh,
    ];

    /// Orientations that keep the depth on the z-axis
    pub const FLAT: [Orientation; 2] = [Orientation::Whd, Orientation::Hwd];

    /// Applies the permutation to `(width, height, depth)`.
    pub fn permute(self, (w, h, d): (f64, f64, f64)) -> (f64, f64, f64) {
        match self {
            Orientation::Whd => (w, h, d),
            Orientation::Hwd => (h, w, d),
            Orientation::Hdw => (h, d, w),
            Orientation::Dhw => (d, h, w),
            Orientation::Dwh => (d, w, h),
            Orientation::Wdh => (w, d, h),
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Orientation::Whd => "WHD",
            Orientation::Hwd => "HWD",
            Orientation::Hdw => "HDW",
            Orientation::Dhw => "DHW",
            Orientation::Dwh => "DWH",
            Orientation::Wdh => "WDH",
        };
        f.write_str(label)
    }
}

/// Axis of a bin along which new anchors are generated next to a placed item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
    Depth,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Height, Axis::Depth];

    pub const FLAT: [Axis; 2] = [Axis::Width, Axis::Height];
}
