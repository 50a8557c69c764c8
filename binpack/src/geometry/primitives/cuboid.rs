use crate::geometry::geo_traits::{AlmostEncloses, CollidesWith, Solid};
use crate::geometry::primitives::Point;
use crate::util::FPA;

///Axis-aligned cuboid
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Cuboid {
    pub x_min: f64,
    pub y_min: f64,
    pub z_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    pub z_max: f64,
}

impl Cuboid {
    /// Cuboid with its minimum corner at `corner`, extending `(dx, dy, dz)` along the positive axes.
    pub fn from_corner(corner: Point, (dx, dy, dz): (f64, f64, f64)) -> Self {
        let Point(x, y, z) = corner;
        Cuboid {
            x_min: x,
            y_min: y,
            z_min: z,
            x_max: x + dx,
            y_max: y + dy,
            z_max: z + dz,
        }
    }

    pub fn max_corner(&self) -> Point {
        Point(self.x_max, self.y_max, self.z_max)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn depth(&self) -> f64 {
        self.z_max - self.z_min
    }
}

impl Solid for Cuboid {
    fn volume(&self) -> f64 {
        self.width() * self.height() * self.depth()
    }

    fn bbox(&self) -> Cuboid {
        *self
    }
}

/// Only overlapping interiors collide, cuboids touching each other with a face, edge or corner do not.
impl CollidesWith<Cuboid> for Cuboid {
    #[inline(always)]
    fn collides_with(&self, other: &Cuboid) -> bool {
        f64::max(self.x_min, other.x_min) < f64::min(self.x_max, other.x_max)
            && f64::max(self.y_min, other.y_min) < f64::min(self.y_max, other.y_max)
            && f64::max(self.z_min, other.z_min) < f64::min(self.z_max, other.z_max)
    }
}

impl AlmostEncloses<Cuboid> for Cuboid {
    fn almost_encloses(&self, other: &Cuboid) -> bool {
        FPA(other.x_min) >= FPA(self.x_min)
            && FPA(other.y_min) >= FPA(self.y_min)
            && FPA(other.z_min) >= FPA(self.z_min)
            && FPA(other.x_max) <= FPA(self.x_max)
            && FPA(other.y_max) <= FPA(self.y_max)
            && FPA(other.z_max) <= FPA(self.z_max)
    }
}
