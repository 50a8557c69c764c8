use crate::geometry::primitives::Cuboid;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can detect whether `T` lies completely inside `Self`.
///
/// Errs on the side of containment: `T` sticking out by a floating point rounding error still counts as enclosed.
pub trait AlmostEncloses<T> {
    fn almost_encloses(&self, other: &T) -> bool;
}

/// Trait for shared properties of box-shaped entities.
pub trait Solid {
    /// Volume of the interior (area for planar entities, whose depth is 1)
    fn volume(&self) -> f64;

    /// Axis-aligned bounding box
    fn bbox(&self) -> Cuboid;
}
