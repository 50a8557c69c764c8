mod cuboid;
mod point;

#[doc(inline)]
pub use cuboid::Cuboid;
#[doc(inline)]
pub use point::Point;
