mod bin;
mod item;
mod packer;
mod pick_strategy;
mod space;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::ItemId;

#[doc(inline)]
pub use item::START_POSITION;

#[doc(inline)]
pub use bin::Bin;

#[doc(inline)]
pub use bin::BinId;

#[doc(inline)]
pub use bin::Box3D;

#[doc(inline)]
pub use bin::Envelope;

#[doc(inline)]
pub use bin::UNLIMITED_WEIGHT;

#[doc(inline)]
pub use packer::FlatPacker;

#[doc(inline)]
pub use packer::Packer;

#[doc(inline)]
pub use packer::Packer3D;

#[doc(inline)]
pub use pick_strategy::PickStrategy;

#[doc(inline)]
pub use space::Planar;

#[doc(inline)]
pub use space::Space;

#[doc(inline)]
pub use space::Volumetric;
