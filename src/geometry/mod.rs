pub mod frame;
pub mod shape;
pub mod volume;

pub use frame::{PlaneFrame, Rings};
pub use shape::Shape;
pub use volume::{Volume, VolumeExtents};
