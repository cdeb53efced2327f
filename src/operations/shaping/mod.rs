mod loft;
mod sweep;

pub use loft::{Loft, ShapeInterpolator, ShapeModifier};
pub use sweep::{Sweep, SweepOptions, SweepSection};
