pub mod extent;
pub mod line;
pub mod point;

pub use point::GeometryPosition;
