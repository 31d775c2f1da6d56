pub mod error;
pub mod geometry;
pub mod math;
pub mod relation;

pub use error::{Result, SegrelError};
