//! Geometry and motion value types shared across rebound crates.
#![allow(missing_docs)]

pub mod easing;
pub mod geometry;
pub mod motion;
pub mod page;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use easing::Easing;
pub use geometry::{Axis, AxisBounds, Point, Rect, Size};
pub use motion::{Direction, Edge};
pub use page::{PageInfo, SnapTarget};
