//! Frequently used model types, re-exported for glob imports.

pub use crate::easing::Easing;
pub use crate::geometry::{Axis, AxisBounds, Point, Rect, Size};
pub use crate::motion::{Direction, Edge};
pub use crate::page::{PageInfo, SnapTarget};
