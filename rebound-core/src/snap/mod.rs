//! Snap resolution onto discrete targets: pages for slides, items for
//! pickers. Both resolvers are pure functions of position, velocity,
//! configuration and layout.

pub mod pages;
pub mod wheel;

pub use pages::{AxisPages, PageLayout, SnapRelease, snap_duration};
pub use wheel::WheelLayout;
