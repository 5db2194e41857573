//! # Rebound Core
//!
//! Gesture-driven motion engine for scrollable surfaces: momentum, boundary
//! bounce, direction locking, page and picker snapping, and pull-to-refresh
//! / pull-to-load edges.
//!
//! ## Architecture
//!
//! - [`kinematics`]: velocity estimation, boundary handling and trajectories
//! - [`snap`]: page and picker item resolution
//! - [`edge`]: pull-down and pull-up controllers
//! - [`events`]: lifecycle event publishing
//! - [`engine`]: the [`ScrollEngine`] state machine tying them together
//!
//! The engine is single threaded and never reads the clock. Hosts drive it
//! with gesture samples and frame ticks, each carrying an [`Instant`].
//!
//! ## Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use rebound_core::prelude::*;
//!
//! struct List;
//!
//! impl Measurer for List {
//!     type Element = ();
//!
//!     fn bounds(&self, axis: Axis) -> AxisBounds {
//!         match axis {
//!             Axis::X => AxisBounds::new(0.0, 0.0),
//!             Axis::Y => AxisBounds::new(-1000.0, 0.0),
//!         }
//!     }
//!
//!     fn viewport(&self) -> Size {
//!         Size::new(320.0, 480.0)
//!     }
//! }
//!
//! let mut engine =
//!     ScrollEngine::new(ScrollOptions::default(), List, NullRenderer)?;
//! let t0 = Instant::now();
//! engine.scroll_to(
//!     Point::new(0.0, -200.0),
//!     Duration::from_millis(300),
//!     Easing::QuinticOut,
//! );
//! engine.tick(t0);
//! engine.tick(t0 + Duration::from_millis(300));
//! assert_eq!(engine.y(), -200.0);
//! # Ok::<(), rebound_core::EngineError>(())
//! ```
//!
//! [`Instant`]: std::time::Instant
#![allow(missing_docs)]

pub mod edge;
pub mod engine;
pub mod error;
pub mod events;
pub mod kinematics;
pub mod snap;

pub use edge::{PullDownController, PullDownState, PullUpController, PullUpState};
pub use engine::{
    AxisState, DirectionLock, ElementOffset, Phase, ScrollEngine, WheelDelta,
};
pub use error::{EngineError, Result, TargetError};
pub use events::{EventHub, EventKind, ListenerId, ScrollEvent};
pub use kinematics::{GestureSample, Trajectory, VelocityEstimator};

/// Everything a host needs to embed an engine.
pub mod prelude {
    pub use crate::engine::{ElementOffset, Phase, ScrollEngine, WheelDelta};
    pub use crate::error::{EngineError, TargetError};
    pub use crate::events::{EventKind, ScrollEvent};
    pub use crate::kinematics::GestureSample;
    pub use rebound_config::{ScrollConfig, ScrollOptions};
    pub use rebound_contracts::prelude::*;
}
