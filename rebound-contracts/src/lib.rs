//! Trait surfaces the motion engine calls into.
//!
//! The engine never measures layout or draws pixels itself. Hosts implement
//! [`Measurer`] to report scrollable extents and element geometry, and
//! [`Renderer`] to move the content surface.

pub mod measure;
pub mod render;

pub use measure::Measurer;
pub use render::{NullRenderer, Renderer};

/// Frequently used trait combinators for engine hosts.
pub mod prelude {
    pub use super::measure::Measurer;
    pub use super::render::{NullRenderer, Renderer};
    pub use rebound_model::prelude::*;
}
