//! Pure motion math: velocity estimation, boundary handling and trajectories.

pub mod bounds;
pub mod trajectory;
pub mod velocity;

pub use bounds::{EdgePolicy, ScrollBounds};
pub use trajectory::{MomentumPlan, Playback, Trajectory};
pub use velocity::{GestureSample, VelocityEstimator, WindowSpan};
