use std::time::Instant;

use rebound_config::ConfigError;
use rebound_model::Axis;
use thiserror::Error;

pub type Result<T, E = EngineError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("measurer reported invalid {axis} bounds [{min}, {max}]")]
    InvalidBounds { axis: Axis, min: f32, max: f32 },

    #[error("measurer reported an invalid item extent {0}")]
    InvalidItemExtent(f32),

    #[error("wheel mode requires the measurer to report an item extent")]
    MissingItemExtent,

    #[error(transparent)]
    InvalidTarget(#[from] TargetError),

    #[error("{0} is not enabled for this engine")]
    FeatureDisabled(&'static str),

    #[error("sample at {rejected:?} arrived after {previous:?}")]
    InputOutOfOrder { previous: Instant, rejected: Instant },
}

/// A programmatic target the engine could not resolve. The position is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TargetError {
    #[error("page {requested} on the {axis} axis is out of range (0..{count})")]
    PageOutOfRange {
        axis: Axis,
        requested: usize,
        count: usize,
    },
    #[error("item {requested} is out of range (0..{count})")]
    ItemOutOfRange { requested: usize, count: usize },
    #[error("element is not part of the scrolled content")]
    ElementNotFound,
}
