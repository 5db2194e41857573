//! Option tree, validation and loading for the rebound motion engine.
//!
//! Users write a [`ScrollConfig`] (in code, TOML or JSON). Every field has a
//! default and the boolean-or-table groups (`snap`, `wheel`,
//! `pull_down_refresh`, ...) accept either `true`/`false` or a partial table.
//! [`ScrollConfig::resolve`] rejects out-of-range values and conflicting
//! combinations and produces the [`ScrollOptions`] the engine runs on.
#![allow(missing_docs)]

pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod options;
pub mod toggle;
pub mod validation;

pub use error::ConfigError;
pub use loader::{CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigSource};
pub use models::{
    BounceEdges, MouseWheelConfig, Passthrough, ProbeMode, PullDownConfig,
    PullUpConfig, ScrollConfig, SnapConfig, WheelConfig,
};
pub use options::{
    BounceOptions, FlickOptions, MomentumOptions, MouseWheelOptions,
    MovementOptions, PullDownOptions, PullUpOptions, ScrollOptions,
    SnapOptions, WheelOptions,
};
pub use toggle::{Feature, Toggle};
pub use validation::{ConfigWarning, ConfigWarnings};
