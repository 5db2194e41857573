//! Boolean-or-table option fields and their resolved form.

use serde::{Deserialize, Serialize};

/// An option group that may be written as a plain flag or as a (partial)
/// table of parameters.
///
/// ```toml
/// snap = true                    # enabled with defaults
/// wheel = false                  # disabled
/// pull_down_refresh = { threshold = 50, stop = 20 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Toggle<T> {
    Flag(bool),
    Custom(T),
}

impl<T> Default for Toggle<T> {
    fn default() -> Self {
        Toggle::Flag(false)
    }
}

impl<T: Default + Clone> Toggle<T> {
    /// Parameters the group resolves to, or `None` when disabled.
    pub fn params(&self) -> Option<T> {
        match self {
            Toggle::Flag(false) => None,
            Toggle::Flag(true) => Some(T::default()),
            Toggle::Custom(params) => Some(params.clone()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Toggle::Flag(false))
    }
}

/// Resolved form of a [`Toggle`]. Downstream code matches on this instead of
/// re-checking truthiness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Feature<T> {
    #[default]
    Disabled,
    Enabled(T),
}

impl<T> Feature<T> {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Feature::Enabled(_))
    }

    pub fn as_ref(&self) -> Feature<&T> {
        match self {
            Feature::Disabled => Feature::Disabled,
            Feature::Enabled(params) => Feature::Enabled(params),
        }
    }

    pub fn enabled(&self) -> Option<&T> {
        match self {
            Feature::Disabled => None,
            Feature::Enabled(params) => Some(params),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Feature<U> {
        match self {
            Feature::Disabled => Feature::Disabled,
            Feature::Enabled(params) => Feature::Enabled(f(params)),
        }
    }
}

impl<T> From<Option<T>> for Feature<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(params) => Feature::Enabled(params),
            None => Feature::Disabled,
        }
    }
}
