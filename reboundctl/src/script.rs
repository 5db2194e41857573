//! Gesture scripts: a layout plus timestamped inputs, written in TOML or
//! JSON.
//!
//! ```toml
//! [layout]
//! viewport = { width = 320, height = 480 }
//! content = { width = 320, height = 2000 }
//!
//! [[steps]]
//! at_ms = 0
//! action = "touch_start"
//! x = 0
//! y = 400
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rebound_model::{Easing, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in script {path}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON in script {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported script format for {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
    #[error("step {index} at {at_ms} ms comes before the previous step at {previous_ms} ms")]
    OutOfOrder {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub layout: Layout,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Geometry the simulated measurer reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    pub viewport: Size,
    pub content: Size,
    /// Picker item height, for scripts exercising wheel mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_extent: Option<f32>,
    #[serde(default)]
    pub item_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

/// One input fed to the engine. Pointer coordinates are in viewport pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    TouchStart {
        x: f32,
        y: f32,
    },
    TouchMove {
        x: f32,
        y: f32,
    },
    TouchEnd,
    TouchCancel,
    /// One mouse wheel notch; positive `dy` scrolls forward.
    Wheel {
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
    },
    ScrollTo {
        x: f32,
        y: f32,
        #[serde(default)]
        duration_ms: u64,
        #[serde(default)]
        easing: Option<Easing>,
    },
    ScrollBy {
        dx: f32,
        dy: f32,
        #[serde(default)]
        duration_ms: u64,
        #[serde(default)]
        easing: Option<Easing>,
    },
    GoToPage {
        page_x: usize,
        page_y: usize,
        #[serde(default)]
        duration_ms: Option<u64>,
    },
    Next,
    Prev,
    WheelTo {
        index: usize,
    },
    Stop,
    Enable,
    Disable,
    FinishPullDown,
    FinishPullUp,
    /// Change the content size and refresh the engine.
    Resize {
        width: f32,
        height: f32,
    },
}

impl Script {
    /// Load a script, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let raw = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let script: Script = match ext.as_deref() {
            Some("toml") => {
                toml::from_str(&raw).map_err(|source| ScriptError::Toml {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Some("json") => serde_json::from_str(&raw).map_err(|source| {
                ScriptError::Json {
                    path: path.to_path_buf(),
                    source,
                }
            })?,
            _ => {
                return Err(ScriptError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        script.check_order()?;
        Ok(script)
    }

    /// Steps must be listed in time order.
    pub fn check_order(&self) -> Result<(), ScriptError> {
        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(ScriptError::OutOfOrder {
                    index: index + 1,
                    at_ms: pair[1].at_ms,
                    previous_ms: pair[0].at_ms,
                });
            }
        }
        Ok(())
    }

    /// Instant of the last step, in ms.
    pub fn duration_ms(&self) -> u64 {
        self.steps.last().map_or(0, |step| step.at_ms)
    }
}
