//! Headless driver for the rebound engine.
//!
//! Loads a gesture [`Script`](script::Script), replays it through a
//! [`ScrollEngine`](rebound_core::ScrollEngine) at a fixed frame rate and
//! reports the frames and events it produced.
#![allow(missing_docs)]

pub mod report;
pub mod script;
pub mod simulate;

pub use report::Report;
pub use script::{Action, Layout, Script, ScriptError, Step};
pub use simulate::{ScriptMeasurer, SimulationError, simulate};
