//! Edge feature controllers: pull-to-refresh at the top, pull-to-load at the
//! bottom. Pure observers of engine state.

pub mod pull_down;
pub mod pull_up;

pub use pull_down::{PullDownController, PullDownState};
pub use pull_up::{PullUpController, PullUpState};
