use rebound_config::PullDownOptions;
use tracing::debug;

/// Progress of a pull-to-refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullDownState {
    #[default]
    Idle,
    /// Dragged past the threshold; releasing now starts a refresh.
    Armed,
    /// Holding at the stop offset until the host finishes refreshing.
    Waiting,
}

/// Watches top-edge overflow on the y axis.
///
/// Never moves the content itself: the engine asks it for the effective top
/// bound and whether a release should hold instead of bouncing.
#[derive(Debug, Clone)]
pub struct PullDownController {
    options: PullDownOptions,
    state: PullDownState,
}

impl PullDownController {
    pub fn new(options: PullDownOptions) -> Self {
        Self {
            options,
            state: PullDownState::Idle,
        }
    }

    pub fn state(&self) -> PullDownState {
        self.state
    }

    pub fn options(&self) -> &PullDownOptions {
        &self.options
    }

    pub fn is_waiting(&self) -> bool {
        self.state == PullDownState::Waiting
    }

    /// Feed the overflow past the natural top bound during a drag.
    pub fn observe_drag(&mut self, overflow: f32) {
        match self.state {
            PullDownState::Idle if overflow > self.options.threshold => {
                debug!(overflow, "pull-down armed");
                self.state = PullDownState::Armed;
            }
            PullDownState::Armed if overflow <= self.options.threshold => {
                debug!(overflow, "pull-down disarmed");
                self.state = PullDownState::Idle;
            }
            _ => {}
        }
    }

    /// Called on release. Returns `true` exactly when a refresh starts; the
    /// caller publishes `PullingDown` and holds at [`Self::hold_bound`].
    pub fn release(&mut self) -> bool {
        if self.state == PullDownState::Armed {
            self.state = PullDownState::Waiting;
            true
        } else {
            false
        }
    }

    /// Drop an armed pull whose drag ended without a release. A refresh
    /// already waiting is kept.
    pub fn disarm(&mut self) {
        if self.state == PullDownState::Armed {
            debug!("pull-down disarmed; drag abandoned");
            self.state = PullDownState::Idle;
        }
    }

    /// Top bound in effect: raised by `stop` while waiting.
    pub fn hold_bound(&self, natural_max: f32) -> f32 {
        if self.is_waiting() {
            natural_max + self.options.stop
        } else {
            natural_max
        }
    }

    /// Leave the waiting state. Returns `true` if a refresh was in progress.
    pub fn finish(&mut self) -> bool {
        let was_waiting = self.is_waiting();
        self.state = PullDownState::Idle;
        was_waiting
    }
}
