use std::time::Duration;

use rebound_model::Point;
use tracing::warn;

use crate::error::ConfigError;
use crate::models::{Passthrough, ScrollConfig};
use crate::options::{
    BounceOptions, FlickOptions, MomentumOptions, MouseWheelOptions,
    MovementOptions, PullDownOptions, PullUpOptions, ScrollOptions,
    SnapOptions, WheelOptions,
};
use crate::toggle::Feature;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    pub message: &'static str,
    pub hint: Option<&'static str>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, message: &'static str) {
        self.items.push(ConfigWarning {
            message,
            hint: None,
        });
    }

    pub fn push_with_hint(&mut self, message: &'static str, hint: &'static str) {
        self.items.push(ConfigWarning {
            message,
            hint: Some(hint),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ScrollConfig {
    /// Validate every numeric range. Nothing is clamped: the first offending
    /// field is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("start_x", self.start_x)?;
        finite("start_y", self.start_y)?;
        non_negative("direction_lock_threshold", self.direction_lock_threshold)?;
        if self.sample_capacity < 2 {
            return Err(ConfigError::OutOfRange {
                field: "sample_capacity",
                expected: "at least 2",
                value: self.sample_capacity as f64,
            });
        }

        if self.momentum_limit_time_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "momentum_limit_time_ms",
                expected: "greater than zero",
                value: 0.0,
            });
        }
        non_negative("momentum_limit_distance", self.momentum_limit_distance)?;
        positive("deceleration", self.deceleration)?;
        non_negative("flick_limit_distance", self.flick_limit_distance)?;
        positive("bounce_resistance", self.bounce_resistance)?;

        if let Some(snap) = self.snap.params() {
            non_negative("snap.threshold", snap.threshold)?;
            non_negative("snap.flick_velocity", snap.flick_velocity)?;
            if let Some(step) = snap.step_x {
                positive("snap.step_x", step)?;
            }
            if let Some(step) = snap.step_y {
                positive("snap.step_y", step)?;
            }
        }

        if let Some(wheel) = self.wheel.params() {
            finite("wheel.rotate", wheel.rotate)?;
            if self.snap.is_enabled() {
                return Err(ConfigError::Conflict(
                    "wheel and snap cannot both be enabled",
                ));
            }
            if !self.scroll_y {
                return Err(ConfigError::Conflict(
                    "wheel requires scroll_y = true",
                ));
            }
        }

        if let Some(pull_down) = self.pull_down_refresh.params() {
            non_negative("pull_down_refresh.threshold", pull_down.threshold)?;
            non_negative("pull_down_refresh.stop", pull_down.stop)?;
        }
        if let Some(pull_up) = self.pull_up_load.params() {
            non_negative("pull_up_load.threshold", pull_up.threshold)?;
        }
        if let Some(mouse_wheel) = self.mouse_wheel.params() {
            positive("mouse_wheel.speed", mouse_wheel.speed)?;
        }

        Ok(())
    }

    /// Validate and resolve into the options the engine consumes.
    pub fn resolve(&self) -> Result<ScrollOptions, ConfigError> {
        self.validate()?;
        for warning in self.warnings().items {
            match warning.hint {
                Some(hint) => warn!(hint, "{}", warning.message),
                None => warn!("{}", warning.message),
            }
        }
        Ok(resolve_unchecked(self))
    }

    /// Combinations that are valid but probably not what the author meant.
    pub fn warnings(&self) -> ConfigWarnings {
        let mut warnings = ConfigWarnings::default();

        if self.pull_down_refresh.is_enabled() {
            if !self.scroll_y {
                warnings.push("pull_down_refresh has no effect without scroll_y");
            }
            let top_bounce = self.bounce.params().is_some_and(|e| e.top);
            if !top_bounce {
                warnings.push_with_hint(
                    "pull_down_refresh can never arm with the top edge hard-clamped",
                    "enable bounce on the top edge",
                );
            }
        }

        if let Some(pull_down) = self.pull_down_refresh.params()
            && pull_down.stop > pull_down.threshold
        {
            warnings.push(
                "pull_down_refresh.stop exceeds threshold; the hold position overshoots the arming point",
            );
        }

        if self.pull_up_load.is_enabled() && !self.scroll_y {
            warnings.push("pull_up_load has no effect without scroll_y");
        }

        if self.free_scroll && self.event_passthrough != Passthrough::None {
            warnings.push_with_hint(
                "free_scroll is ignored when event_passthrough is set",
                "remove one of the two options",
            );
        }

        warnings
    }
}

impl ScrollOptions {
    /// Range checks for options built by hand rather than through
    /// [`ScrollConfig::resolve`]. Same rules, reported under option paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let movement = &self.movement;
        finite("movement.start.x", movement.start.x)?;
        finite("movement.start.y", movement.start.y)?;
        non_negative(
            "movement.direction_lock_threshold",
            movement.direction_lock_threshold,
        )?;
        if movement.sample_capacity < 2 {
            return Err(ConfigError::OutOfRange {
                field: "movement.sample_capacity",
                expected: "at least 2",
                value: movement.sample_capacity as f64,
            });
        }

        if self.momentum.limit_time.is_zero() {
            return Err(ConfigError::OutOfRange {
                field: "momentum.limit_time",
                expected: "greater than zero",
                value: 0.0,
            });
        }
        non_negative("momentum.limit_distance", self.momentum.limit_distance)?;
        positive("momentum.deceleration", self.momentum.deceleration)?;
        non_negative("flick.limit_distance", self.flick.limit_distance)?;
        positive("bounce.resistance", self.bounce.resistance)?;

        if let Some(snap) = self.snap.enabled() {
            non_negative("snap.threshold", snap.threshold)?;
            non_negative("snap.flick_velocity", snap.flick_velocity)?;
            if let Some(step) = snap.step_x {
                positive("snap.step_x", step)?;
            }
            if let Some(step) = snap.step_y {
                positive("snap.step_y", step)?;
            }
        }

        if let Some(wheel) = self.wheel.enabled() {
            finite("wheel.rotate", wheel.rotate)?;
            if self.snap.is_enabled() {
                return Err(ConfigError::Conflict(
                    "wheel and snap cannot both be enabled",
                ));
            }
            if !movement.scroll_y {
                return Err(ConfigError::Conflict(
                    "wheel requires scroll_y = true",
                ));
            }
        }

        if let Some(pull_down) = self.pull_down.enabled() {
            non_negative("pull_down.threshold", pull_down.threshold)?;
            non_negative("pull_down.stop", pull_down.stop)?;
        }
        if let Some(pull_up) = self.pull_up.enabled() {
            non_negative("pull_up.threshold", pull_up.threshold)?;
        }
        if let Some(mouse_wheel) = self.mouse_wheel.enabled() {
            positive("mouse_wheel.speed", mouse_wheel.speed)?;
        }

        Ok(())
    }
}

/// Resolution without validation. Callers must have validated `config`.
pub(crate) fn resolve_unchecked(config: &ScrollConfig) -> ScrollOptions {
    let passthrough = config.event_passthrough;
    let (scroll_x, scroll_y, free_scroll) = match passthrough {
        Passthrough::None => {
            (config.scroll_x, config.scroll_y, config.free_scroll)
        }
        Passthrough::Vertical => (config.scroll_x, false, false),
        Passthrough::Horizontal => (false, config.scroll_y, false),
    };

    ScrollOptions {
        movement: MovementOptions {
            start: Point::new(config.start_x, config.start_y),
            scroll_x,
            scroll_y,
            free_scroll,
            direction_lock_threshold: config.direction_lock_threshold,
            passthrough,
            probe: config.probe,
            sample_capacity: config.sample_capacity,
        },
        momentum: MomentumOptions {
            enabled: config.momentum,
            limit_time: ms(config.momentum_limit_time_ms),
            limit_distance: config.momentum_limit_distance,
            swipe_time: ms(config.swipe_time_ms),
            swipe_bounce_time: ms(config.swipe_bounce_time_ms),
            deceleration: config.deceleration,
        },
        flick: FlickOptions {
            limit_time: ms(config.flick_limit_time_ms),
            limit_distance: config.flick_limit_distance,
        },
        bounce: BounceOptions {
            edges: config.bounce.params().into(),
            time: ms(config.bounce_time_ms),
            resistance: config.bounce_resistance,
        },
        snap: Feature::from(config.snap.params()).map(|snap| SnapOptions {
            looping: snap.loop_pages,
            threshold: snap.threshold,
            step_x: snap.step_x,
            step_y: snap.step_y,
            speed: snap.speed_ms.map(ms),
            easing: snap.easing,
            flick_velocity: snap.flick_velocity,
        }),
        wheel: Feature::from(config.wheel.params()).map(|wheel| WheelOptions {
            selected_index: wheel.selected_index,
            rotate: wheel.rotate,
            adjust_time: ms(wheel.adjust_time_ms),
            looping: wheel.loop_items,
        }),
        pull_down: Feature::from(config.pull_down_refresh.params()).map(|p| {
            PullDownOptions {
                threshold: p.threshold,
                stop: p.stop,
            }
        }),
        pull_up: Feature::from(config.pull_up_load.params()).map(|p| {
            PullUpOptions {
                threshold: p.threshold,
            }
        }),
        mouse_wheel: Feature::from(config.mouse_wheel.params()).map(|m| {
            MouseWheelOptions {
                speed: m.speed,
                invert: m.invert,
                settle_time: ms(m.settle_time_ms),
            }
        }),
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "a finite number",
            value: value as f64,
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "a finite, non-negative number",
            value: value as f64,
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "a finite, positive number",
            value: value as f64,
        })
    }
}
