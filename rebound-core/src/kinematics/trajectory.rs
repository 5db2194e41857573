//! Animation plans and the momentum projection that produces them.

use std::time::{Duration, Instant};

use rebound_config::MomentumOptions;
use rebound_config::constants::momentum::OVERSHOOT_RATE;
use rebound_model::{AxisBounds, Easing, Point};

/// An immutable plan: ease from `start` to `end` over `duration`.
///
/// Replaced, never mutated, when the motion is interrupted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    pub start: Point,
    pub end: Point,
    pub duration: Duration,
    pub easing: Easing,
}

impl Trajectory {
    pub fn new(
        start: Point,
        end: Point,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            start,
            end,
            duration,
            easing,
        }
    }

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }

    /// Position after `elapsed`. Exactly `end` once the duration has passed.
    pub fn sample(&self, elapsed: Duration) -> Point {
        if elapsed >= self.duration {
            return self.end;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t);
        Point::new(
            self.start.x + (self.end.x - self.start.x) * eased,
            self.start.y + (self.end.y - self.start.y) * eased,
        )
    }

    /// Same motion with a new end point, keeping timing and easing.
    pub fn retarget(&self, end: Point) -> Self {
        Self { end, ..*self }
    }
}

/// A trajectory bound to the instant it started playing.
///
/// Programmatic commands leave `started_at` unset; the next tick binds it so
/// the first frame reports the start position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    pub plan: Trajectory,
    pub started_at: Option<Instant>,
}

impl Playback {
    pub fn deferred(plan: Trajectory) -> Self {
        Self {
            plan,
            started_at: None,
        }
    }

    pub fn starting_at(plan: Trajectory, at: Instant) -> Self {
        Self {
            plan,
            started_at: Some(at),
        }
    }

    /// Advance to `now`, returning the position and whether the plan is done.
    pub fn advance(&mut self, now: Instant) -> (Point, bool) {
        let started = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        (self.plan.sample(elapsed), elapsed >= self.plan.duration)
    }

    /// Time left before the plan completes, measured from `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started) => self
                .plan
                .duration
                .saturating_sub(now.saturating_duration_since(started)),
            None => self.plan.duration,
        }
    }
}

/// Terminal motion of one axis after a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumPlan {
    pub destination: f32,
    pub duration: Duration,
    /// The projected stop crossed a bound and was cut short there.
    pub hits_bound: bool,
}

/// Project where `velocity` (px/ms) carries `position` before decaying.
///
/// Velocity decays exponentially with time constant `1 / deceleration` ms,
/// so the total travel is `velocity / deceleration`. A stop beyond a bound is
/// cut to the bound plus an overshoot of at most a quarter of
/// `overshoot_room` (the viewport extent, or `None` when the edge of travel
/// hard-clamps) and played over the shorter bounce time.
pub fn project_momentum(
    position: f32,
    velocity: f32,
    bounds: AxisBounds,
    overshoot_room: Option<f32>,
    options: &MomentumOptions,
) -> MomentumPlan {
    let travel = velocity / options.deceleration;
    let mut destination = position + travel;
    let mut duration = options.swipe_time;
    let mut hits_bound = false;
    let speed = velocity.abs();

    if destination < bounds.min {
        destination = match overshoot_room {
            Some(room) => (bounds.min - room / 4.0)
                .max(bounds.min - room / OVERSHOOT_RATE * speed),
            None => bounds.min,
        };
        duration = options.swipe_bounce_time;
        hits_bound = true;
    } else if destination > bounds.max {
        destination = match overshoot_room {
            Some(room) => (bounds.max + room / 4.0)
                .min(bounds.max + room / OVERSHOOT_RATE * speed),
            None => bounds.max,
        };
        duration = options.swipe_bounce_time;
        hits_bound = true;
    }

    MomentumPlan {
        destination: destination.round(),
        duration,
        hits_bound,
    }
}

/// Velocity remaining `elapsed` ms into an exponential decay.
pub fn decayed_velocity(velocity: f32, deceleration: f32, elapsed: Duration) -> f32 {
    let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
    velocity * (-elapsed_ms * deceleration).exp()
}
