mod support;

use std::time::Duration;

use rebound_config::{Passthrough, PullDownConfig, ScrollConfig, Toggle};
use rebound_core::{EventKind, Phase, PullDownState, ScrollEvent};
use rebound_model::{AxisBounds, Point};

use support::{Clock, StaticMeasurer, count, drain, engine, settle};

fn horizontal_list() -> ScrollConfig {
    ScrollConfig {
        scroll_x: true,
        scroll_y: false,
        ..ScrollConfig::default()
    }
}

#[test]
fn resting_release_inside_bounds_goes_straight_to_idle() {
    let clock = Clock::new();
    let mut engine = engine(horizontal_list(), StaticMeasurer::horizontal(500.0));
    let mut rx = engine.subscribe();

    engine.touch_start(clock.sample(100.0, 100.0, 0));
    engine.touch_move(clock.sample(50.0, 100.0, 10));
    assert_eq!(engine.phase(), Phase::Dragging);
    assert_eq!(engine.x(), -50.0);

    // The finger rests well past the velocity window before lifting.
    engine.touch_end(clock.at(1_000));

    assert_eq!(engine.phase(), Phase::Idle);
    assert!(!engine.is_animating());
    assert_eq!(engine.position(), Point::new(-50.0, 0.0));

    let events = drain(&mut rx);
    assert_eq!(events.first(), Some(&ScrollEvent::BeforeScrollStart));
    assert_eq!(count(&events, EventKind::ScrollStart), 1);
    assert_eq!(
        events.last(),
        Some(&ScrollEvent::ScrollEnd(Point::new(-50.0, 0.0)))
    );
}

#[test]
fn renderer_sees_every_drag_sample() {
    let clock = Clock::new();
    let mut engine = engine(horizontal_list(), StaticMeasurer::horizontal(500.0));

    engine.touch_start(clock.sample(100.0, 0.0, 0));
    engine.touch_move(clock.sample(90.0, 0.0, 10));
    engine.touch_move(clock.sample(70.0, 0.0, 20));

    let frames = &engine.renderer().frames;
    assert_eq!(
        frames.as_slice(),
        &[
            Point::new(0.0, 0.0),
            Point::new(-10.0, 0.0),
            Point::new(-30.0, 0.0),
        ]
    );
}

#[test]
fn tap_without_movement_cancels() {
    let clock = Clock::new();
    let mut engine = engine(ScrollConfig::default(), StaticMeasurer::vertical(800.0));
    let mut rx = engine.subscribe();

    engine.touch_start(clock.sample(10.0, 10.0, 0));
    // Below the direction lock threshold: ignored.
    engine.touch_move(clock.sample(12.0, 13.0, 5));
    engine.touch_end(clock.at(40));

    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.y(), 0.0);
    let events = drain(&mut rx);
    assert_eq!(count(&events, EventKind::ScrollCancel), 1);
    assert_eq!(count(&events, EventKind::ScrollStart), 0);
    assert_eq!(count(&events, EventKind::ScrollEnd), 0);
}

#[test]
fn vertical_lock_ignores_horizontal_travel() {
    let clock = Clock::new();
    let config = ScrollConfig {
        scroll_x: true,
        ..ScrollConfig::default()
    };
    let measurer = StaticMeasurer::new(
        AxisBounds::new(-300.0, 0.0),
        AxisBounds::new(-800.0, 0.0),
    );
    let mut engine = engine(config, measurer);

    engine.touch_start(clock.sample(100.0, 100.0, 0));
    engine.touch_move(clock.sample(97.0, 80.0, 10));
    engine.touch_move(clock.sample(60.0, 70.0, 20));

    assert_eq!(engine.position(), Point::new(0.0, -30.0));
}

#[test]
fn free_scroll_moves_both_axes() {
    let clock = Clock::new();
    let config = ScrollConfig {
        scroll_x: true,
        free_scroll: true,
        ..ScrollConfig::default()
    };
    let measurer = StaticMeasurer::new(
        AxisBounds::new(-300.0, 0.0),
        AxisBounds::new(-800.0, 0.0),
    );
    let mut engine = engine(config, measurer);

    engine.touch_start(clock.sample(100.0, 100.0, 0));
    engine.touch_move(clock.sample(80.0, 60.0, 10));

    assert_eq!(engine.position(), Point::new(-20.0, -40.0));
}

#[test]
fn passthrough_axis_hands_the_gesture_back() {
    let clock = Clock::new();
    let config = ScrollConfig {
        event_passthrough: Passthrough::Horizontal,
        ..ScrollConfig::default()
    };
    let mut engine = engine(config, StaticMeasurer::vertical(800.0));
    let mut rx = engine.subscribe();

    engine.touch_start(clock.sample(100.0, 100.0, 0));
    engine.touch_move(clock.sample(60.0, 102.0, 10));
    engine.touch_move(clock.sample(40.0, 40.0, 20));
    engine.touch_end(clock.at(30));

    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.y(), 0.0);
    let events = drain(&mut rx);
    assert_eq!(count(&events, EventKind::ScrollStart), 0);
    assert_eq!(count(&events, EventKind::TouchEnd), 0);
}

#[test]
fn drag_past_edge_is_resisted_then_bounces_back() {
    let clock = Clock::new();
    let mut engine = engine(ScrollConfig::default(), StaticMeasurer::vertical(800.0));

    engine.touch_start(clock.sample(0.0, 0.0, 0));
    engine.touch_move(clock.sample(0.0, 90.0, 10));
    assert_eq!(engine.y(), 30.0);

    engine.touch_end(clock.at(1_000));
    assert_eq!(engine.phase(), Phase::Bouncing);

    let done = settle(&mut engine, &clock, 1_000);
    assert!(done >= 1_800);
    assert_eq!(engine.y(), 0.0);
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn hard_edge_clamps_drags() {
    let clock = Clock::new();
    let config = ScrollConfig {
        bounce: Toggle::Flag(false),
        ..ScrollConfig::default()
    };
    let mut engine = engine(config, StaticMeasurer::vertical(800.0));

    engine.touch_start(clock.sample(0.0, 0.0, 0));
    engine.touch_move(clock.sample(0.0, 90.0, 10));
    assert_eq!(engine.y(), 0.0);
}

#[test]
fn fast_swipe_decelerates_then_bounces_off_the_bottom() {
    let clock = Clock::new();
    let mut engine = engine(ScrollConfig::default(), StaticMeasurer::vertical(2_000.0));

    engine.touch_start(clock.sample(0.0, 400.0, 0));
    engine.touch_move(clock.sample(0.0, 350.0, 10));
    engine.touch_move(clock.sample(0.0, 300.0, 20));
    engine.touch_move(clock.sample(0.0, 250.0, 30));
    engine.touch_end(clock.at(30));

    // 5 px/ms projects far past the bottom; the overshoot is capped at a
    // quarter of the viewport.
    assert_eq!(engine.phase(), Phase::Decelerating);
    engine.tick(clock.at(30));
    engine.tick(clock.at(530));
    assert_eq!(engine.y(), -2_120.0);
    assert_eq!(engine.phase(), Phase::Bouncing);

    engine.tick(clock.at(1_330));
    assert_eq!(engine.y(), -2_000.0);
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn momentum_is_skipped_without_enough_travel() {
    let clock = Clock::new();
    let mut engine = engine(ScrollConfig::default(), StaticMeasurer::vertical(2_000.0));
    let mut rx = engine.subscribe();

    engine.touch_start(clock.sample(0.0, 400.0, 0));
    engine.touch_move(clock.sample(0.0, 394.0, 10));
    engine.touch_move(clock.sample(0.0, 390.0, 20));
    engine.touch_end(clock.at(25));

    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.y(), -10.0);
    let events = drain(&mut rx);
    assert_eq!(count(&events, EventKind::Flick), 1);
}

#[test]
fn resting_before_release_slows_the_glide() {
    let clock = Clock::new();
    let mut engine = engine(ScrollConfig::default(), StaticMeasurer::vertical(2_000.0));

    // 100 px in 20 ms, then the finger holds still for 250 ms.
    engine.touch_start(clock.sample(0.0, 400.0, 0));
    engine.touch_move(clock.sample(0.0, 350.0, 10));
    engine.touch_move(clock.sample(0.0, 300.0, 20));
    engine.touch_end(clock.at(270));

    // 100 px over 270 ms glides about 247 px, not the 3333 px a 5 px/ms
    // release would.
    settle(&mut engine, &clock, 270);
    assert_eq!(engine.y(), -347.0);
    assert_eq!(engine.phase(), Phase::Idle);

    // Lifting after the whole window has passed does not glide at all.
    let mut rx = engine.subscribe();
    engine.touch_start(clock.sample(0.0, 400.0, 5_000));
    engine.touch_move(clock.sample(0.0, 300.0, 5_020));
    engine.touch_end(clock.at(5_400));
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.y(), -447.0);
    assert!(!engine.is_animating());
    let events = drain(&mut rx);
    assert_eq!(count(&events, EventKind::ScrollEnd), 1);
}

#[test]
fn grabbing_an_animation_freezes_it() {
    let clock = Clock::new();
    let mut engine = engine(ScrollConfig::default(), StaticMeasurer::vertical(1_000.0));
    engine.scroll_to(
        Point::new(0.0, -500.0),
        Duration::from_millis(1_000),
        Default::default(),
    );
    engine.tick(clock.at(0));
    engine.tick(clock.at(500));
    let mut rx = engine.subscribe();
    let frozen = engine.position().round();

    engine.touch_start(clock.sample(0.0, 0.0, 500));

    assert!(!engine.is_animating());
    assert_eq!(engine.phase(), Phase::Dragging);
    assert_eq!(engine.position(), frozen);
    let events = drain(&mut rx);
    assert_eq!(
        events,
        vec![ScrollEvent::ScrollEnd(frozen), ScrollEvent::BeforeScrollStart]
    );

    // Later ticks no longer move the content.
    engine.tick(clock.at(900));
    assert_eq!(engine.position(), frozen);
}

#[test]
fn disable_mid_drag_freezes_until_the_next_gesture() {
    let clock = Clock::new();
    let mut engine = engine(ScrollConfig::default(), StaticMeasurer::vertical(800.0));

    engine.touch_start(clock.sample(0.0, 0.0, 0));
    engine.touch_move(clock.sample(0.0, -30.0, 10));
    assert_eq!(engine.y(), -30.0);

    engine.disable();
    engine.touch_move(clock.sample(0.0, -80.0, 20));
    assert_eq!(engine.y(), -30.0);

    engine.enable();
    assert_eq!(engine.phase(), Phase::Idle);
    // The stale gesture was settled; its remaining samples are ignored.
    engine.touch_move(clock.sample(0.0, -120.0, 30));
    engine.touch_end(clock.at(40));
    assert_eq!(engine.y(), -30.0);

    engine.touch_start(clock.sample(0.0, 0.0, 100));
    engine.touch_move(clock.sample(0.0, -20.0, 110));
    assert_eq!(engine.y(), -50.0);
}

#[test]
fn out_of_order_samples_are_dropped() {
    let clock = Clock::new();
    let mut engine = engine(ScrollConfig::default(), StaticMeasurer::vertical(800.0));

    engine.touch_start(clock.sample(0.0, 0.0, 100));
    engine.touch_move(clock.sample(0.0, -20.0, 120));
    engine.touch_move(clock.sample(0.0, -60.0, 110));

    assert_eq!(engine.y(), -20.0);
}

#[test]
fn pull_down_holds_at_stop_until_finished() {
    let clock = Clock::new();
    let config = ScrollConfig {
        pull_down_refresh: Toggle::Custom(PullDownConfig {
            threshold: 50.0,
            stop: 20.0,
        }),
        ..ScrollConfig::default()
    };
    let mut engine = engine(config, StaticMeasurer::vertical(1_000.0));
    let mut rx = engine.subscribe();

    // 240 px of pointer travel past the top edge shows as 80 px of overflow.
    engine.touch_start(clock.sample(0.0, 0.0, 0));
    engine.touch_move(clock.sample(0.0, 240.0, 10));
    assert_eq!(engine.y(), 80.0);
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Armed));

    engine.touch_end(clock.at(1_000));
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Waiting));
    settle(&mut engine, &clock, 1_000);

    assert_eq!(engine.y(), 20.0);
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Waiting));
    let events = drain(&mut rx);
    assert_eq!(count(&events, EventKind::PullingDown), 1);

    // A second drag while waiting settles back on the hold.
    engine.touch_start(clock.sample(0.0, 0.0, 3_000));
    engine.touch_move(clock.sample(0.0, 30.0, 3_010));
    engine.touch_end(clock.at(4_000));
    settle(&mut engine, &clock, 4_000);
    assert_eq!(engine.y(), 20.0);
    assert_eq!(count(&drain(&mut rx), EventKind::PullingDown), 0);

    assert!(engine.finish_pull_down());
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Idle));
    settle(&mut engine, &clock, 6_000);
    assert_eq!(engine.y(), 0.0);
    assert!(!engine.finish_pull_down());
}

#[test]
fn pull_down_below_threshold_bounces_fully_back() {
    let clock = Clock::new();
    let config = ScrollConfig {
        pull_down_refresh: Toggle::Custom(PullDownConfig {
            threshold: 50.0,
            stop: 20.0,
        }),
        ..ScrollConfig::default()
    };
    let mut engine = engine(config, StaticMeasurer::vertical(1_000.0));
    let mut rx = engine.subscribe();

    engine.touch_start(clock.sample(0.0, 0.0, 0));
    engine.touch_move(clock.sample(0.0, 120.0, 10));
    engine.touch_end(clock.at(1_000));
    settle(&mut engine, &clock, 1_000);

    assert_eq!(engine.y(), 0.0);
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Idle));
    assert_eq!(count(&drain(&mut rx), EventKind::PullingDown), 0);
}

fn pull_down_list() -> ScrollConfig {
    ScrollConfig {
        pull_down_refresh: Toggle::Custom(PullDownConfig {
            threshold: 50.0,
            stop: 20.0,
        }),
        ..ScrollConfig::default()
    }
}

fn tap(engine: &mut support::Engine, clock: &Clock, ms: u64) {
    engine.touch_start(clock.sample(0.0, 0.0, ms));
    engine.touch_end(clock.at(ms + 40));
}

#[test]
fn pull_down_disarms_when_disable_abandons_the_drag() {
    let clock = Clock::new();
    let mut engine = engine(pull_down_list(), StaticMeasurer::vertical(1_000.0));
    let mut rx = engine.subscribe();

    engine.touch_start(clock.sample(0.0, 0.0, 0));
    engine.touch_move(clock.sample(0.0, 240.0, 10));
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Armed));

    engine.disable();
    engine.enable();
    settle(&mut engine, &clock, 100);
    assert_eq!(engine.y(), 0.0);
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Idle));
    drain(&mut rx);

    tap(&mut engine, &clock, 2_000);
    let events = drain(&mut rx);
    assert_eq!(count(&events, EventKind::PullingDown), 0);
    assert_eq!(count(&events, EventKind::ScrollCancel), 1);
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Idle));
    assert_eq!(engine.y(), 0.0);
}

#[test]
fn pull_down_disarms_when_a_command_takes_over_the_drag() {
    let clock = Clock::new();
    let mut engine = engine(pull_down_list(), StaticMeasurer::vertical(1_000.0));
    let mut rx = engine.subscribe();

    engine.touch_start(clock.sample(0.0, 0.0, 0));
    engine.touch_move(clock.sample(0.0, 240.0, 10));
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Armed));

    engine.scroll_to(Point::new(0.0, -300.0), Duration::ZERO, Default::default());
    assert_eq!(engine.y(), -300.0);
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Idle));

    // The rest of the taken-over drag is ignored.
    engine.touch_end(clock.at(50));
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Idle));
    assert_eq!(count(&drain(&mut rx), EventKind::PullingDown), 0);
}

#[test]
fn a_tap_never_starts_a_refresh() {
    let clock = Clock::new();
    let mut engine = engine(pull_down_list(), StaticMeasurer::vertical(1_000.0));
    let mut rx = engine.subscribe();

    // The host lost the release of an armed drag; the next pointer-down
    // starts over.
    engine.touch_start(clock.sample(0.0, 0.0, 0));
    engine.touch_move(clock.sample(0.0, 240.0, 10));
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Armed));

    tap(&mut engine, &clock, 500);
    settle(&mut engine, &clock, 540);

    let events = drain(&mut rx);
    assert_eq!(count(&events, EventKind::PullingDown), 0);
    assert_eq!(count(&events, EventKind::ScrollCancel), 1);
    assert_eq!(engine.pull_down_state(), Some(PullDownState::Idle));
    assert_eq!(engine.y(), 0.0);
}
