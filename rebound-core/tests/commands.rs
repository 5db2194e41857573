mod support;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rebound_config::{ProbeMode, PullUpConfig, ScrollConfig, ScrollOptions, Toggle};
use rebound_core::{
    ElementOffset, EngineError, EventKind, Phase, ScrollEvent, TargetError,
};
use rebound_model::{AxisBounds, Easing, Point, Rect};

use support::{Clock, Engine, StaticMeasurer, count, drain, engine, settle};

fn list() -> Engine {
    engine(ScrollConfig::default(), StaticMeasurer::vertical(1_000.0))
}

#[test]
fn zero_duration_scroll_jumps_and_ends() {
    let mut engine = list();
    let mut rx = engine.subscribe();

    engine.scroll_to(Point::new(0.0, -250.0), Duration::ZERO, Easing::Linear);

    assert_eq!(engine.y(), -250.0);
    assert!(!engine.is_animating());
    assert_eq!(
        drain(&mut rx),
        vec![
            ScrollEvent::Scroll(Point::new(0.0, -250.0)),
            ScrollEvent::ScrollEnd(Point::new(0.0, -250.0)),
        ]
    );
}

#[test]
fn programmatic_scroll_starts_on_the_next_tick() {
    let clock = Clock::new();
    let mut engine = list();

    engine.scroll_by(
        Point::new(0.0, -400.0),
        Duration::from_millis(400),
        Easing::Linear,
    );
    assert_eq!(engine.phase(), Phase::Scrolling);

    // The first frame binds the start instant and reports the start.
    engine.tick(clock.at(1_000));
    assert_eq!(engine.y(), 0.0);
    engine.tick(clock.at(1_200));
    assert_eq!(engine.y(), -200.0);
    assert!(!engine.tick(clock.at(1_400)));
    assert_eq!(engine.y(), -400.0);
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn out_of_bounds_scroll_bounces_back() {
    let clock = Clock::new();
    let mut engine = list();

    engine.scroll_to(Point::new(0.0, 60.0), Duration::ZERO, Easing::Linear);
    assert_eq!(engine.phase(), Phase::Bouncing);
    settle(&mut engine, &clock, 0);
    assert_eq!(engine.y(), 0.0);
}

#[test]
fn stop_freezes_the_running_animation() {
    let clock = Clock::new();
    let mut engine = list();
    engine.scroll_to(
        Point::new(0.0, -500.0),
        Duration::from_millis(1_000),
        Easing::Linear,
    );
    engine.tick(clock.at(0));
    engine.tick(clock.at(250));
    let mut rx = engine.subscribe();

    engine.stop();

    assert_eq!(engine.y(), -125.0);
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(
        drain(&mut rx),
        vec![ScrollEvent::ScrollEnd(Point::new(0.0, -125.0))]
    );
    engine.tick(clock.at(600));
    assert_eq!(engine.y(), -125.0);

    // Nothing to stop.
    engine.stop();
    assert!(drain(&mut rx).is_empty());
}

fn with_footer() -> Engine {
    engine(
        ScrollConfig::default(),
        StaticMeasurer::vertical(1_000.0)
            .with_element("footer", Rect::new(0.0, 700.0, 320.0, 100.0)),
    )
}

#[test]
fn scroll_to_element_aligns_edges_and_centres() {
    let clock = Clock::new();
    let mut engine = with_footer();

    engine
        .scroll_to_element(
            &"footer",
            Some(Duration::ZERO),
            ElementOffset::None,
            ElementOffset::None,
            None,
        )
        .unwrap();
    assert_eq!(engine.y(), -700.0);

    engine
        .scroll_to_element(
            &"footer",
            Some(Duration::ZERO),
            ElementOffset::None,
            ElementOffset::Pixels(50.0),
            None,
        )
        .unwrap();
    assert_eq!(engine.y(), -750.0);

    // (100 - 480) / 2 = -190 px: the element sits mid-viewport.
    engine
        .scroll_to_element(
            &"footer",
            None,
            ElementOffset::None,
            ElementOffset::Center,
            Some(Easing::QuadOut),
        )
        .unwrap();
    assert!(engine.is_animating());
    settle(&mut engine, &clock, 0);
    assert_eq!(engine.y(), -510.0);
}

#[test]
fn scroll_to_element_clamps_and_reports_missing_elements() {
    let mut engine = engine(
        ScrollConfig::default(),
        StaticMeasurer::vertical(1_000.0)
            .with_element("tail", Rect::new(0.0, 1_300.0, 320.0, 180.0)),
    );

    engine
        .scroll_to_element(
            &"tail",
            Some(Duration::ZERO),
            ElementOffset::None,
            ElementOffset::None,
            None,
        )
        .unwrap();
    assert_eq!(engine.y(), -1_000.0);

    let err = engine
        .scroll_to_element(
            &"missing",
            None,
            ElementOffset::None,
            ElementOffset::None,
            None,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidTarget(TargetError::ElementNotFound)
    ));
    assert_eq!(engine.y(), -1_000.0);
}

#[test]
fn refresh_replans_an_animation_whose_target_was_cut_off() {
    let clock = Clock::new();
    let mut engine = list();
    let mut rx = engine.subscribe();
    engine.scroll_to(
        Point::new(0.0, -900.0),
        Duration::from_millis(1_000),
        Easing::Linear,
    );
    engine.tick(clock.at(0));
    engine.tick(clock.at(500));
    assert_eq!(engine.y(), -450.0);

    engine.measurer_mut().y = AxisBounds::new(-600.0, 0.0);
    engine.refresh().unwrap();
    assert!(engine.is_animating());

    let done = settle(&mut engine, &clock, 516);
    assert!(done <= 1_100, "replanned over the remaining time, done at {done}");
    assert_eq!(engine.y(), -600.0);
    assert_eq!(count(&drain(&mut rx), EventKind::Refresh), 1);
}

#[test]
fn refresh_replans_an_overshoot_whose_bounce_point_was_cut_off() {
    let clock = Clock::new();
    let mut engine = engine(ScrollConfig::default(), StaticMeasurer::vertical(2_000.0));

    // A fast swipe heading for an overshoot past the -2000 bound.
    engine.touch_start(clock.sample(0.0, 400.0, 0));
    engine.touch_move(clock.sample(0.0, 350.0, 10));
    engine.touch_move(clock.sample(0.0, 300.0, 20));
    engine.touch_move(clock.sample(0.0, 250.0, 30));
    engine.touch_end(clock.at(30));
    assert_eq!(engine.phase(), Phase::Decelerating);
    engine.tick(clock.at(30));
    engine.tick(clock.at(50));
    assert!(engine.y() > -600.0);

    engine.measurer_mut().y = AxisBounds::new(-600.0, 0.0);
    engine.refresh().unwrap();
    assert!(engine.is_animating());

    settle(&mut engine, &clock, 66);
    assert_eq!(engine.y(), -600.0);
    assert_eq!(engine.phase(), Phase::Idle);
    let deepest = engine
        .renderer()
        .frames
        .iter()
        .map(|frame| frame.y)
        .fold(f32::INFINITY, f32::min);
    assert!(deepest >= -600.0, "content went to {deepest} past the new bound");
}

#[test]
fn refresh_at_rest_clamps_into_the_new_bounds() {
    let mut engine = list();
    engine.scroll_to(Point::new(0.0, -900.0), Duration::ZERO, Easing::Linear);

    engine.measurer_mut().y = AxisBounds::new(-600.0, 0.0);
    engine.refresh().unwrap();

    assert_eq!(engine.y(), -600.0);
    assert!(!engine.is_animating());
}

#[test]
fn refresh_rejects_inverted_bounds() {
    let mut engine = list();
    engine.measurer_mut().y = AxisBounds::new(10.0, 0.0);

    assert!(matches!(
        engine.refresh(),
        Err(EngineError::InvalidBounds { .. })
    ));
}

#[test]
fn construction_rejects_invalid_configuration() {
    let config = ScrollConfig {
        deceleration: 0.0,
        ..ScrollConfig::default()
    };
    let result = rebound_core::ScrollEngine::with_config(
        &config,
        StaticMeasurer::vertical(100.0),
        support::RecordingRenderer::default(),
    );
    assert!(matches!(result, Err(EngineError::Config(_))));
}

#[test]
fn construction_rejects_hand_built_options_out_of_range() {
    let build = |options: ScrollOptions| {
        rebound_core::ScrollEngine::new(
            options,
            StaticMeasurer::vertical(100.0),
            support::RecordingRenderer::default(),
        )
    };

    let mut options = ScrollOptions::default();
    options.bounce.resistance = 0.0;
    assert!(matches!(build(options), Err(EngineError::Config(_))));

    let mut options = ScrollOptions::default();
    options.momentum.deceleration = -1.0;
    assert!(matches!(build(options), Err(EngineError::Config(_))));

    assert!(build(ScrollOptions::default()).is_ok());
}

#[test]
fn callback_listeners_follow_on_once_off() {
    let mut engine = list();
    let ends = Rc::new(RefCell::new(Vec::new()));
    let starts = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&ends);
    let id = engine.on(EventKind::ScrollEnd, move |event| {
        sink.borrow_mut().push(event.position());
    });
    let counter = Rc::clone(&starts);
    engine.once(EventKind::ScrollEnd, move |_| *counter.borrow_mut() += 1);
    assert_eq!(engine.listener_count(EventKind::ScrollEnd), 2);

    engine.scroll_to(Point::new(0.0, -10.0), Duration::ZERO, Easing::Linear);
    engine.scroll_to(Point::new(0.0, -20.0), Duration::ZERO, Easing::Linear);
    assert_eq!(*starts.borrow(), 1);
    assert_eq!(engine.listener_count(EventKind::ScrollEnd), 1);

    assert!(engine.off(id));
    assert!(!engine.off(id));
    engine.scroll_to(Point::new(0.0, -30.0), Duration::ZERO, Easing::Linear);

    assert_eq!(
        *ends.borrow(),
        vec![Some(Point::new(0.0, -10.0)), Some(Point::new(0.0, -20.0))]
    );
}

#[test]
fn destroy_publishes_and_returns_collaborators() {
    let mut engine = list();
    let mut rx = engine.subscribe();
    engine.on(EventKind::Destroy, |_| {});

    let (measurer, renderer) = engine.destroy();

    assert_eq!(drain(&mut rx), vec![ScrollEvent::Destroy]);
    assert_eq!(measurer.y, AxisBounds::new(-1_000.0, 0.0));
    assert_eq!(renderer.frames, vec![Point::ZERO]);
}

#[test]
fn pull_up_fires_once_per_load() {
    let config = ScrollConfig {
        pull_up_load: Toggle::Custom(PullUpConfig { threshold: 30.0 }),
        ..ScrollConfig::default()
    };
    let mut engine = engine(config, StaticMeasurer::vertical(1_000.0));
    let mut rx = engine.subscribe();
    let jump = |engine: &mut Engine, y: f32| {
        engine.scroll_to(Point::new(0.0, y), Duration::ZERO, Easing::Linear)
    };

    jump(&mut engine, -960.0);
    assert_eq!(count(&drain(&mut rx), EventKind::PullingUp), 0);
    jump(&mut engine, -980.0);
    jump(&mut engine, -990.0);
    assert_eq!(count(&drain(&mut rx), EventKind::PullingUp), 1);

    assert!(engine.finish_pull_up());
    assert!(!engine.finish_pull_up());
    jump(&mut engine, -500.0);
    jump(&mut engine, -985.0);
    assert_eq!(count(&drain(&mut rx), EventKind::PullingUp), 1);
}

fn probed(probe: ProbeMode) -> Engine {
    let config = ScrollConfig {
        probe,
        ..ScrollConfig::default()
    };
    engine(config, StaticMeasurer::vertical(1_000.0))
}

fn drag_and_animate(engine: &mut Engine) -> (usize, usize) {
    let clock = Clock::new();
    let mut rx = engine.subscribe();

    engine.touch_start(clock.sample(0.0, 500.0, 0));
    engine.touch_move(clock.sample(0.0, 490.0, 10));
    engine.touch_move(clock.sample(0.0, 480.0, 20));
    engine.touch_move(clock.sample(0.0, 470.0, 400));
    engine.touch_end(clock.at(2_000));
    let while_dragging = count(&drain(&mut rx), EventKind::Scroll);

    engine.scroll_to(
        Point::new(0.0, -300.0),
        Duration::from_millis(100),
        Easing::Linear,
    );
    settle(engine, &clock, 3_000);
    let while_animating = count(&drain(&mut rx), EventKind::Scroll);
    (while_dragging, while_animating)
}

#[test]
fn probe_mode_filters_scroll_events() {
    assert_eq!(drag_and_animate(&mut probed(ProbeMode::Off)), (0, 0));
    assert_eq!(drag_and_animate(&mut probed(ProbeMode::Throttled)), (1, 0));
    assert_eq!(drag_and_animate(&mut probed(ProbeMode::Drag)), (3, 0));

    let (dragging, animating) = drag_and_animate(&mut probed(ProbeMode::Realtime));
    assert_eq!(dragging, 3);
    assert!(animating >= 2, "every frame publishes, got {animating}");
}
