use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use rounded_button::prelude::*;
use rounded_button::text::MonospaceMeasurer;

const FRAME_STEP: Duration = Duration::from_millis(16);

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
    set_text_measurer(MonospaceMeasurer::new(0.5));
}

/// A 100ms linear button at the default frame, counting taps
fn counting_button() -> (RoundedButton, Rc<Cell<u32>>) {
    let config = ButtonConfig::new().tap_animation_duration(Duration::from_millis(100));
    let mut button = RoundedButton::with_config(config);
    let taps = Rc::new(Cell::new(0));
    let counter = taps.clone();
    button.set_tapped_handler(move || counter.set(counter.get() + 1));
    (button, taps)
}

fn down(button: &mut RoundedButton, x: f32, y: f32) -> EventResponse {
    button.event(&Event::PointerDown { x, y })
}

fn up(button: &mut RoundedButton, x: f32, y: f32) -> EventResponse {
    button.event(&Event::PointerUp { x, y })
}

fn settle(button: &mut RoundedButton) {
    for _ in 0..1000 {
        if !button.advance_animations(FRAME_STEP) {
            return;
        }
    }
    panic!("animation never settled");
}

#[test]
fn tap_runs_handler_once_after_reaching_rest() {
    setup();
    let (mut button, taps) = counting_button();

    assert_eq!(down(&mut button, 20.0, 20.0), EventResponse::Handled);
    assert_eq!(button.interaction_state(), InteractionState::Pressed);
    settle(&mut button);
    assert_eq!(button.press_progress(), 1.0);

    assert_eq!(up(&mut button, 20.0, 20.0), EventResponse::Handled);
    assert_eq!(taps.get(), 0);
    assert_eq!(button.interaction_state(), InteractionState::Pressed);

    settle(&mut button);
    assert_eq!(taps.get(), 1);
    assert_eq!(button.interaction_state(), InteractionState::Idle);

    let presentation = button.presentation();
    assert_eq!(presentation.content_alpha, 1.0);
    assert_eq!(presentation.content_scale, 1.0);
    assert_eq!(presentation.background, Background::Solid(Color::SYSTEM_BLUE));
}

#[test]
fn handler_sees_button_at_rest() {
    setup();
    let mut button = RoundedButton::new();
    button.set_tap_animation_duration(Duration::from_millis(50));
    let container = button.content_view();
    let observed = Rc::new(Cell::new(None));
    let sink = observed.clone();
    button.set_tapped_handler(move || {
        let container = container.borrow();
        sink.set(Some((container.alpha(), container.transform().is_identity())));
    });

    down(&mut button, 5.0, 5.0);
    settle(&mut button);
    up(&mut button, 5.0, 5.0);
    settle(&mut button);

    assert_eq!(observed.get(), Some((1.0, true)));
}

#[test]
fn drag_out_cancels_without_tap() {
    setup();
    let (mut button, taps) = counting_button();

    down(&mut button, 20.0, 20.0);
    button.advance_animations(Duration::from_millis(50));
    button.event(&Event::PointerMove { x: 20.0, y: 200.0 });
    assert_eq!(button.interaction_state(), InteractionState::Cancelling);

    settle(&mut button);
    assert_eq!(button.interaction_state(), InteractionState::Idle);

    up(&mut button, 20.0, 20.0);
    settle(&mut button);
    assert_eq!(taps.get(), 0);
}

#[test]
fn release_outside_and_host_cancel_do_not_tap() {
    setup();
    let (mut button, taps) = counting_button();

    down(&mut button, 20.0, 20.0);
    up(&mut button, 400.0, 20.0);
    assert_eq!(button.interaction_state(), InteractionState::Cancelling);
    settle(&mut button);

    down(&mut button, 20.0, 20.0);
    assert_eq!(button.event(&Event::PointerCancel), EventResponse::Handled);
    assert_eq!(button.interaction_state(), InteractionState::Cancelling);
    settle(&mut button);

    assert_eq!(button.interaction_state(), InteractionState::Idle);
    assert_eq!(taps.get(), 0);
}

#[test]
fn zero_duration_taps_during_dispatch() {
    setup();
    let (mut button, taps) = counting_button();
    button.set_tap_animation_duration(Duration::ZERO);

    down(&mut button, 20.0, 20.0);
    let pressed = button.presentation();
    assert_eq!(pressed.content_alpha, 0.5);
    assert_eq!(pressed.content_scale, 0.97);
    assert!(!button.is_animating());

    up(&mut button, 20.0, 20.0);
    assert_eq!(taps.get(), 1);
    assert_eq!(button.interaction_state(), InteractionState::Idle);
    assert_eq!(button.presentation().content_alpha, 1.0);
}

#[test]
fn rapid_double_tap_fires_once_without_snapping() {
    setup();
    let (mut button, taps) = counting_button();

    down(&mut button, 20.0, 20.0);
    settle(&mut button);
    up(&mut button, 20.0, 20.0);
    button.advance_animations(Duration::from_millis(30));
    let before = button.presentation();
    assert!(before.content_alpha > 0.5 && before.content_alpha < 1.0);

    // Second tap lands while the reverse is still running
    down(&mut button, 20.0, 20.0);
    assert_eq!(button.presentation(), before);

    button.advance_animations(FRAME_STEP);
    let after = button.presentation();
    assert!(after.content_alpha < before.content_alpha);

    up(&mut button, 20.0, 20.0);
    settle(&mut button);
    assert_eq!(taps.get(), 1);
    assert_eq!(button.interaction_state(), InteractionState::Idle);
}

#[test]
fn presses_outside_or_while_held_are_ignored() {
    setup();
    let (mut button, taps) = counting_button();

    assert_eq!(down(&mut button, -1.0, 10.0), EventResponse::Ignored);
    assert_eq!(down(&mut button, 288.0, 10.0), EventResponse::Ignored);
    assert_eq!(up(&mut button, 10.0, 10.0), EventResponse::Ignored);

    down(&mut button, 10.0, 10.0);
    assert_eq!(down(&mut button, 30.0, 30.0), EventResponse::Ignored);
    up(&mut button, 10.0, 10.0);
    settle(&mut button);
    assert_eq!(taps.get(), 1);
}

#[test]
fn hit_test_follows_frame_not_content() {
    setup();
    let (mut button, _) = counting_button();
    button.set_frame(Rect::new(100.0, 100.0, 200.0, 60.0));

    // Inside the insets, outside the content area
    assert_eq!(down(&mut button, 102.0, 102.0), EventResponse::Handled);
    up(&mut button, 102.0, 102.0);
    settle(&mut button);

    assert_eq!(down(&mut button, 50.0, 50.0), EventResponse::Ignored);
}

#[test]
fn pressed_background_uses_brightness_offset() {
    setup();
    let mut button = RoundedButton::new();
    button.set_tap_animation_duration(Duration::ZERO);
    button.set_background_color(Color::rgb(0.0, 0.0, 0.8));

    down(&mut button, 10.0, 10.0);
    let tint = button.presentation().background.tint();
    assert!((tint.b - 0.7).abs() < 1e-4);

    button.set_tapped_tint_color(Some(Color::rgb(1.0, 0.0, 0.0)));
    assert_eq!(
        button.presentation().background,
        Background::Solid(Color::rgb(1.0, 0.0, 0.0))
    );

    button.set_tapped_tint_color(None);
    button.set_translucent(true);
    let background = button.presentation().background;
    assert!(background.is_translucent());
    assert!((background.tint().b - 0.7).abs() < 1e-4);
}

#[test]
fn content_container_receives_presentation() {
    setup();
    let mut button = RoundedButton::new();
    button.set_tap_animation_duration(Duration::ZERO);

    down(&mut button, 10.0, 10.0);
    let container = button.content_view();
    assert_eq!(container.borrow().alpha(), 0.5);

    let transform = container.borrow().transform();
    let (cx, cy) = button.bounds().center();
    assert_eq!(transform, button.presentation().content_transform);
    let (px, py) = transform.transform_point(cx, cy);
    assert!((px - cx).abs() < 1e-3 && (py - cy).abs() < 1e-3);
}

#[test]
fn frame_clock_drives_animation() {
    setup();
    let (mut button, taps) = counting_button();
    let mut clock = FrameClock::new();
    let start = std::time::Instant::now();

    down(&mut button, 10.0, 10.0);
    up(&mut button, 10.0, 10.0);

    let mut now = start;
    assert!(button.advance_animations(clock.tick(now)));
    while button.advance_animations(clock.tick(now)) {
        now += FRAME_STEP;
    }
    assert_eq!(taps.get(), 1);
}

#[test]
fn completed_tap_fires_when_repress_is_cancelled() {
    setup();
    let (mut button, taps) = counting_button();

    down(&mut button, 20.0, 20.0);
    settle(&mut button);
    up(&mut button, 20.0, 20.0);
    button.advance_animations(Duration::from_millis(30));

    down(&mut button, 20.0, 20.0);
    button.event(&Event::PointerCancel);
    settle(&mut button);

    assert_eq!(taps.get(), 1);
    assert_eq!(button.interaction_state(), InteractionState::Idle);
}

#[test]
fn press_curve_follows_configured_timing() {
    setup();
    let halfway_alpha = |timing: TimingFunction| {
        let config = ButtonConfig::new()
            .tap_animation_duration(Duration::from_millis(100))
            .tap_animation_timing(timing);
        let mut button = RoundedButton::with_config(config);
        down(&mut button, 10.0, 10.0);
        button.advance_animations(Duration::from_millis(50));
        button.presentation().content_alpha
    };

    assert!((halfway_alpha(TimingFunction::Linear) - 0.75).abs() < 1e-4);
    assert!((halfway_alpha(TimingFunction::EaseIn) - 0.875).abs() < 1e-4);
    assert!((halfway_alpha(TimingFunction::EaseOut) - 0.625).abs() < 1e-4);
    assert!((halfway_alpha(TimingFunction::EaseInOut) - 0.75).abs() < 1e-4);
    assert!((halfway_alpha(TimingFunction::custom(|t| t)) - 0.75).abs() < 1e-4);
    assert!(halfway_alpha(TimingFunction::CubicBezier(0.42, 0.0, 0.58, 1.0)) < 1.0);
}

#[test]
fn timing_change_applies_to_next_press() {
    setup();
    let mut button = RoundedButton::new();
    assert_eq!(button.tap_animation_timing(), &TimingFunction::EaseOut);
    button.set_tap_animation_duration(Duration::from_millis(100));
    button.set_tap_animation_timing(TimingFunction::Linear);

    down(&mut button, 10.0, 10.0);
    button.advance_animations(Duration::from_millis(25));
    assert!((button.press_progress() - 0.25).abs() < 1e-4);
}
