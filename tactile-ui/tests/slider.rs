mod common;

use common::Recorder;
use tactile_ui::widgets::Slider;
use tactile_ui::{Color, Rect, UiAction};

fn plain() -> Slider {
    Slider::new((0, 0), (200, 10))
}

#[test]
fn progress_follows_pointer_linearly() {
    let mut s = plain();
    assert_eq!(s.update(100.0, 5.0, true), UiAction::Progress(50));
    assert_eq!(s.get_progress(), 50);
    s.update(0.0, 5.0, true);
    assert_eq!(s.get_progress(), 0);
    s.update(103.0, 5.0, true);
    assert_eq!(s.get_progress(), 52);
}

#[test]
fn half_steps_round_to_even() {
    let mut s = plain();
    for (x, expected) in [(1.0, 0), (3.0, 2), (5.0, 2), (99.0, 50), (101.0, 50), (199.0, 100)] {
        s.update(x, 5.0, true);
        assert_eq!(s.get_progress(), expected, "x={x}");
    }
}

#[test]
fn catch_margin_clamps_overshoot() {
    let mut s = plain();
    s.update(209.0, 5.0, true);
    assert_eq!(s.get_progress(), 100);
    s.update(-10.0, 5.0, true);
    assert_eq!(s.get_progress(), 0);
}

#[test]
fn pointer_beyond_catch_margin_is_ignored() {
    let mut s = plain();
    s.update(100.0, 5.0, true);
    assert_eq!(s.update(250.0, 5.0, true), UiAction::None);
    assert_eq!(s.get_progress(), 50);
    assert!(!s.is_touched());
}

#[test]
fn clamp_holds_for_any_drag() {
    let mut s = plain();
    let mut x = -40.0;
    while x < 260.0 {
        for y in [-25.0, -20.0, 0.0, 29.0, 30.0] {
            s.update(x, y, true);
            assert!((0..=100).contains(&s.get_progress()), "x={x} y={y}");
        }
        x += 3.5;
    }
}

#[test]
fn vertical_catch_margin_is_half_open() {
    let mut s = plain();
    assert_eq!(s.hit_rect(), Rect::new(-10.0, -20.0, 220.0, 50.0));

    s.update(40.0, -20.0, true);
    assert!(s.is_touched());
    assert_eq!(s.get_progress(), 20);

    s.update(60.0, 30.0, true);
    assert!(!s.is_touched());
    assert_eq!(s.get_progress(), 20);
}

#[test]
fn release_clears_touched_next_frame() {
    let mut s = plain();
    s.update(120.0, 5.0, true);
    assert!(s.is_touched());
    s.update(120.0, 5.0, false);
    assert!(!s.is_touched());
    assert_eq!(s.get_progress(), 60);
}

#[test]
fn hover_without_press_keeps_progress() {
    let mut s = plain().preset(30);
    assert_eq!(s.update(150.0, 5.0, false), UiAction::None);
    assert_eq!(s.get_progress(), 30);
}

#[test]
fn preset_is_not_clamped_until_dragged() {
    let mut s = plain().preset(150);
    assert_eq!(s.get_progress(), 150);
    s.update(10.0, 5.0, true);
    assert_eq!(s.get_progress(), 5);
}

#[test]
fn zero_width_track_stays_in_range() {
    let mut s = Slider::new((0, 0), (0, 10));
    s.update(0.0, 5.0, true);
    assert!((0..=100).contains(&s.get_progress()));
    s.update(5.0, 5.0, true);
    assert_eq!(s.get_progress(), 100);
}

#[test]
fn plain_draw_uses_one_third_track_and_knob() {
    let s = plain();
    let mut surface = Recorder::default();
    s.draw(&mut surface);

    assert_eq!(
        surface.rects(),
        vec![(Rect::new(0.0, 0.0, 200.0, 4.0), Color::NAVY, 0.0, 10.0)]
    );
    assert_eq!(surface.circles(), vec![((100.0, 10.0 / 3.0), 6.0, Color::NAVY)]);
}

#[test]
fn knob_pulses_while_touched() {
    let mut s = plain();
    let mut surface = Recorder::default();

    s.update(50.0, 5.0, true);
    s.draw(&mut surface);
    assert_eq!(surface.circles()[0].2, Color::rgb(10, 10, 165));

    s.update(50.0, 5.0, false);
    s.draw(&mut surface);
    assert_eq!(surface.circles()[1].2, Color::NAVY);
}

#[test]
fn pulse_saturates_bright_colors() {
    let mut s = plain().colors(Color::rgb(250, 100, 255), Color::WHITE);
    let mut surface = Recorder::default();
    s.update(50.0, 5.0, true);
    s.draw(&mut surface);
    assert_eq!(surface.circles()[0].2, Color::rgb(255, 110, 255));
}

#[test]
fn sliders_do_not_share_color_state() {
    let shared = Color::rgb(30, 60, 90);
    let mut a = plain().colors(shared, Color::WHITE);
    let b = plain().colors(shared, Color::WHITE);

    a.update(10.0, 5.0, true);
    let mut surface = Recorder::default();
    a.draw(&mut surface);
    b.draw(&mut surface);

    let knobs = surface.circles();
    assert_eq!(knobs[0].2, Color::rgb(40, 70, 100));
    assert_eq!(knobs[1].2, shared);
}

// 右段的宽度按 `thumb_x - 轨道末端` 计算，进度小于 100 时为负
#[test]
fn stylish_segments_characterization() {
    let s = Slider::new((100, 300), (200, 10)).preset(25).stylish(true);
    let (filled, rest) = s.track_segments();

    assert_eq!(filled, Rect::new(100.0, 300.0, 50.0, 4.0));
    assert_eq!(rest, Rect::new(300.0, 300.0, -150.0, 4.0));

    let mut surface = Recorder::default();
    s.draw(&mut surface);
    assert_eq!(
        surface.rects(),
        vec![
            (filled, Color::NAVY, 0.0, 10.0),
            (rest, Color::WHITE, 0.0, 10.0),
        ]
    );
    assert_eq!(surface.circles()[0].0, (150.0, 300.0 + 10.0 / 3.0));
}

#[test]
fn stylish_rest_segment_is_empty_at_full_progress() {
    let s = Slider::new((0, 0), (200, 12)).preset(100).stylish(true);
    let (filled, rest) = s.track_segments();
    assert_eq!(filled.w, 200.0);
    assert_eq!(rest.w, 0.0);
    assert_eq!(s.track_rect().h, 4.0);
}
