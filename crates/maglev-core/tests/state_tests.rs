use maglev_core::format::height_cm_label;
use maglev_core::{SceneState, HEIGHT_MAX, HEIGHT_MIN};

#[test]
fn defaults_match_page_load() {
    let state = SceneState::default();
    assert_eq!(state.levitation_height, 1.6);
    assert!(state.show_forces);
    assert!(state.show_field_lines);
}

#[test]
fn height_clamps_to_slider_range() {
    let mut state = SceneState::default();
    state.set_height(0.0);
    assert_eq!(state.levitation_height, HEIGHT_MIN);
    state.set_height(100.0);
    assert_eq!(state.levitation_height, HEIGHT_MAX);
    state.set_height(f32::NEG_INFINITY);
    assert_eq!(state.levitation_height, HEIGHT_MIN);
}

#[test]
fn in_range_heights_pass_through_unclamped() {
    let mut state = SceneState::default();
    // Every slider step from 0.5 to 3.0
    for step in 0..=25 {
        let h = 0.5 + step as f32 * 0.1;
        state.set_height(h);
        assert!((state.levitation_height - h).abs() < 1e-6);
    }
}

#[test]
fn toggles_write_through() {
    let mut state = SceneState::default();
    state.set_show_forces(false);
    state.set_show_field_lines(false);
    assert!(!state.show_forces);
    assert!(!state.show_field_lines);
    state.set_show_forces(true);
    assert!(state.show_forces);
}

#[test]
fn height_label_is_centimeters_with_one_decimal() {
    assert_eq!(height_cm_label(1.6), "160.0cm");
    assert_eq!(height_cm_label(HEIGHT_MIN), "50.0cm");
    assert_eq!(height_cm_label(HEIGHT_MAX), "300.0cm");
    assert_eq!(height_cm_label(2.35), "235.0cm");
}
