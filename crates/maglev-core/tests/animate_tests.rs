use maglev_core::animate::*;
use maglev_core::{
    FIELD_LINE_COUNT, FIELD_LINE_MAX_OPACITY, HOVER_AMPLITUDE, RING_TILT_AMPLITUDE,
    ROLL_AMPLITUDE,
};

#[test]
fn vehicle_is_at_rest_pose_at_start() {
    assert_eq!(vehicle_hover_offset(0.0), 0.0);
    assert_eq!(vehicle_y(0.0, 1.6), 1.6);
    assert_eq!(vehicle_roll(0.0), 0.0);
}

#[test]
fn vehicle_motion_stays_within_amplitudes() {
    for step in 0..2000 {
        let t = step as f32 * 0.037;
        assert!(vehicle_hover_offset(t).abs() <= HOVER_AMPLITUDE + 1e-6);
        assert!(vehicle_roll(t).abs() <= ROLL_AMPLITUDE + 1e-6);
    }
}

#[test]
fn ring_rotation_matches_formula_and_ignores_index() {
    // All four rings share one phase; the formula takes no index at all.
    for step in 0..500 {
        let t = step as f32 * 0.05;
        let expected = 0.1 * (0.5 * t).sin();
        assert!((ring_yaw(t) - expected).abs() < 1e-6);
        assert!(ring_yaw(t).abs() <= RING_TILT_AMPLITUDE + 1e-6);
    }
}

#[test]
fn field_line_offset_stays_in_cycle_range() {
    for step in 0..4000 {
        let t = step as f32 * 0.013;
        for i in 0..FIELD_LINE_COUNT {
            let offset = field_line_offset(t, i);
            assert!((-1.0..3.0).contains(&offset), "offset {offset} at t={t} i={i}");
            let opacity = field_line_opacity(offset);
            assert!((0.0..=FIELD_LINE_MAX_OPACITY).contains(&opacity));
        }
    }
}

#[test]
fn field_line_start_positions() {
    // At t=0 line 0 sits at the floor of its cycle and line 4 is half-way up.
    assert!((field_line_offset(0.0, 0) - (-1.0)).abs() < 1e-6);
    assert!((field_line_offset(0.0, 4) - 1.0).abs() < 1e-6);
    assert!((field_line_opacity(1.0) - 0.15).abs() < 1e-6);
}

#[test]
fn field_line_opacity_fades_toward_the_top() {
    assert!((field_line_opacity(-1.0) - FIELD_LINE_MAX_OPACITY).abs() < 1e-6);
    assert!(field_line_opacity(3.0).abs() < 1e-6);
    // Strictly decreasing with rise
    assert!(field_line_opacity(0.0) > field_line_opacity(1.0));
    assert!(field_line_opacity(1.0) > field_line_opacity(2.0));
}

#[test]
fn field_lines_repeat_every_cycle_and_stagger_by_half_a_second() {
    for step in 0..200 {
        let t = step as f32 * 0.11;
        for i in 1..FIELD_LINE_COUNT {
            // Line i leads line i-1 by exactly the phase step.
            let a = field_line_offset(t, i);
            let b = field_line_offset(t + 0.5, i - 1);
            assert!((a - b).abs() < 1e-4);
        }
        let now = field_line_offset(t, 0);
        let next_cycle = field_line_offset(t + 4.0, 0);
        assert!((now - next_cycle).abs() < 1e-4);
    }
}

#[test]
fn earth_field_spin_is_linear_in_time() {
    assert_eq!(earth_field_yaw(0.0), 0.0);
    assert!((earth_field_yaw(10.0) - 2.0).abs() < 1e-6);
}
