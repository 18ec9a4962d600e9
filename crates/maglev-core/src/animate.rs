//! Per-frame motion formulas.
//!
//! Every function here is a pure map from elapsed seconds (plus the shared
//! levitation height where relevant) to a scalar transform component, so
//! frames never accumulate state and the loop stays testable off-screen.

use crate::constants::{
    EARTH_FIELD_SPIN_RATE, FIELD_LINE_FLOOR_Y, FIELD_LINE_MAX_OPACITY, FIELD_LINE_PERIOD,
    FIELD_LINE_PHASE_STEP, HOVER_AMPLITUDE, HOVER_FREQUENCY, RING_TILT_AMPLITUDE,
    RING_TILT_FREQUENCY, ROLL_AMPLITUDE, ROLL_FREQUENCY,
};

/// Sinusoidal bob applied on top of the slider-driven height.
#[inline]
pub fn vehicle_hover_offset(t: f32) -> f32 {
    HOVER_AMPLITUDE * (HOVER_FREQUENCY * t).sin()
}

#[inline]
pub fn vehicle_y(t: f32, levitation_height: f32) -> f32 {
    levitation_height + vehicle_hover_offset(t)
}

/// Small roll wobble around the travel axis.
#[inline]
pub fn vehicle_roll(t: f32) -> f32 {
    ROLL_AMPLITUDE * (ROLL_FREQUENCY * t).sin()
}

/// All four rings share this phase; the formula is not indexed.
#[inline]
pub fn ring_yaw(t: f32) -> f32 {
    RING_TILT_AMPLITUDE * (RING_TILT_FREQUENCY * t).sin()
}

/// Sawtooth rise of field line `index`: climbs from -1 toward +3 over a
/// 4-second cycle, then snaps back. Lines are staggered 0.5 s apart.
#[inline]
pub fn field_line_offset(t: f32, index: usize) -> f32 {
    FIELD_LINE_FLOOR_Y + (t + FIELD_LINE_PHASE_STEP * index as f32).rem_euclid(FIELD_LINE_PERIOD)
}

/// Opacity fades linearly to zero as a line approaches the top of its
/// cycle. The modulo above keeps the phase in [0, 1), so the result stays
/// inside [0, FIELD_LINE_MAX_OPACITY].
#[inline]
pub fn field_line_opacity(offset: f32) -> f32 {
    let phase = (offset - FIELD_LINE_FLOOR_Y) / FIELD_LINE_PERIOD;
    (FIELD_LINE_MAX_OPACITY * (1.0 - phase)).clamp(0.0, FIELD_LINE_MAX_OPACITY)
}

/// Slow spin of the decorative Earth-field sphere.
#[inline]
pub fn earth_field_yaw(t: f32) -> f32 {
    EARTH_FIELD_SPIN_RATE * t
}
