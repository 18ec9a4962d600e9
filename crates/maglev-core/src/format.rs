//! Display formatting for the text overlay.

/// Height readout shown next to the vehicle and in the control panel.
/// The scene drives heights in meters; the page displays centimeters.
pub fn height_cm_label(height: f32) -> String {
    format!("{:.1}cm", height * 100.0)
}

// Fixed captions. The force values are illustrative literals from the
// energy section of the page, not derived from the slider.
pub const MASS_LABEL: &str = "Vehicle 900kg";
pub const GRAVITY_FORCE_LABEL: &str = "Fg (9000N)";
pub const MAGNETIC_FORCE_LABEL: &str = "Fm (9000N)";
pub const FIELD_CAPTION: &str = "Earth field\n~0.5 Gauss";
