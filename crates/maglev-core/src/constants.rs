// Shared scene tuning constants used by both web and native frontends.

// Levitation height control (scene units; displayed as centimeters x100)
pub const HEIGHT_MIN: f32 = 0.5;
pub const HEIGHT_MAX: f32 = 3.0;
pub const HEIGHT_DEFAULT: f32 = 1.6;
pub const HEIGHT_STEP: f32 = 0.1;

// Vehicle motion
pub const HOVER_AMPLITUDE: f32 = 0.05;
pub const HOVER_FREQUENCY: f32 = 2.0;
pub const ROLL_AMPLITUDE: f32 = 0.02;
pub const ROLL_FREQUENCY: f32 = 1.5;

// Vehicle body (chassis, cabin, translucent canopy)
pub const CHASSIS_SIZE: [f32; 3] = [2.0, 0.4, 1.0];
pub const CHASSIS_LOCAL_Y: f32 = 0.2;
pub const CABIN_SIZE: [f32; 3] = [1.2, 0.5, 0.9];
pub const CABIN_LOCAL_Y: f32 = 0.65;
pub const CANOPY_SIZE: [f32; 3] = [1.15, 0.4, 0.85];
pub const CANOPY_LOCAL_Y: f32 = 0.65;
pub const CANOPY_OPACITY: f32 = 0.3;

// Levitation rings under the chassis
pub const RING_OFFSETS_X: [f32; 4] = [-0.6, -0.2, 0.2, 0.6];
pub const RING_LOCAL_Y: f32 = -0.3;
pub const RING_RADIUS: f32 = 0.25;
pub const RING_TUBE: f32 = 0.05;
pub const RING_GLOW_TUBE_SCALE: f32 = 1.5; // halo torus tube vs core tube
pub const RING_GLOW_OPACITY: f32 = 0.3;
pub const RING_TILT_AMPLITUDE: f32 = 0.1;
pub const RING_TILT_FREQUENCY: f32 = 0.5;
pub const RING_EMISSIVE: f32 = 1.5;

// Rising field lines (sawtooth cycle, phase-staggered by index)
pub const FIELD_LINE_COUNT: usize = 8;
pub const FIELD_LINE_BASE_RADIUS: f32 = 3.0;
pub const FIELD_LINE_RADIUS_STEP: f32 = 0.3;
pub const FIELD_LINE_TUBE: f32 = 0.02;
pub const FIELD_LINE_PERIOD: f32 = 4.0;
pub const FIELD_LINE_PHASE_STEP: f32 = 0.5;
pub const FIELD_LINE_MAX_OPACITY: f32 = 0.3;
pub const FIELD_LINE_FLOOR_Y: f32 = -1.0;

// Force-vector glyphs (anchored at height +- FORCE_ANCHOR_OFFSET)
pub const FORCE_ANCHOR_OFFSET: f32 = 0.5;
pub const FORCE_SHAFT_RADIUS: f32 = 0.05;
pub const FORCE_SHAFT_LENGTH: f32 = 0.8;
pub const FORCE_HEAD_RADIUS: f32 = 0.15;
pub const FORCE_HEAD_LENGTH: f32 = 0.3;
pub const FORCE_HEAD_OFFSET: f32 = 0.55; // head center along the shaft axis
pub const FORCE_EMISSIVE: f32 = 0.5;

// Label anchors
pub const MASS_LABEL_RISE: f32 = 1.5; // above the levitation height
pub const HEIGHT_LABEL_X: f32 = 2.5;
pub const FORCE_LABEL_X: f32 = 0.5;
pub const FIELD_CAPTION_ANCHOR: [f32; 3] = [-3.0, 1.0, 0.0];

// Earth-field sphere (decorative wireframe)
pub const EARTH_FIELD_RADIUS: f32 = 2.0;
pub const EARTH_FIELD_Y: f32 = -3.0;
pub const EARTH_FIELD_SPIN_RATE: f32 = 0.2;
pub const EARTH_FIELD_OPACITY: f32 = 0.1;

// Ground plane and reference grid
pub const GROUND_SIZE: f32 = 10.0;
pub const GROUND_Y: f32 = -0.01;
pub const GRID_DIVISIONS: u32 = 20;

// Orbit camera
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 15.0;
pub const CAMERA_EYE_START: [f32; 3] = [5.0, 3.0, 5.0];
pub const CAMERA_FOVY_DEG: f32 = 50.0;

// Palette (sRGB floats matching the page accent colors)
pub const COLOR_CHASSIS: [f32; 3] = [0.118, 0.251, 0.686];
pub const COLOR_CABIN: [f32; 3] = [0.118, 0.227, 0.541];
pub const COLOR_CANOPY: [f32; 3] = [0.376, 0.647, 0.980];
pub const COLOR_RING: [f32; 3] = [0.0, 0.831, 1.0];
pub const COLOR_FIELD_LINE: [f32; 3] = [0.024, 0.714, 0.831];
pub const COLOR_GRAVITY: [f32; 3] = [0.937, 0.267, 0.267];
pub const COLOR_MAGNETIC: [f32; 3] = [0.024, 0.714, 0.831];
pub const COLOR_GROUND: [f32; 3] = [0.059, 0.090, 0.165];
pub const COLOR_GRID: [f32; 3] = [0.118, 0.161, 0.231];
pub const COLOR_EARTH_FIELD: [f32; 3] = [0.055, 0.647, 0.914];
pub const CLEAR_COLOR: [f32; 3] = [0.008, 0.024, 0.090];
