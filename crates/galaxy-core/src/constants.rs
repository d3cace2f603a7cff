// Shared layout/interaction tuning constants used by both the headless core
// and the web frontend.

// Spiral layout
pub const LAYOUT_RADIUS_FACTOR: f32 = 0.36; // of min(width, height)
pub const DEPTH_MIN: f32 = 0.4; // synthetic depth floor
pub const DEPTH_SPAN: f32 = 0.6;

// Viewport floors applied before any layout computation
pub const MIN_VIEWPORT_WIDTH: f32 = 300.0;
pub const MIN_VIEWPORT_HEIGHT: f32 = 200.0;

// Interaction
pub const DRAG_ROTATE_PER_PX: f32 = 0.0025; // radians per dragged pixel
pub const KEY_ROTATE_STEP: f32 = 0.12; // radians per arrow key press
pub const KEY_ZOOM_STEP: f32 = 0.1;
pub const WHEEL_ZOOM_PER_UNIT: f32 = 0.001; // inverted wheel delta
pub const WHEEL_MIN_INTERVAL_MS: f64 = 30.0; // throttle between processed events
pub const ZOOM_MIN: f32 = 0.6;
pub const ZOOM_MAX: f32 = 2.0;

// Ambient auto-rotation, radians per elapsed millisecond
pub const AUTO_YAW_PER_MS: f32 = 0.00025;
pub const AUTO_PITCH_PER_MS: f32 = 0.0004;

// Simplified parallax projection. The asymmetric x/y weights are a
// compatibility contract, not a 3D model; see projection.rs.
pub const PARALLAX_X_PER_YAW: f32 = 30.0;
pub const PARALLAX_Y_PER_PITCH: f32 = 18.0;
pub const DEPTH_SCALE_BASE: f32 = 0.6;
pub const DEPTH_SCALE_SPAN: f32 = 0.8;

// Orb sizing
pub const ORB_BASE_DIAMETER: f32 = 18.0;
pub const ORB_MIN_DIAMETER: f32 = 20.0;
pub const ORB_PERCENT_FACTOR: f32 = 0.18;
pub const DEFAULT_PERCENT: f32 = 60.0; // used when a record carries no percent
