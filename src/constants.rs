// Front-end tuning constants for the web globe. Scene geometry (radii,
// camera, spin) lives in `globe_core::constants`.

// DOM element ids expected on the host page
pub const CANVAS_ID: &str = "globe-canvas";
pub const TOOLTIP_ID: &str = "tooltip";

// Globe tessellation
pub const GLOBE_SEGMENTS: u32 = 64; // longitude slices
pub const GLOBE_RINGS: u32 = 32; // latitude bands, pole to pole

// Colors (linear RGBA)
pub const CLEAR_COLOR: [f64; 4] = [0.01, 0.01, 0.03, 1.0];
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const MARKER_HOVER_COLOR: [f32; 4] = [1.0, 0.85, 0.2, 1.0];

// Hovered markers are drawn a bit larger
pub const MARKER_HOVER_SCALE: f32 = 1.6;

// Initial GPU instance capacity; grows by doubling
pub const MARKER_INSTANCE_CAPACITY: usize = 256;

// Upper bound on a single frame step so a backgrounded tab does not jump the spin
pub const MAX_FRAME_DT_SEC: f64 = 0.25;
