// Shared tuning constants used by both web and native frontends.

// Heightmap sampling (ITU-R BT.709 luma weights)
pub const LUMA_R: f64 = 0.2126;
pub const LUMA_G: f64 = 0.7152;
pub const LUMA_B: f64 = 0.0722;

// Pointer interaction
pub const ROTATE_SENSITIVITY: f32 = 0.01; // radians per pixel of drag
pub const PAN_SENSITIVITY_PER_UNIT: f32 = 0.0016; // scaled by current camera distance

// Zoom control (slider units)
pub const ZOOM_MIN: f32 = 0.0;
pub const ZOOM_MAX: f32 = 200.0;
pub const ZOOM_DEFAULT: f32 = 100.0;
pub const ZOOM_WHEEL_STEP: f32 = 8.0;

// Perspective camera
pub const PERSPECTIVE_FOV_DEG: f32 = 70.0;
pub const CAMERA_DIST_FAR: f32 = 6.0; // eye distance at zoom = ZOOM_MIN
pub const CAMERA_DIST_NEAR: f32 = 1.8; // eye distance at zoom = ZOOM_MAX, must stay > 0
pub const CAMERA_HEIGHT: f32 = 3.0;

// Orthographic camera
pub const ORTHO_BASE_SIZE: f32 = 1.2;
pub const ORTHO_ZOOM_OFFSET: f32 = 0.6; // zoom factor at ZOOM_MAX
pub const ORTHO_EYE: [f32; 3] = [0.0, 3.0, 3.0];

// Clip planes shared by both projections
pub const CLIP_NEAR: f32 = 0.001;
pub const CLIP_FAR: f32 = 50.0;

// Widget mapping
pub const HEIGHT_SCALE_DIVISOR: f32 = 50.0; // height slider raw value -> model scale
pub const HEIGHT_RAW_DEFAULT: f32 = 50.0;
pub const HEIGHT_RAW_MAX: f32 = 200.0;
pub const ROTATION_DEG_LIMIT: f32 = 360.0;

// Renderer
pub const CLEAR_COLOR: [f64; 4] = [0.2, 0.2, 0.2, 1.0];
