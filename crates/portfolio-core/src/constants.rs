use glam::Vec3;

// Shared scene/interaction tuning constants used by the web and native frontends.

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_FOLLOW_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 5.0); // eye = character + offset
pub const CAMERA_INITIAL_EYE: Vec3 = Vec3::new(0.0, 2.0, 5.0);

// Locomotion
pub const MOVE_SPEED: f32 = 5.0; // acceleration per second of held input
pub const VELOCITY_DECAY_PER_FRAME: f32 = 0.9; // applied to an axis with no input
pub const CHARACTER_GROUND_Y: f32 = 0.75; // capsule centre above the floor

// Selection transition
pub const FOCUS_DISTANCE: f32 = 3.0; // stand-off from the selected object
pub const FOCUS_DURATION_SEC: f32 = 1.0;

// Decorative animation
pub const MARKER_SPIN_RATE: f32 = 0.5; // rad/s
pub const HOVER_BOB_AMPLITUDE: f32 = 0.05;
pub const HOVER_BOB_FREQUENCY: f32 = 2.0; // rad/s
pub const HOVER_BRIGHTEN: f32 = 1.6; // emissive multiplier while hovered
pub const DUNE_RIPPLE_AMPLITUDE: f32 = 0.05;
pub const DUNE_RIPPLE_FREQUENCY: f32 = 0.02;
pub const DUNE_RIPPLE_SPEED: f32 = 0.05;
pub const DUNE_RIPPLE_STRIDE: usize = 5; // only every n-th vertex moves

// Terrain
pub const FLOOR_SIZE: f32 = 500.0;
pub const FLOOR_SEGMENTS: u32 = 128;
pub const FLOOR_Y: f32 = -0.5;
pub const DUNE_AMPLITUDE: f32 = 1.5;
pub const DUNE_FREQUENCY: f32 = 0.05;

// Mountains
pub const MOUNTAIN_RANGES: u32 = 3;
pub const MOUNTAIN_WIDTH: f32 = 200.0;
pub const MOUNTAIN_DEPTH: f32 = 20.0;
pub const MOUNTAIN_SEGMENTS: u32 = 100;
pub const MOUNTAIN_BASE_Z: f32 = -40.0;
pub const MOUNTAIN_SPACING_Z: f32 = 15.0;

// Stars
pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS_MIN: f32 = 100.0;
pub const STAR_RADIUS_SPAN: f32 = 50.0;

// Atmosphere
pub const SKY_HEX: u32 = 0x0f172a;
pub const FOG_DENSITY: f32 = 0.02;

// Loading screen
pub const LOADING_STEP_SEC: f32 = 0.2;
pub const LOADING_MAX_STEP_PERCENT: f32 = 10.0;
pub const LOADING_SETTLE_SEC: f32 = 0.5;
pub const LOADING_FADE_SEC: f32 = 1.0;

// Marker layout: experience, projects, skills
pub const MARKER_POSITIONS: [[f32; 3]; 3] =
    [[-5.0, 1.5, -5.0], [0.0, 1.5, -8.0], [5.0, 1.5, -5.0]];
