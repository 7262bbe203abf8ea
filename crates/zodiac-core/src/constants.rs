use glam::Vec3;

// Shared scene tuning constants used by the core scenes and the web frontend.

// Camera transition (main scene selection)
pub const TRANSITION_DURATION_MS: f64 = 1200.0;
pub const TRANSITION_COMPLETE_DELAY_MS: f64 = 300.0; // pause on the framed animal before navigating
pub const TRANSITION_CAMERA_DISTANCE: f32 = 4.0;
pub const TRANSITION_POLAR_DEG: f32 = 10.0; // camera elevation above the animal
pub const TRANSITION_LOOK_AT_HEIGHT: f32 = 0.5;
pub const SPOTLIGHT_PEAK_INTENSITY: f32 = 500.0;
pub const SPOTLIGHT_HEIGHT: f32 = 8.0;

// Turntable rig (fortune scene)
pub const ORBIT_START_ANGLE: f32 = std::f32::consts::PI; // start behind the model
pub const ORBIT_BASE_SPEED: f32 = 0.3; // rad/s
pub const ORBIT_FRONT_MULTIPLIER: f32 = 1.5;
pub const ORBIT_BACK_MULTIPLIER: f32 = 6.0;
pub const ORBIT_RADIUS: f32 = 5.0;
pub const ORBIT_TARGET: Vec3 = Vec3::new(0.0, 0.0, 1.0);

// Main scene
pub const MAIN_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 8.0, 12.0);
pub const MAIN_FOV_DEG: f32 = 45.0;
pub const RING_RADIUS: f32 = 2.25;
pub const RING_SPIN_SPEED: f32 = 0.15; // rad/s, opposite to the horse
pub const RING_MODEL_SCALE: f32 = 0.8;
pub const HOVER_SCALE: f32 = 1.1;
pub const CENTER_HORSE_POSITION: Vec3 = Vec3::new(0.0, 0.2, 0.0);
pub const CENTER_HORSE_SCALE: f32 = 1.5;
pub const CENTER_HORSE_SPIN_SPEED: f32 = 0.3;
pub const FLOOR_RADIUS: f32 = 6.0;
pub const FLOOR_HEIGHT: f32 = -0.5;
pub const MAIN_CONTROLS_UP_LIMIT_DEG: f32 = 10.0;
pub const MAIN_CONTROLS_DOWN_LIMIT_DEG: f32 = 35.0;
pub const HORSE_BUBBLE_INTERVAL_MS: f64 = 4000.0;

// Fortune scene
pub const FORTUNE_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 5.0, 3.5);
pub const FORTUNE_FOV_DEG: f32 = 50.0;
pub const FORTUNE_MODEL_SCALE: f32 = 2.2;
pub const IDLE_BOB_SPEED: f32 = 2.4; // rad/s of the idle animation phase
pub const IDLE_BOB_HEIGHT: f32 = 0.08;

// Group photo scene
pub const GROUP_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 2.0, 8.0);
pub const GROUP_FOV_DEG: f32 = 50.0;
pub const GROUP_MAIN_SCALE: f32 = 1.1;
pub const GROUP_ANIMAL_SCALE: f32 = 0.7;
pub const GREETING_REROLL_MS: f64 = 3500.0;
pub const GREETING_LIFETIME_MS: f64 = 4000.0;
pub const GREETING_MAX_BUBBLES: usize = 3;

// Zodiac info scene
pub const INFO_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 2.0, 4.0);
pub const INFO_FOV_DEG: f32 = 50.0;
pub const INFO_ANIMAL_SCALE: f32 = 0.55;
pub const INFO_RED_HORSE_SCALE: f32 = 1.0;
pub const INFO_RED_HORSE_POSITION: Vec3 = Vec3::new(0.0, 0.5, -1.2);

// Bubbles
pub const BUBBLE_OFFSET_INFO: f32 = 0.35;
pub const BUBBLE_OFFSET_GROUP: f32 = 0.4;
pub const BUBBLE_OFFSET_MAIN: f32 = 1.4; // above the scaled-up center horse

// Loading overlay
pub const LOADING_FADE_DELAY_MS: f64 = 500.0;

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 0.45; // ray-sphere radius per unit of model scale
pub const DRAG_THRESHOLD_PX: f32 = 4.0;
pub const ROTATE_SPEED: f32 = 0.005; // radians per pixel of drag
pub const ZOOM_STEP: f32 = 0.95; // distance factor per wheel notch

// The red horse shown in the middle of the ring, the photo and the info grid
pub const MAIN_HORSE_MODEL_URL: &str = "/models/horse-main.glb";

// The year being celebrated
pub const FORTUNE_YEAR: u16 = 2026;
