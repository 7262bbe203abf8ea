//! Rendering and page-shell tuning for the browser front end.
//!
//! Scene geometry lives in `zodiac_core::constants`; these only affect how
//! frames are drawn and how the DOM reacts.

// Night-sky background
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.035,
    g: 0.027,
    b: 0.07,
    a: 1.0,
};

// Fill light
pub const AMBIENT_LIGHT: [f32; 3] = [0.32, 0.30, 0.36];
pub const KEY_LIGHT_DIR: [f32; 3] = [-0.4, -1.0, -0.6];
pub const KEY_LIGHT_INTENSITY: f32 = 0.75;

// Spotlights arrive in physical units; the shader wants roughly 0..1.
pub const SPOTLIGHT_UNIT: f32 = 500.0;
pub const SPOTLIGHT_CONE_COS: f32 = 0.93;
pub const MAX_SPOTLIGHTS: usize = 2;

pub const FLOOR_COLOR: [f32; 3] = [0.55, 0.12, 0.10];
pub const HELPER_GRID_SIZE: f32 = 10.0;

// Hovered ring animals get a warm tint on top of the scale-up.
pub const HOVER_TINT: [f32; 4] = [1.25, 1.15, 0.95, 1.0];

// Instances written per frame before the buffer has to grow
pub const INITIAL_INSTANCE_CAPACITY: usize = 64;

pub const TOAST_DURATION_MS: i32 = 2000;
