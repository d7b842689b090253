/// Page timing and interaction tuning constants.
///
/// These express intended behavior (delays, sensitivities, clamp limits) and
/// keep magic numbers out of the code. `config.rs` builds its defaults from
/// them.

// Phrases cycled in the hero subtitle
pub const TYPING_PHRASES: [&str; 3] = ["Full-Stack Web Developer", "Java Developer", "Problem Solver"];

// Page load sequence (milliseconds)
pub const LOADER_DURATION_MS: u32 = 1000;
pub const LOADER_FADE_MS: u32 = 500;
pub const TYPING_START_EXTRA_MS: u32 = 100; // added on top of the loader duration
pub const RIG_START_DELAY_MS: u32 = 200;

// Typing effect (milliseconds)
pub const TYPING_SPEED_MS: u64 = 100; // per typed character; erasing runs at half this
pub const TYPING_DELAY_MS: u64 = 2000; // hold after a phrase is fully typed
pub const ERASE_PAUSE_MS: u64 = 0; // hold after a phrase is fully erased

// Drag rotation
pub const DRAG_SENSITIVITY: f32 = 0.01; // radians per pixel
pub const TILT_LIMIT: f32 = 0.5; // |target_rotation_x| bound

// Per-frame animation factors
pub const ROTATION_DAMPING: f32 = 0.1;
pub const COOLER_SPIN_PER_FRAME: f32 = 0.1;
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 15.0, 30.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 2.0, 0.0];

// Default cylinder tessellation
pub const CYLINDER_SEGMENTS: u32 = 32;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Shown in the scene container when WebGPU cannot be initialized
pub const RENDERER_MISSING_HTML: &str =
    "<p style='color:white;text-align:center;'>Error: 3D renderer unavailable.</p>";

// localStorage key and values for the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";
pub const LIGHT_MODE_CLASS: &str = "light-mode";
