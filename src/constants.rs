use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the full-size kiosk display
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the full-size kiosk display
pub const FPS: u32 = 60;                      // Frames per second

pub const ANIMATION_PERIOD: Duration = Duration::from_secs(10); // Time before an animation restarts from its first frame
pub const DISPLAY_DURATION: f32 = 12.0;       // Time each state is shown before moving on (seconds)
pub const ERROR_DISPLAY: f32 = 5.0;           // Time a fatal error stays on screen (seconds)

pub const SHAKE_MAGNITUDE: i32 = 15;          // Widest horizontal swing of the choice thumbnails (pixels)
pub const SHAKE_STEP: i32 = 5;                // Swing advance per frame (pixels)
pub const TRANSPOSE_STEP: i32 = 50;           // Slide advance per frame of the chosen thumbnail (pixels)

pub const THUMBNAIL_RATIO: f64 = 0.6;         // Layout thumbnail size relative to the background
pub const THUMBNAIL_DROP: f64 = 1.3;          // Vertical placement factor of the thumbnails
