pub const TOTAL_SNOWFLAKES: usize = 50;             // Snowflakes generated at startup
pub const MAX_SNOWFLAKE_SIZE: f64 = 2.0;            // Upper bound of a flake's size (vw)
pub const MIN_SNOWFLAKE_SIZE: f64 = 1.0;            // Lower bound of a flake's size (vw)
pub const SNOWFLAKE_IMAGE_URL: &str = "snowcorn.png"; // Optional flake image, circles if it fails to load

pub const DRIFT_RANGE: f64 = 50.0;                  // Horizontal offsets are drawn from [-DRIFT_RANGE, DRIFT_RANGE) vw
pub const PLACEMENT_RANGE: f64 = 100.0;             // Initial left placement is drawn from [0, PLACEMENT_RANGE) vw
pub const MIN_FALL_DURATION: f64 = 5.0;             // Shortest fall (seconds)
pub const MAX_FALL_DURATION: f64 = 15.0;            // Longest fall (seconds)
pub const MAX_FALL_DELAY: f64 = 5.0;                // Longest wait before a flake starts falling (seconds)

pub const SLIDE_INTERVAL_MS: u64 = 4000;            // Time each slide stays active (milliseconds)

pub const SNOW_CONTAINER_ID: &str = "snowCanvas";   // Element receiving generated flakes
pub const SLIDE_SELECTOR: &str = ".slideshow-image"; // Slideshow members, queried once
pub const SNOWFLAKE_CLASS: &str = "snowflake";      // Class carried by every generated flake
pub const ACTIVE_CLASS: &str = "active";            // Class marking the visible slide

// Desktop preview
pub const WINDOW_WIDTH: i32 = 1280;                 // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;                 // Initial window height
pub const FPS: u32 = 60;                            // Target frames per second
pub const SLIDE_FILL: f32 = 0.9;                    // Largest share of the window a slide may cover
