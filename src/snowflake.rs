//! Randomized snowflake parameters and the inline style they turn into.
//!
//! The falling and drifting motion itself lives in page CSS; a flake only
//! carries the numbers that CSS consumes (`--x-initial`, `--x-final`, timing).

use rand::Rng;

use crate::constants::*;

/// One flake's motion parameters. Lengths are viewport-width units, times are seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowflakeDescriptor {
    pub size: f64,      // Width and height
    pub x_initial: f64, // Drift at the top of the fall (--x-initial)
    pub x_final: f64,   // Drift at the bottom of the fall (--x-final)
    pub left: f64,      // Horizontal placement before drifting
    pub duration: f64,  // One full fall
    pub delay: f64,     // Wait before the first fall
}

impl SnowflakeDescriptor {
    /// Draws a flake with a size in `[1, max_size)`.
    ///
    /// `max_size` must be greater than 1.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, max_size: f64) -> Self {
        let size = rng.random_range(MIN_SNOWFLAKE_SIZE..max_size);
        let x_initial = rng.random_range(-DRIFT_RANGE..DRIFT_RANGE);
        let x_final = rng.random_range(-DRIFT_RANGE..DRIFT_RANGE);
        let duration = rng.random_range(MIN_FALL_DURATION..MAX_FALL_DURATION);
        let delay = rng.random_range(0.0..MAX_FALL_DELAY);
        let left = rng.random_range(0.0..PLACEMENT_RANGE);

        Self {
            size,
            x_initial,
            x_final,
            left,
            duration,
            delay,
        }
    }

    pub fn style(&self, appearance: &FlakeAppearance) -> SnowflakeStyle {
        // --- Motion values consumed by the page CSS ---
        let mut declarations = vec![
            ("width", format!("{}vw", self.size)),
            ("height", format!("{}vw", self.size)),
            ("left", format!("{}vw", self.left)),
            ("animation-duration", format!("{}s", self.duration)),
            ("animation-delay", format!("{}s", self.delay)),
            ("--x-initial", format!("{}vw", self.x_initial)),
            ("--x-final", format!("{}vw", self.x_final)),
        ];

        // --- Batch-wide look ---
        match appearance {
            FlakeAppearance::Image { url } => {
                declarations.push(("background-image", format!("url({url})")));
                declarations.push(("background-size", "contain".to_string()));
                declarations.push(("background-repeat", "no-repeat".to_string()));
                declarations.push(("background-color", "transparent".to_string()));
            }
            FlakeAppearance::Circle => {
                // Fallback when the flake image did not load
                declarations.push(("background-color", "white".to_string()));
                declarations.push(("border-radius", "50%".to_string()));
            }
        }

        SnowflakeStyle { declarations }
    }
}

/// How every flake of a batch is painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlakeAppearance {
    Image { url: String },
    Circle,
}

impl FlakeAppearance {
    pub fn from_probe(available: bool, url: &str) -> Self {
        if available {
            FlakeAppearance::Image { url: url.to_string() }
        } else {
            FlakeAppearance::Circle
        }
    }
}

/// Ordered inline style declarations for one flake element.
#[derive(Debug, Clone, PartialEq)]
pub struct SnowflakeStyle {
    declarations: Vec<(&'static str, String)>,
}

impl SnowflakeStyle {
    pub fn declarations(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Renders the declarations as the text of a `style` attribute.
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
