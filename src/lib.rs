//! Snowfall overlay and image slideshow.
//!
//! The model is platform free: [`snowfall::Snowfall`] fills any
//! [`snowfall::SnowContainer`] and [`slideshow::SlideshowController`] toggles
//! any [`slideshow::SlideTarget`]. The `web` feature binds both to a browser
//! document; the `desktop` feature builds a raylib preview binary.

pub mod constants;
pub mod error;
pub mod probe;
pub mod schedule;
pub mod slideshow;
pub mod snowfall;
pub mod snowflake;
pub mod state;

#[cfg(feature = "web")]
pub mod web;

pub use error::{Result, StageError};
pub use probe::ImageProbe;
pub use schedule::{ManualScheduler, Scheduler};
pub use slideshow::{SlideTarget, SlideshowConfig, SlideshowController};
pub use snowfall::{SnowContainer, Snowfall, SnowfallConfig};
pub use snowflake::{FlakeAppearance, SnowflakeDescriptor};
pub use state::SlideshowState;
