use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Result, bail};
use futures::executor::block_on;
use log::{info, warn};
use raylib::prelude::*;
use snowfall::schedule::TaskId;
use snowfall::slideshow::{self, SlideshowConfig, SlideshowController};
use snowfall::snowfall::MemoryContainer;
use snowfall::{FlakeAppearance, ManualScheduler, Snowfall, SnowfallConfig};

use crate::flake::{FileImageProbe, draw_flakes};
use crate::slide::{Slide, SlideDeck};
use crate::texture_loader::load_texture_with_exif_rotation;

pub struct SnowfallEngine {
    slideshow: Rc<RefCell<SlideshowController<SlideDeck>>>,
    scheduler: ManualScheduler,
    slide_timer: Option<TaskId>,
    snow: MemoryContainer,
    flake_texture: Option<Texture2D>,
    clock: f32,
}

impl SnowfallEngine {
    pub fn new() -> Self {
        Self {
            slideshow: Rc::new(RefCell::new(SlideshowController::new(SlideDeck::default()))),
            scheduler: ManualScheduler::new(),
            slide_timer: None,
            snow: MemoryContainer::default(),
            flake_texture: None,
            clock: 0.0,
        }
    }

    /// Loads the slides, generates the snow batch and arms the slide timer.
    pub fn initialize(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        paths: Vec<PathBuf>,
        snow_config: SnowfallConfig,
        slide_config: SlideshowConfig,
    ) -> Result<()> {
        // --- Load Slides ---
        let mut deck = SlideDeck::default();
        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => deck.slides.push(Slide::new(texture)),
                Err(e) => warn!("skipping {}: {:#}", path.display(), e),
            }
        }
        if deck.slides.is_empty() {
            bail!("no slides were loaded");
        }
        info!("loaded {} slides", deck.slides.len());

        // --- Generate Snow ---
        let mut snowfall = Snowfall::new(snow_config)?;
        block_on(snowfall.generate(&FileImageProbe, &mut self.snow, &mut rand::rng()))?;

        if let Some(FlakeAppearance::Image { url }) = snowfall.appearance() {
            match rl.load_texture(thread, url) {
                Ok(texture) => self.flake_texture = Some(texture),
                Err(e) => warn!("flake image {} decoded but did not upload, drawing circles: {}", url, e),
            }
        }

        // --- Start Slideshow ---
        self.slideshow = Rc::new(RefCell::new(SlideshowController::new(deck)));
        self.slide_timer = Some(slideshow::run(self.slideshow.clone(), &mut self.scheduler, slide_config));
        Ok(())
    }

    pub fn slides_shown(&self) -> u64 {
        self.slide_timer
            .and_then(|id| self.scheduler.task(id))
            .map_or(0, |task| task.fired())
    }

    pub fn render_frame(&mut self, dt: f32, d: &mut RaylibDrawHandle) {
        self.clock += dt;
        self.scheduler.advance(Duration::from_secs_f32(dt.max(0.0)));

        // Slide underneath, flakes on top
        d.clear_background(Color::BLACK);
        self.slideshow.borrow().slides().draw(d);
        draw_flakes(d, &self.snow.flakes, self.flake_texture.as_ref(), self.clock);
    }
}
