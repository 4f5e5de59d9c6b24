//! Browser front-end: wires the snowfall and the slideshow into the page.

mod dom;
mod probe;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::error::{Result, StageError};
use crate::schedule::{Scheduler, Tick};
use crate::slideshow::{self, SlideshowConfig, SlideshowController};
use crate::snowfall::{Snowfall, SnowfallConfig};

pub use dom::{DomSlides, DomSnowContainer};
pub use probe::BrowserImageProbe;

/// Arms `setInterval` timers; the handle clears the timer when dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&mut self, period: std::time::Duration, mut tick: Tick) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, move || tick())
    }
}

/// The running slideshow together with the interval that drives it.
pub struct Page {
    pub slideshow: Rc<RefCell<SlideshowController<DomSlides>>>,
    pub interval: Interval,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(StageError::NoWindow)?
        .document()
        .ok_or(StageError::NoDocument)
}

/// Collects the slideshow members, shows the first one and starts rotating.
pub fn mount_slideshow(document: &Document, config: SlideshowConfig) -> Result<Page> {
    let slides = DomSlides::query(document)?;
    let slideshow = Rc::new(RefCell::new(SlideshowController::new(slides)));
    let interval = slideshow::run(slideshow.clone(), &mut IntervalScheduler, config);
    Ok(Page { slideshow, interval })
}

/// Probes the flake image and fills the snow container.
pub async fn generate_snowfall(document: &Document, config: SnowfallConfig) -> Result<usize> {
    let mut snowfall = Snowfall::new(config)?;
    let mut container = DomSnowContainer::find(document)?;
    let mut rng = rand::rng();
    snowfall.generate(&BrowserImageProbe, &mut container, &mut rng).await
}

/// Routes `log` records to the browser console. Later calls keep the first logger.
pub fn init_logging() {
    console_log::init_with_level(log::Level::Info).ok();
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let document = document().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let snow_document = document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = generate_snowfall(&snow_document, SnowfallConfig::default()).await {
            error!("snowfall stopped: {}", e);
        }
    });

    match mount_slideshow(&document, SlideshowConfig::default()) {
        Ok(page) => {
            PAGE.with(|slot| *slot.borrow_mut() = Some(page));
            info!("page effects started");
        }
        Err(e) => error!("slideshow not started: {}", e),
    }
    Ok(())
}
