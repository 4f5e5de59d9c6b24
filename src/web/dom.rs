use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{ACTIVE_CLASS, SLIDE_SELECTOR, SNOW_CONTAINER_ID, SNOWFLAKE_CLASS};
use crate::error::{Result, StageError};
use crate::slideshow::SlideTarget;
use crate::snowfall::SnowContainer;
use crate::snowflake::{FlakeAppearance, SnowflakeDescriptor};

pub(crate) fn dom_error(err: JsValue) -> StageError {
    StageError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// The `#snowCanvas` element; every flake becomes a styled `<div>` inside it.
pub struct DomSnowContainer {
    document: Document,
    element: Element,
}

impl DomSnowContainer {
    pub fn find(document: &Document) -> Result<Self> {
        let element = document
            .get_element_by_id(SNOW_CONTAINER_ID)
            .ok_or_else(|| StageError::MissingContainer(SNOW_CONTAINER_ID.to_string()))?;
        Ok(Self {
            document: document.clone(),
            element,
        })
    }
}

impl SnowContainer for DomSnowContainer {
    fn append(&mut self, flake: &SnowflakeDescriptor, appearance: &FlakeAppearance) -> Result<()> {
        let node = self.document.create_element("div").map_err(dom_error)?;
        node.class_list().add_1(SNOWFLAKE_CLASS).map_err(dom_error)?;

        let node: HtmlElement = node
            .dyn_into()
            .map_err(|_| StageError::Dom("created element is not an HtmlElement".into()))?;
        let style = node.style();
        for (property, value) in flake.style(appearance).declarations() {
            style.set_property(property, value).map_err(dom_error)?;
        }

        self.element.append_child(&node).map_err(dom_error)?;
        Ok(())
    }
}

/// Slideshow members, collected once from `.slideshow-image`.
pub struct DomSlides {
    slides: Vec<Element>,
}

impl DomSlides {
    pub fn query(document: &Document) -> Result<Self> {
        let nodes = document.query_selector_all(SLIDE_SELECTOR).map_err(dom_error)?;
        let slides = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        Ok(Self { slides })
    }
}

impl SlideTarget for DomSlides {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        let Some(slide) = self.slides.get(index) else {
            return;
        };
        if let Err(err) = slide.class_list().toggle_with_force(ACTIVE_CLASS, active) {
            warn!("could not toggle slide {}: {:?}", index, err);
        }
    }
}
