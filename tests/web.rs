#![cfg(all(target_arch = "wasm32", feature = "web"))]

use snowfall::ImageProbe;
use snowfall::constants::{ACTIVE_CLASS, SNOWFLAKE_CLASS};
use snowfall::web::{BrowserImageProbe, generate_snowfall, init_logging, mount_slideshow};
use snowfall::{SlideshowConfig, SnowfallConfig, StageError};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const PIXEL_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

fn document() -> web_sys::Document {
    snowfall::web::document().unwrap()
}

fn add_slides(document: &web_sys::Document, count: usize) -> Vec<web_sys::Element> {
    let body = document.body().unwrap();
    (0..count)
        .map(|_| {
            let img = document.create_element("img").unwrap();
            img.class_list().add_1("slideshow-image").unwrap();
            body.append_child(&img).unwrap();
            img
        })
        .collect()
}

fn remove_all(document: &web_sys::Document, elements: Vec<web_sys::Element>) {
    let body = document.body().unwrap();
    for element in elements {
        body.remove_child(&element).unwrap();
    }
}

#[wasm_bindgen_test]
fn console_logging_is_enabled_at_info() {
    init_logging();
    assert_eq!(log::max_level(), log::LevelFilter::Info);
    log::info!("console logging ready");
}

#[wasm_bindgen_test]
async fn missing_container_stops_only_the_snowfall() {
    let document = document();
    assert!(document.get_element_by_id("snowCanvas").is_none());
    let slides = add_slides(&document, 2);

    let result = generate_snowfall(&document, SnowfallConfig::default()).await;
    assert!(matches!(result, Err(StageError::MissingContainer(_))));

    let page = mount_slideshow(&document, SlideshowConfig::default()).unwrap();
    assert!(slides[0].class_list().contains(ACTIVE_CLASS));
    assert!(!slides[1].class_list().contains(ACTIVE_CLASS));

    drop(page);
    remove_all(&document, slides);
}

#[wasm_bindgen_test]
async fn probe_resolves_true_for_decodable_image() {
    assert!(BrowserImageProbe.is_available(PIXEL_PNG).await);
}

#[wasm_bindgen_test]
async fn probe_resolves_false_for_missing_image() {
    assert!(!BrowserImageProbe.is_available("/definitely-missing-snowflake.png").await);
}

#[wasm_bindgen_test]
async fn fills_container_with_circles_when_image_is_missing() {
    let document = document();
    let body = document.body().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id("snowCanvas");
    body.append_child(&container).unwrap();

    let config = SnowfallConfig {
        image_url: "/definitely-missing-snowflake.png".into(),
        ..SnowfallConfig::default()
    };
    let count = generate_snowfall(&document, config).await.unwrap();

    assert_eq!(count, 50);
    let flakes = container.get_elements_by_class_name(SNOWFLAKE_CLASS);
    assert_eq!(flakes.length(), 50);
    let style = flakes.item(0).unwrap().get_attribute("style").unwrap();
    assert!(style.contains("border-radius: 50%"));

    body.remove_child(&container).unwrap();
}

#[wasm_bindgen_test]
fn slideshow_marks_first_slide_active() {
    let document = document();
    let slides = add_slides(&document, 3);

    let page = mount_slideshow(&document, SlideshowConfig::default()).unwrap();
    assert!(slides[0].class_list().contains(ACTIVE_CLASS));
    assert!(!slides[1].class_list().contains(ACTIVE_CLASS));

    page.slideshow.borrow_mut().advance();
    assert!(slides[1].class_list().contains(ACTIVE_CLASS));
    assert!(!slides[0].class_list().contains(ACTIVE_CLASS));

    drop(page);
    remove_all(&document, slides);
}
