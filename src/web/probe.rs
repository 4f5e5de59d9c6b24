use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::probe::ImageProbe;

/// Loads the locator into a detached `<img>` and waits for `load` or `error`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserImageProbe;

impl ImageProbe for BrowserImageProbe {
    async fn is_available(&self, url: &str) -> bool {
        let Ok(image) = HtmlImageElement::new() else {
            return false;
        };

        let outcome = Promise::new(&mut |resolve, _reject| {
            let loaded = resolve.clone();
            let onload = Closure::once_into_js(move || {
                let _ = loaded.call1(&JsValue::NULL, &JsValue::TRUE);
            });
            let onerror = Closure::once_into_js(move || {
                let _ = resolve.call1(&JsValue::NULL, &JsValue::FALSE);
            });
            image.set_onload(Some(onload.unchecked_ref()));
            image.set_onerror(Some(onerror.unchecked_ref()));
        });
        image.set_src(url);

        match JsFuture::from(outcome).await {
            Ok(value) => value.as_bool().unwrap_or(false),
            Err(_) => false,
        }
    }
}
