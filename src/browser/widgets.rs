//! Bootstrap bindings behind the `Widgets` capability.
//!
//! Bootstrap is loaded by the page as the global `bootstrap`. Every call is
//! bound with `catch`, so a page without Bootstrap logs a warning instead
//! of trapping.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::widgets::Widgets;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Popover;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Popover, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &Alert) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapWidgets;

impl Widgets for BootstrapWidgets {
    type Element = Element;

    fn attach_tooltip(&self, element: &Element) {
        if let Err(e) = Tooltip::new(element) {
            log::warn!("bootstrap.Tooltip init failed: {e:?}");
        }
    }

    fn attach_popover(&self, element: &Element) {
        if let Err(e) = Popover::new(element) {
            log::warn!("bootstrap.Popover init failed: {e:?}");
        }
    }

    fn dismiss_after(&self, element: Element, delay_ms: u32) {
        log::debug!("alert dismissal scheduled in {delay_ms}ms");
        Timeout::new(delay_ms, move || {
            let result = Alert::new(&element).and_then(|alert| alert.close());
            if let Err(e) = result {
                log::warn!("bootstrap.Alert close failed: {e:?}");
            }
        })
        .forget();
    }
}
