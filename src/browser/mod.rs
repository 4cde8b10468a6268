//! Browser entry point and web-sys adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm module is loaded by the server-rendered layout. On start it
//! registers the global helpers used by inline markup, then installs the page
//! behaviors once the DOM is ready. Click listeners hold the controller
//! through `Rc<RefCell<..>>`; they live for the whole page view and are
//! forgotten after attaching.

mod page;
mod prompt;
mod storage;
mod widgets;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

pub use page::DomPage;
pub use prompt::WindowPrompt;
pub use storage::BrowserStore;
pub use widgets::BootstrapWidgets;

use crate::config::ControllerConfig;
use crate::confirm::confirm_delete;
use crate::consts::{CONFIG_ATTRIBUTE, INVALID_DATE};
use crate::controller::{PageController, wire_nav_links};
use crate::error::PageError;
use crate::format::{format_currency, format_date, format_datetime};

pub type BrowserController = PageController<DomPage, BrowserStore, BootstrapWidgets>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }

    let Some(window) = web_sys::window() else {
        log::warn!("{}", PageError::NoWindow);
        return;
    };
    register_globals(&window);

    let Some(document) = window.document() else {
        log::warn!("page behaviors skipped: document unavailable");
        return;
    };
    if document.ready_state() == "loading" {
        let ready = Closure::<dyn FnMut()>::new(boot);
        match document.add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref()) {
            Ok(()) => ready.forget(),
            Err(e) => log::warn!("DOMContentLoaded listener failed: {e:?}"),
        }
    } else {
        boot();
    }
}

fn boot() {
    if let Err(e) = install() {
        log::warn!("page behaviors not installed: {e}");
    }
}

/// Build the controller against the live page and wire its click handlers.
fn install() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let page = DomPage::new(window.clone())?;
    let config = load_config(&page);
    let store = BrowserStore::open(&window);

    let controller = Rc::new(RefCell::new(PageController::new(page, store, BootstrapWidgets, config)));
    let installed = controller.borrow_mut().install();

    if let Some(toggle) = &installed.sidebar_toggle {
        let ctl = Rc::clone(&controller);
        on_click(toggle, move || ctl.borrow().toggle_sidebar())?;
    }
    if let Some(toggle) = &installed.dark_mode_toggle {
        let ctl = Rc::clone(&controller);
        on_click(toggle, move || {
            let mode = ctl.borrow_mut().toggle_dark_mode();
            log::debug!("theme switched to {mode:?}");
        })?;
    }
    let wired = wire_nav_links(&installed.nav_links, |index, link| {
        let ctl = Rc::clone(&controller);
        on_click(link, move || {
            ctl.borrow().activate_nav_link(index);
        })
    });

    log::info!("page behaviors ready ({wired} of {} sidebar links wired)", installed.nav_links.len());
    Ok(())
}

/// Defaults, overridden by JSON on the body's `data-page-behavior` attribute.
fn load_config(page: &DomPage) -> ControllerConfig {
    let Some(raw) = page.body_attribute(CONFIG_ATTRIBUTE) else {
        return ControllerConfig::default();
    };
    match ControllerConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring {CONFIG_ATTRIBUTE}: {e}");
            ControllerConfig::default()
        }
    }
}

fn on_click(target: &Element, handler: impl FnMut() + 'static) -> Result<(), PageError> {
    let listener = Closure::<dyn FnMut()>::new(handler);
    target
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(|e| PageError::Dom(format!("click listener: {e:?}")))?;
    listener.forget();
    Ok(())
}

/// Expose `confirmDelete`, `formatCurrency`, `formatDate` and
/// `formatDateTime` on `window` for inline page markup.
fn register_globals(window: &Window) {
    let prompt = WindowPrompt::new(window.clone());
    expose(
        window,
        "confirmDelete",
        Closure::<dyn Fn(JsValue) -> bool>::new(move |message: JsValue| {
            confirm_delete(&prompt, message.as_string().as_deref())
        }),
    );
    expose(
        window,
        "formatCurrency",
        Closure::<dyn Fn(JsValue) -> String>::new(|amount: JsValue| {
            format_currency(js_sys::Number::new(&amount).value_of())
        }),
    );
    expose(
        window,
        "formatDate",
        Closure::<dyn Fn(JsValue) -> String>::new(|input: JsValue| {
            input.as_string().map_or_else(|| INVALID_DATE.to_owned(), |s| format_date(&s))
        }),
    );
    expose(
        window,
        "formatDateTime",
        Closure::<dyn Fn(JsValue) -> String>::new(|input: JsValue| {
            input.as_string().map_or_else(|| INVALID_DATE.to_owned(), |s| format_datetime(&s))
        }),
    );
}

fn expose<T: ?Sized + WasmClosure>(window: &Window, name: &str, helper: Closure<T>) {
    match js_sys::Reflect::set(window, &JsValue::from_str(name), helper.as_ref()) {
        Ok(true) => helper.forget(),
        Ok(false) => log::warn!("window.{name} is read-only"),
        Err(e) => log::warn!("window.{name} not registered: {e:?}"),
    }
}
