//! `Page` over the live document.

use chrono::Datelike;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::error::PageError;
use crate::page::Page;

pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new(window: Window) -> Result<Self, PageError> {
        let document = window.document().ok_or_else(|| PageError::Dom("document unavailable".into()))?;
        Ok(Self { window, document })
    }

    /// Raw attribute value on `<body>`, if both exist.
    pub fn body_attribute(&self, name: &str) -> Option<String> {
        self.document.body().and_then(|body| body.get_attribute(name))
    }
}

impl Page for DomPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("querySelector({selector}) failed: {e:?}");
                None
            }
        }
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("querySelectorAll({selector}) failed: {e:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn add_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().add_1(class) {
            log::warn!("classList.add({class}) failed: {e:?}");
        }
    }

    fn remove_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().remove_1(class) {
            log::warn!("classList.remove({class}) failed: {e:?}");
        }
    }

    fn toggle_class(&self, element: &Element, class: &str) -> bool {
        match element.class_list().toggle(class) {
            Ok(present) => present,
            Err(e) => {
                log::warn!("classList.toggle({class}) failed: {e:?}");
                self.has_class(element, class)
            }
        }
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_inner_html(&self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn viewport_width(&self) -> f64 {
        // Unknown width is treated as desktop so link clicks never touch the sidebar.
        match self.window.inner_width() {
            Ok(width) => width.as_f64().unwrap_or(f64::INFINITY),
            Err(e) => {
                log::warn!("innerWidth unavailable: {e:?}");
                f64::INFINITY
            }
        }
    }

    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}
