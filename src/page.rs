//! The slice of the DOM the page behaviors touch.
//!
//! `Page` is deliberately narrow: element lookup, class membership, text and
//! markup writes, plus the two environment reads the behaviors need
//! (viewport width and the current year). The browser build implements it over
//! `web-sys`; tests implement it over an in-memory tree.

/// Host page the controller runs against.
pub trait Page {
    /// Handle to an element. Cheap to clone; clones refer to the same element.
    type Element: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// First element matching a CSS selector.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
    /// All elements matching a CSS selector, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;
    fn body(&self) -> Option<Self::Element>;

    fn add_class(&self, element: &Self::Element, class: &str);
    fn remove_class(&self, element: &Self::Element, class: &str);
    /// Flip a class and report whether it is present afterwards.
    fn toggle_class(&self, element: &Self::Element, class: &str) -> bool;
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn set_text(&self, element: &Self::Element, text: &str);
    fn set_inner_html(&self, element: &Self::Element, html: &str);

    /// Layout viewport width in logical pixels.
    fn viewport_width(&self) -> f64;
    /// Calendar year of the viewer's local clock.
    fn current_year(&self) -> i32;
}
