//! Capability interface over the page's UI widget toolkit.
//!
//! The controller never calls the toolkit directly; the browser build binds
//! Bootstrap's `Tooltip`, `Popover` and `Alert` behind this trait.

pub trait Widgets {
    type Element;

    fn attach_tooltip(&self, element: &Self::Element);
    fn attach_popover(&self, element: &Self::Element);
    /// Close `element` once `delay_ms` has elapsed. Fire-and-forget.
    fn dismiss_after(&self, element: Self::Element, delay_ms: u32);
}
