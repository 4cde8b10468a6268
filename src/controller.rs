//! Page behavior controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server-rendered pages ship plain markup; this controller layers the small
//! interactive behaviors on top once the DOM is ready: sidebar collapse,
//! footer year, dark mode, sidebar link highlighting, and widget start-up.
//! The five setup routines are independent and touch disjoint elements.
//!
//! The controller owns no event plumbing. [`PageController::install`] returns
//! the elements that need click listeners and the host wires those listeners
//! to [`PageController::toggle_sidebar`], [`PageController::toggle_dark_mode`]
//! and [`PageController::activate_nav_link`].

use crate::config::ControllerConfig;
use crate::error::PageError;
use crate::page::Page;
use crate::settings::{SettingsStore, ThemeMode};
use crate::widgets::Widgets;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Elements the host must attach click listeners to.
#[derive(Debug, Clone)]
pub struct Installed<E> {
    pub sidebar_toggle: Option<E>,
    pub dark_mode_toggle: Option<E>,
    /// Sidebar links in document order; a click on `nav_links[i]` maps to
    /// `activate_nav_link(i)`.
    pub nav_links: Vec<E>,
}

/// Counts of elements handed to the widget toolkit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetSummary {
    pub tooltips: usize,
    pub popovers: usize,
    pub alerts: usize,
}

/// The three elements that open and close together.
#[derive(Debug, Clone)]
struct SidebarTargets<E> {
    sidebar: Option<E>,
    main_content: Option<E>,
    header: Option<E>,
}

pub struct PageController<P: Page, S, W> {
    page: P,
    store: S,
    widgets: W,
    config: ControllerConfig,
    theme: ThemeMode,
    dark_mode_toggle: Option<P::Element>,
    targets: SidebarTargets<P::Element>,
    nav_links: Vec<P::Element>,
}

impl<P, S, W> PageController<P, S, W>
where
    P: Page,
    S: SettingsStore,
    W: Widgets<Element = P::Element>,
{
    pub fn new(page: P, store: S, widgets: W, config: ControllerConfig) -> Self {
        let b = &config.bindings;
        let targets = SidebarTargets {
            sidebar: page.element_by_id(&b.sidebar_id),
            main_content: page.query_selector(&b.main_content_selector),
            header: page.query_selector(&b.header_selector),
        };
        Self {
            page,
            store,
            widgets,
            config,
            theme: ThemeMode::Light,
            dark_mode_toggle: None,
            targets,
            nav_links: Vec::new(),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn widgets(&self) -> &W {
        &self.widgets
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Run every setup routine and report what needs listeners.
    pub fn install(&mut self) -> Installed<P::Element> {
        let sidebar_toggle = self.setup_sidebar_toggle();
        self.setup_footer_year();
        let dark_mode_toggle = self.setup_dark_mode();
        let nav_links = self.setup_nav_links();
        let widgets = self.setup_widgets();

        log::debug!(
            "page behaviors installed: sidebar_toggle={} dark_mode_toggle={} nav_links={} tooltips={} popovers={} alerts={}",
            sidebar_toggle.is_some(),
            dark_mode_toggle.is_some(),
            nav_links.len(),
            widgets.tooltips,
            widgets.popovers,
            widgets.alerts,
        );

        Installed { sidebar_toggle, dark_mode_toggle, nav_links }
    }

    // --- Sidebar ---

    /// Locate the sidebar toggle control. `None` means the page has none and
    /// the behavior is skipped.
    pub fn setup_sidebar_toggle(&self) -> Option<P::Element> {
        self.page.element_by_id(&self.config.bindings.sidebar_toggle_id)
    }

    /// Flip the open marker on sidebar, main content and header together.
    pub fn toggle_sidebar(&self) {
        let class = &self.config.bindings.active_class;
        for el in [&self.targets.sidebar, &self.targets.main_content, &self.targets.header]
            .into_iter()
            .flatten()
        {
            self.page.toggle_class(el, class);
        }
    }

    // --- Footer ---

    /// Write the current year into the footer slot. Returns whether the slot exists.
    pub fn setup_footer_year(&self) -> bool {
        let Some(el) = self.page.element_by_id(&self.config.bindings.current_year_id) else {
            return false;
        };
        self.page.set_text(&el, &self.page.current_year().to_string());
        true
    }

    // --- Dark mode ---

    /// Apply the persisted theme and locate the toggle control.
    pub fn setup_dark_mode(&mut self) -> Option<P::Element> {
        let flag = match self.store.get(&self.config.storage_key) {
            Ok(flag) => flag,
            Err(e) => {
                log::warn!("dark mode preference unreadable, using light: {e}");
                None
            }
        };
        self.theme = ThemeMode::from_flag(flag.as_deref());
        self.dark_mode_toggle = self.page.element_by_id(&self.config.bindings.dark_mode_toggle_id);

        if self.theme.is_dark() {
            if let Some(body) = self.page.body() {
                self.page.add_class(&body, &self.config.bindings.dark_mode_class);
            }
        }
        self.render_toggle_label();
        self.dark_mode_toggle.clone()
    }

    /// Flip the theme, persist it, and relabel the toggle. Returns the new mode.
    pub fn toggle_dark_mode(&mut self) -> ThemeMode {
        self.theme = match self.page.body() {
            Some(body) => {
                if self.page.toggle_class(&body, &self.config.bindings.dark_mode_class) {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                }
            }
            None => self.theme.toggled(),
        };
        self.render_toggle_label();
        if let Err(e) = self.store.set(&self.config.storage_key, self.theme.flag()) {
            log::warn!("dark mode preference not saved: {e}");
        }
        self.theme
    }

    fn render_toggle_label(&self) {
        if let Some(toggle) = &self.dark_mode_toggle {
            self.page.set_inner_html(toggle, self.theme.toggle_label());
        }
    }

    // --- Sidebar navigation ---

    pub fn setup_nav_links(&mut self) -> Vec<P::Element> {
        self.nav_links = self.page.query_selector_all(&self.config.bindings.nav_link_selector);
        self.nav_links.clone()
    }

    /// Mark `nav_links[index]` as the only active link. On mobile widths the
    /// sidebar marker is set and the content/header markers cleared.
    ///
    /// Returns `false` for an index outside the installed links.
    pub fn activate_nav_link(&self, index: usize) -> bool {
        let Some(clicked) = self.nav_links.get(index) else {
            return false;
        };
        let class = &self.config.bindings.active_class;
        for link in &self.nav_links {
            self.page.remove_class(link, class);
        }
        self.page.add_class(clicked, class);

        if self.is_mobile() {
            if let Some(sidebar) = &self.targets.sidebar {
                self.page.add_class(sidebar, class);
            }
            for el in [&self.targets.main_content, &self.targets.header].into_iter().flatten() {
                self.page.remove_class(el, class);
            }
        }
        true
    }

    pub fn is_mobile(&self) -> bool {
        self.page.viewport_width() <= f64::from(self.config.mobile_breakpoint_px)
    }

    // --- Widgets ---

    /// Hand tooltip and popover triggers to the toolkit and schedule alert dismissal.
    pub fn setup_widgets(&self) -> WidgetSummary {
        let b = &self.config.bindings;
        let tooltips = self.page.query_selector_all(&b.tooltip_selector);
        for el in &tooltips {
            self.widgets.attach_tooltip(el);
        }
        let popovers = self.page.query_selector_all(&b.popover_selector);
        for el in &popovers {
            self.widgets.attach_popover(el);
        }
        let alerts = self.page.query_selector_all(&b.alert_selector);
        let summary = WidgetSummary { tooltips: tooltips.len(), popovers: popovers.len(), alerts: alerts.len() };
        for el in alerts {
            self.widgets.dismiss_after(el, self.config.alert_dismiss_ms);
        }
        summary
    }
}

/// Attach a listener to every sidebar link, passing each its index. A link
/// that fails is logged and skipped; the rest are still wired. Returns the
/// number of links wired.
pub fn wire_nav_links<E, F>(links: &[E], mut attach: F) -> usize
where
    F: FnMut(usize, &E) -> Result<(), PageError>,
{
    let mut wired = 0;
    for (index, link) in links.iter().enumerate() {
        match attach(index, link) {
            Ok(()) => wired += 1,
            Err(e) => log::warn!("sidebar link {index} not wired: {e}"),
        }
    }
    wired
}
