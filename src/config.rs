//! Controller configuration: the element bindings and timings the page
//! behaviors run against.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup is rendered by the server, so the ids and selectors below
//! are a contract with its templates. Defaults match the stock templates; a
//! page can override any field by putting JSON on the body's
//! `data-page-behavior` attribute.

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::PageError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element ids, selectors, and marker classes the controller binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementBindings {
    pub sidebar_toggle_id: String,
    pub sidebar_id: String,
    pub main_content_selector: String,
    pub header_selector: String,
    pub current_year_id: String,
    pub dark_mode_toggle_id: String,
    pub nav_link_selector: String,
    pub tooltip_selector: String,
    pub popover_selector: String,
    pub alert_selector: String,
    pub active_class: String,
    pub dark_mode_class: String,
}

impl Default for ElementBindings {
    fn default() -> Self {
        Self {
            sidebar_toggle_id: consts::SIDEBAR_TOGGLE_ID.to_owned(),
            sidebar_id: consts::SIDEBAR_ID.to_owned(),
            main_content_selector: consts::MAIN_CONTENT_SELECTOR.to_owned(),
            header_selector: consts::HEADER_SELECTOR.to_owned(),
            current_year_id: consts::CURRENT_YEAR_ID.to_owned(),
            dark_mode_toggle_id: consts::DARK_MODE_TOGGLE_ID.to_owned(),
            nav_link_selector: consts::NAV_LINK_SELECTOR.to_owned(),
            tooltip_selector: consts::TOOLTIP_SELECTOR.to_owned(),
            popover_selector: consts::POPOVER_SELECTOR.to_owned(),
            alert_selector: consts::ALERT_SELECTOR.to_owned(),
            active_class: consts::ACTIVE_CLASS.to_owned(),
            dark_mode_class: consts::DARK_MODE_CLASS.to_owned(),
        }
    }
}

impl ElementBindings {
    fn fields(&self) -> [(&'static str, &str); 12] {
        [
            ("sidebarToggleId", self.sidebar_toggle_id.as_str()),
            ("sidebarId", self.sidebar_id.as_str()),
            ("mainContentSelector", self.main_content_selector.as_str()),
            ("headerSelector", self.header_selector.as_str()),
            ("currentYearId", self.current_year_id.as_str()),
            ("darkModeToggleId", self.dark_mode_toggle_id.as_str()),
            ("navLinkSelector", self.nav_link_selector.as_str()),
            ("tooltipSelector", self.tooltip_selector.as_str()),
            ("popoverSelector", self.popover_selector.as_str()),
            ("alertSelector", self.alert_selector.as_str()),
            ("activeClass", self.active_class.as_str()),
            ("darkModeClass", self.dark_mode_class.as_str()),
        ]
    }
}

/// Everything the controller needs besides its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControllerConfig {
    pub bindings: ElementBindings,
    pub storage_key: String,
    pub mobile_breakpoint_px: u32,
    pub alert_dismiss_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            bindings: ElementBindings::default(),
            storage_key: consts::DARK_MODE_STORAGE_KEY.to_owned(),
            mobile_breakpoint_px: consts::MOBILE_BREAKPOINT_PX,
            alert_dismiss_ms: consts::ALERT_DISMISS_MS,
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| PageError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make DOM lookups throw or never match.
    pub fn validate(&self) -> Result<(), PageError> {
        for (field, value) in self.bindings.fields() {
            if value.trim().is_empty() {
                return Err(PageError::InvalidBinding { field, reason: "must not be empty".into() });
            }
        }
        for (field, class) in [
            ("activeClass", &self.bindings.active_class),
            ("darkModeClass", &self.bindings.dark_mode_class),
        ] {
            if class.chars().any(char::is_whitespace) {
                return Err(PageError::InvalidBinding { field, reason: "class names cannot contain whitespace".into() });
            }
        }
        if self.storage_key.is_empty() {
            return Err(PageError::InvalidBinding { field: "storageKey", reason: "must not be empty".into() });
        }
        if self.mobile_breakpoint_px == 0 {
            return Err(PageError::InvalidBinding { field: "mobileBreakpointPx", reason: "must be positive".into() });
        }
        Ok(())
    }
}
