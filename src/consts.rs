//! Shared constants: the default DOM contract with the page markup, storage
//! flag values, toggle labels, and timings.

// --- DOM contract ---

pub const SIDEBAR_TOGGLE_ID: &str = "sidebarToggle";
pub const SIDEBAR_ID: &str = "sidebar";
pub const MAIN_CONTENT_SELECTOR: &str = ".main-content";
pub const HEADER_SELECTOR: &str = ".header";
pub const CURRENT_YEAR_ID: &str = "currentYear";
pub const DARK_MODE_TOGGLE_ID: &str = "darkModeToggle";
pub const NAV_LINK_SELECTOR: &str = ".sidebar-menu a";
pub const TOOLTIP_SELECTOR: &str = "[data-toggle=\"tooltip\"]";
pub const POPOVER_SELECTOR: &str = "[data-toggle=\"popover\"]";
pub const ALERT_SELECTOR: &str = ".alert";

/// Marker class for sidebar/content/header open state and the current nav link.
pub const ACTIVE_CLASS: &str = "active";
/// Marker class applied to `<body>` while dark mode is on.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Body attribute carrying optional JSON overrides for `ControllerConfig`.
pub const CONFIG_ATTRIBUTE: &str = "data-page-behavior";

// --- Persisted flag ---

pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";
pub const DARK_MODE_ENABLED: &str = "enabled";
pub const DARK_MODE_DISABLED: &str = "disabled";

// --- Toggle labels ---

/// Shown while dark mode is active.
pub const LIGHT_MODE_LABEL: &str = r#"<i class="fas fa-sun"></i> Light Mode"#;
/// Shown while light mode is active.
pub const DARK_MODE_LABEL: &str = r#"<i class="fas fa-moon"></i> Dark Mode"#;

// --- Timings and thresholds ---

/// Viewports at or below this width (logical px) are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;
/// Delay before alerts present at load are closed.
pub const ALERT_DISMISS_MS: u32 = 5000;

pub const DEFAULT_DELETE_MESSAGE: &str = "Are you sure you want to delete this item?";
pub const INVALID_DATE: &str = "Invalid Date";
