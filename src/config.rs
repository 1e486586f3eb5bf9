use std::time::Duration;

pub const APP_NAME: &str = "NVR";

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The footer is hidden while this page is active.
pub const CONFIGURATION_PATH: &str = "/configuration";

pub const ROOT_PATH: &str = "/";

pub const LOADING_TEXT: &str = "Loading";

// Toasts

pub const TOAST_AUTO_CLOSE: Duration = Duration::from_millis(5000);

/// Fraction of the toast width it must be dragged before it is dismissed.
pub const TOAST_DRAG_FRACTION: f64 = 0.8;

pub const TOAST_TICK: Duration = Duration::from_millis(100);

// Scroll-to-top

/// Vertical scroll offset, in CSS pixels, past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 100.0;
