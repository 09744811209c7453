//! Shared context for the Tipjar screens.
//!
//! The root component provides the loaded [`AppConfig`]; screens build
//! their own stores and read configuration through these hooks.
//!
//! ## Usage
//!
//! ```ignore
//! let config = use_config();
//! let network = use_network();
//! let mut toast = use_screen_toast();
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use tipjar_core::{AppConfig, MockNetwork};
use tipjar_ui::{use_toast, ToastHandle};

/// Hook to access the application configuration.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Simulated backend configured from [`AppConfig`].
pub fn use_network() -> MockNetwork {
    let config = use_config();
    use_hook(move || MockNetwork::from_config(&config))
}

/// Toast slot for one screen, dismissed after `toast_ms`.
pub fn use_screen_toast() -> ToastHandle {
    let config = use_config();
    use_toast(Duration::from_millis(config.toast_ms))
}
