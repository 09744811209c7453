use dioxus::prelude::*;

use crate::components::{NavHeader, NavLocation};
use crate::pages::{ReceiptPage, Reminders, Security, Wallet};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Reminder rules per venue
/// - `/security` - Devices, settings and the audit log
/// - `/receipt` - The shareable receipt viewer
/// - `/wallet` - Tip history
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Reminders {},
    #[route("/security")]
    Security {},
    #[route("/receipt")]
    ReceiptPage {},
    #[route("/wallet")]
    Wallet {},
}

/// Screens selectable with `--screen`
#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum Screen {
    Reminders,
    Security,
    Receipt,
    Wallet,
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Reminders => Route::Reminders {},
            Screen::Security => Route::Security {},
            Screen::Receipt => Route::ReceiptPage {},
            Screen::Wallet => Route::Wallet {},
        }
    }

    pub fn location(&self) -> NavLocation {
        match self {
            Screen::Reminders => NavLocation::Reminders,
            Screen::Security => NavLocation::Security,
            Screen::Receipt => NavLocation::Receipt,
            Screen::Wallet => NavLocation::Wallet,
        }
    }
}

/// Root application component.
///
/// Provides global styles, the loaded configuration and routing.
#[component]
pub fn App() -> Element {
    let launch = crate::launch_settings();
    use_context_provider(|| launch.config.clone());
    use_context_provider(|| launch.screen);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Header plus the active screen.
///
/// Jumps to the `--screen` choice once, on first mount.
#[component]
fn Shell() -> Element {
    let start: Option<Screen> = use_context();
    let nav = navigator();
    let route: Route = use_route();

    use_effect(move || {
        if let Some(screen) = start.filter(|s| *s != Screen::Reminders) {
            tracing::debug!(?screen, "opening start screen");
            nav.replace(screen.route());
        }
    });

    let current = match route {
        Route::Reminders {} => NavLocation::Reminders,
        Route::Security {} => NavLocation::Security,
        Route::ReceiptPage {} => NavLocation::Receipt,
        Route::Wallet {} => NavLocation::Wallet,
    };

    rsx! {
        div { class: "app-shell",
            NavHeader { current }
            main { class: "screen", Outlet::<Route> {} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_map_to_routes() {
        assert_eq!(Screen::Wallet.route(), Route::Wallet {});
        assert_eq!(Screen::Receipt.route(), Route::ReceiptPage {});
        assert_eq!(Screen::Security.location(), NavLocation::Security);
    }

    #[test]
    fn routes_render_paths() {
        assert_eq!(Route::Reminders {}.to_string(), "/");
        assert_eq!(Route::Security {}.to_string(), "/security");
        assert_eq!(Route::Wallet {}.to_string(), "/wallet");
    }
}
