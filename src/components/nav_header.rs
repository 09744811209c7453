//! Navigation Header Component
//!
//! App title and one link per screen, with Lucide icons.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavLocation {
    Reminders,
    Security,
    Receipt,
    Wallet,
}

impl NavLocation {
    pub const ALL: [NavLocation; 4] = [
        NavLocation::Reminders,
        NavLocation::Security,
        NavLocation::Receipt,
        NavLocation::Wallet,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Reminders => "Reminders",
            NavLocation::Security => "Security",
            NavLocation::Receipt => "Receipt",
            NavLocation::Wallet => "Wallet",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Reminders => Route::Reminders {},
            NavLocation::Security => Route::Security {},
            NavLocation::Receipt => Route::ReceiptPage {},
            NavLocation::Wallet => Route::Wallet {},
        }
    }
}

/// Navigation Header component
#[component]
pub fn NavHeader(current: NavLocation) -> Element {
    rsx! {
        header { class: "nav-header",
            div { class: "nav-title",
                h1 { class: "app-title", "Tipjar" }
            }
            nav { class: "nav-links",
                for location in NavLocation::ALL {
                    Link {
                        key: "{location.display_name()}",
                        to: location.route(),
                        class: if location == current { "nav-link active" } else { "nav-link" },
                        span { class: "nav-link-icon", {render_nav_icon(location)} }
                        span { class: "nav-link-label", "{location.display_name()}" }
                    }
                }
            }
        }
    }
}

/// Render Lucide icon for navigation location
fn render_nav_icon(location: NavLocation) -> Element {
    let paths: &[&str] = match location {
        // bell
        NavLocation::Reminders => &[
            "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
            "M10.3 21a1.94 1.94 0 0 0 3.4 0",
        ],
        // shield-check
        NavLocation::Security => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            "m9 12 2 2 4-4",
        ],
        // receipt
        NavLocation::Receipt => &[
            "M4 2v20l2-1 2 1 2-1 2 1 2-1 2 1 2-1 2 1V2l-2 1-2-1-2 1-2-1-2 1-2-1-2 1Z",
            "M16 8h-6a2 2 0 1 0 0 4h4a2 2 0 1 1 0 4H8",
            "M12 17.5v-11",
        ],
        // wallet
        NavLocation::Wallet => &[
            "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1",
            "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4",
        ],
    };

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths.iter() {
                path { d: "{d}" }
            }
        }
    }
}
