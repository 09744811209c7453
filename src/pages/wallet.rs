//! Wallet page - tip history with filters and aggregates.
//!
//! Refresh goes through the simulated backend and can fail; the error
//! banner's Retry runs the same refresh again.

use dioxus::prelude::*;
use tipjar_core::{
    money, now_ms, relative_time, seed, TipAction, TipId, Toast, Wallet as TipWallet, WalletFilter,
};
use tipjar_ui::{Button, ButtonVariant, EmptyState, ErrorBanner, StatTile, ToastBanner};

use crate::components::{TipDrawer, TipRow, WalletFilters};
use crate::context::{use_config, use_network, use_screen_toast};

/// Status line under the page title.
pub fn sync_status(now: i64, last_synced: Option<i64>, refreshing: bool) -> String {
    match (refreshing, last_synced) {
        (true, _) => "Refreshing\u{2026}".to_string(),
        (false, Some(at)) => format!("Updated {}", relative_time(now, at)),
        (false, None) => "Not refreshed yet".to_string(),
    }
}

#[component]
pub fn Wallet() -> Element {
    let config = use_config();
    let network = use_network();
    let (size, wallet_seed) = (config.wallet_size, config.wallet_seed);

    let mut wallet = use_signal(move || TipWallet::new(seed::tips(now_ms(), size, wallet_seed)));
    let mut filter = use_signal(WalletFilter::default);
    let mut selected: Signal<Option<TipId>> = use_signal(|| None);
    let mut refreshing = use_signal(|| false);
    let mut pending: Signal<Option<TipAction>> = use_signal(|| None);
    let mut toast = use_screen_toast();

    let refresh_network = network.clone();
    let mut refresh = move || {
        if refreshing() {
            return;
        }
        refreshing.set(true);
        let network = refresh_network.clone();
        spawn(async move {
            match network.fallible_call("refresh your tips").await {
                Ok(()) => {
                    wallet.write().mark_synced(now_ms());
                    toast.show(Toast::success("Tips up to date"));
                }
                Err(e) => {
                    tracing::warn!("wallet refresh failed: {}", e);
                    wallet.write().mark_failed(e.to_string());
                }
            }
            refreshing.set(false);
        });
    };
    let mut retry = refresh.clone();

    let on_action = move |action: TipAction| {
        if pending().is_some() {
            return;
        }
        let Some(item) = selected().and_then(|id| wallet.read().get(&id).cloned()) else {
            return;
        };
        pending.set(Some(action));
        let network = network.clone();
        spawn(async move {
            match network.call(action.label()).await {
                Ok(()) => toast.show(action.outcome(&item)),
                Err(e) => toast.show(Toast::from(&e)),
            }
            pending.set(None);
        });
    };

    let now = now_ms();
    let current = filter();
    let view = wallet.read().view(&current, now);
    let status = sync_status(now, wallet.read().last_synced(), refreshing());
    let error = wallet.read().refresh_error().map(str::to_string);
    let selected_item = selected().and_then(|id| wallet.read().get(&id).cloned());
    let average = view.average_tip.map(money).unwrap_or_else(|| "\u{2014}".to_string());

    rsx! {
        div { class: "page wallet",
            header { class: "page-head",
                div {
                    h1 { class: "page-title", "Tip history" }
                    p { class: "page-subtitle", "{status}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    busy: refreshing(),
                    onclick: move |_| refresh(),
                    "Refresh"
                }
            }

            if let Some(message) = error {
                ErrorBanner {
                    message,
                    on_retry: move |_| retry(),
                    on_dismiss: move |_| wallet.write().dismiss_error(),
                }
            }

            div { class: "stat-row",
                StatTile { label: "Tips".to_string(), value: view.count.to_string() }
                StatTile { label: "Completed".to_string(), value: money(view.completed_total), tone: "good".to_string() }
                StatTile { label: "Pending".to_string(), value: money(view.pending_total) }
                StatTile { label: "Refunded".to_string(), value: money(view.refunded_total) }
                StatTile { label: "Average".to_string(), value: average }
            }

            WalletFilters {
                filter: current.clone(),
                venues: view.venues.clone(),
                on_change: move |next: WalletFilter| filter.set(next),
            }

            if view.items.is_empty() {
                EmptyState {
                    title: "No tips match these filters".to_string(),
                    hint: "Clear a filter or widen the date range".to_string(),
                }
            }

            div { class: "tip-list",
                for item in view.items.iter() {
                    TipRow {
                        key: "{item.id.0}",
                        item: item.clone(),
                        now,
                        on_open: move |id: TipId| selected.set(Some(id)),
                    }
                }
            }

            if let Some(item) = selected_item {
                TipDrawer {
                    key: "{item.id.0}",
                    item: item.clone(),
                    pending: pending(),
                    on_action,
                    on_close: move |_| selected.set(None),
                }
            }

            ToastBanner { toast: toast.current(), on_close: move |_| toast.close() }
        }
    }
}
