//! Delayed work tied to a component
//!
//! [`Scheduler`] holds at most one pending task. Scheduling again cancels
//! the previous task, and tasks are dropped with the owning component, so
//! a timer never fires after its screen is gone.

use std::time::Duration;

use dioxus::prelude::*;
use tipjar_core::{Toast, ToastCenter};

#[derive(Clone, Copy, PartialEq)]
pub struct Scheduler {
    pending: Signal<Option<Task>>,
}

impl Scheduler {
    /// Run `f` after `delay`, replacing any pending run.
    pub fn schedule<F>(&mut self, delay: Duration, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        let mut pending = self.pending;
        let task = spawn(async move {
            tokio::time::sleep(delay).await;
            pending.set(None);
            f();
        });
        self.pending.set(Some(task));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.read().is_some()
    }
}

pub fn use_scheduler() -> Scheduler {
    let pending = use_signal(|| None);
    Scheduler { pending }
}

/// A screen's toast slot with auto-dismiss
#[derive(Clone, Copy, PartialEq)]
pub struct ToastHandle {
    center: Signal<ToastCenter>,
    timer: Scheduler,
    visible_for: Duration,
}

impl ToastHandle {
    pub fn show(&mut self, toast: Toast) {
        tracing::debug!(message = %toast.message, tone = ?toast.tone, "toast");
        let ticket = self.center.write().show(toast);
        let mut center = self.center;
        self.timer.schedule(self.visible_for, move || {
            center.write().dismiss(ticket);
        });
    }

    pub fn close(&mut self) {
        self.timer.cancel();
        self.center.write().clear();
    }

    pub fn current(&self) -> Option<Toast> {
        self.center.read().current().cloned()
    }
}

/// Create a toast slot whose toasts hide after `visible_for`.
///
/// # Example
///
/// ```rust,ignore
/// let mut toast = use_toast(Duration::from_millis(config.toast_ms));
/// toast.show(Toast::success("Saved"));
///
/// rsx! {
///     ToastBanner { toast: toast.current(), on_close: move |_| toast.close() }
/// }
/// ```
pub fn use_toast(visible_for: Duration) -> ToastHandle {
    let center = use_signal(ToastCenter::new);
    let timer = use_scheduler();
    ToastHandle {
        center,
        timer,
        visible_for,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;

    const VISIBLE: Duration = Duration::from_millis(1000);

    thread_local! {
        static TOASTS: Cell<Option<ToastHandle>> = const { Cell::new(None) };
        static TIMER: Cell<Option<(Scheduler, Signal<u32>)>> = const { Cell::new(None) };
    }

    /// Drive the dom's tasks while virtual time moves forward by `span`.
    async fn run_for(dom: &mut VirtualDom, span: Duration) {
        let _ = tokio::time::timeout(span, async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;
    }

    fn two_toasts() -> Element {
        let mut toast = use_toast(VISIBLE);
        TOASTS.with(|slot| slot.set(Some(toast)));
        use_hook(move || {
            spawn(async move {
                toast.show(Toast::info("first"));
                tokio::time::sleep(Duration::from_millis(600)).await;
                toast.show(Toast::info("second"));
            })
        });
        rsx! { p { {toast.current().map(|t| t.message).unwrap_or_default()} } }
    }

    fn current_message(dom: &VirtualDom) -> Option<String> {
        dom.in_runtime(|| {
            TOASTS
                .with(|slot| slot.get())
                .and_then(|handle| handle.current())
                .map(|t| t.message)
        })
    }

    #[tokio::test(start_paused = true)]
    async fn newer_toast_outlives_the_first_deadline() {
        let mut dom = VirtualDom::new(two_toasts);
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_millis(700)).await;
        assert_eq!(current_message(&dom).as_deref(), Some("second"));

        // past the first toast's deadline (t = 1000ms)
        run_for(&mut dom, Duration::from_millis(500)).await;
        assert_eq!(current_message(&dom).as_deref(), Some("second"));

        // past the second toast's deadline (t = 1600ms)
        run_for(&mut dom, Duration::from_millis(600)).await;
        assert_eq!(current_message(&dom), None);
    }

    fn rescheduled_counter() -> Element {
        let mut timer = use_scheduler();
        let mut fired = use_signal(|| 0u32);
        TIMER.with(|slot| slot.set(Some((timer, fired))));
        use_hook(move || {
            spawn(async move {
                timer.schedule(VISIBLE, move || fired += 1);
                tokio::time::sleep(Duration::from_millis(600)).await;
                timer.schedule(VISIBLE, move || fired += 1);
            })
        });
        rsx! { p { "{fired}" } }
    }

    fn timer_state(dom: &VirtualDom) -> (bool, u32) {
        dom.in_runtime(|| {
            let (timer, fired) = TIMER.with(|slot| slot.get()).expect("component mounted");
            (timer.is_pending(), fired())
        })
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_cancels_the_pending_run() {
        let mut dom = VirtualDom::new(rescheduled_counter);
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_millis(1200)).await;
        assert_eq!(timer_state(&dom), (true, 0));

        run_for(&mut dom, Duration::from_millis(600)).await;
        assert_eq!(timer_state(&dom), (false, 1));
    }
}
