use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::config::BoardConfig;
use crate::core::services::{KeyValueStore, Scheduler, Subscription, UpdateChannel};
use crate::models::UpdateCheckResult;

use super::state::{BannerMachine, BannerView, Epoch};

struct Inner {
    machine: RefCell<BannerMachine>,
    store: Box<dyn KeyValueStore>,
    scheduler: Box<dyn Scheduler>,
    marker_key: String,
    dismiss_delay: Duration,
    on_change: Box<dyn Fn(BannerView)>,
    subscription: RefCell<Option<Subscription>>,
    mounted: Cell<bool>,
}

/// Drives a `BannerMachine` from the update channel, the scheduler and the user controls.
#[derive(Clone)]
pub struct BannerController {
    inner: Rc<Inner>,
}

impl BannerController {
    pub fn new(
        config: &BoardConfig,
        store: Box<dyn KeyValueStore>,
        scheduler: Box<dyn Scheduler>,
        on_change: impl Fn(BannerView) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                machine: RefCell::new(BannerMachine::new()),
                store,
                scheduler,
                marker_key: config.dismissed_version_key.clone(),
                dismiss_delay: Duration::from_millis(u64::from(config.dismiss_delay_ms)),
                on_change: Box::new(on_change),
                subscription: RefCell::new(None),
                mounted: Cell::new(false),
            }),
        }
    }

    /// Subscribes to `channel` once. Without a channel the banner stays hidden.
    pub fn mount(&self, channel: Option<&dyn UpdateChannel>) {
        if self.inner.mounted.replace(true) {
            return;
        }
        let Some(channel) = channel else {
            tracing::debug!("update channel unavailable; banner disabled");
            return;
        };
        let weak = Rc::downgrade(&self.inner);
        let subscription = channel.on_notify(Box::new(move |result: UpdateCheckResult| {
            if let Some(inner) = weak.upgrade() {
                Inner::handle(&inner, &result);
            }
        }));
        *self.inner.subscription.borrow_mut() = Some(subscription);
    }

    /// Releases the subscription and turns pending deferred work into no-ops.
    pub fn unmount(&self) {
        self.inner.mounted.set(false);
        let subscription = self.inner.subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.release();
        }
    }

    pub fn handle(&self, result: &UpdateCheckResult) {
        Inner::handle(&self.inner, result);
    }

    pub fn dismiss(&self) {
        Inner::close(&self.inner);
    }

    /// Opens the settings view, then dismisses like `dismiss`.
    pub fn update(&self, open_settings: impl FnOnce()) {
        open_settings();
        Inner::close(&self.inner);
    }

    pub fn view(&self) -> BannerView {
        self.inner.machine.borrow().view()
    }

    pub fn is_subscribed(&self) -> bool {
        self.inner.subscription.borrow().is_some()
    }
}

impl Inner {
    fn notify_change(&self) {
        let view = self.machine.borrow().view();
        (self.on_change)(view);
    }

    fn handle(this: &Rc<Inner>, result: &UpdateCheckResult) {
        if !this.mounted.get() {
            return;
        }
        let dismissed = this.store.get_item(&this.marker_key);
        let staged = this.machine.borrow_mut().notify(result, dismissed.as_deref());
        if let Some(epoch) = staged {
            tracing::debug!(?result, epoch, "update staged");
            Self::schedule_frame(this, epoch);
        }
        this.notify_change();
    }

    fn schedule_frame(this: &Rc<Inner>, epoch: Epoch) {
        let weak: Weak<Inner> = Rc::downgrade(this);
        this.scheduler.next_frame(Box::new(move || {
            let Some(inner) = weak.upgrade() else { return };
            if !inner.mounted.get() {
                return;
            }
            let again = inner.machine.borrow_mut().frame_elapsed(epoch);
            if again {
                Self::schedule_frame(&inner, epoch);
            }
            inner.notify_change();
        }));
    }

    fn close(this: &Rc<Inner>) {
        let closed = this.machine.borrow_mut().close();
        let Some((version, epoch)) = closed else { return };
        if let Err(e) = this.store.set_item(&this.marker_key, &version) {
            tracing::warn!("could not persist dismissed version {}: {}", version, e);
        }
        tracing::debug!(%version, "update banner dismissed");
        this.notify_change();

        let weak = Rc::downgrade(this);
        this.scheduler.after(
            this.dismiss_delay,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else { return };
                if !inner.mounted.get() {
                    return;
                }
                inner.machine.borrow_mut().settle(epoch);
                inner.notify_change();
            }),
        );
    }
}
