use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::BoardError;
use crate::models::UpdateCheckResult;

pub type UpdateHandler = Box<dyn Fn(UpdateCheckResult) + 'static>;

/// Handle to a registered update listener. The release hook runs once, either on
/// `release` or on drop, whichever comes first.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Source of update-check notifications delivered by the platform bridge.
pub trait UpdateChannel {
    fn on_notify(&self, handler: UpdateHandler) -> Subscription;
}

/// Listens to a Tauri event through `window.__TAURI__.event.listen`.
pub struct TauriUpdateChannel {
    listen: Function,
    event: String,
}

// The JS listener may call `callback` until `unlisten` has run, so the closure
// stays here until then. `C` is the closure and `F` the unlisten function.
struct ListenState<C, F> {
    callback: Option<C>,
    unlisten: Option<F>,
    pending: bool,
    released: bool,
}

/// What to do after a state change: call `unlisten` first, then drop `callback`.
struct Teardown<C, F> {
    unlisten: Option<F>,
    callback: Option<C>,
}

impl<C, F> ListenState<C, F> {
    fn new(callback: C, pending: bool) -> Self {
        Self { callback: Some(callback), unlisten: None, pending, released: false }
    }

    /// The `listen` promise settled; `unlisten` is `None` when it failed.
    fn resolve(&mut self, unlisten: Option<F>) -> Teardown<C, F> {
        self.pending = false;
        if !self.released {
            self.unlisten = unlisten;
            return Teardown { unlisten: None, callback: None };
        }
        Teardown { unlisten, callback: self.callback.take() }
    }

    fn release(&mut self) -> Teardown<C, F> {
        self.released = true;
        if self.pending {
            return Teardown { unlisten: None, callback: None };
        }
        Teardown { unlisten: self.unlisten.take(), callback: self.callback.take() }
    }
}

impl TauriUpdateChannel {
    /// `None` when the page is not running inside a Tauri webview.
    pub fn detect(event: &str) -> Option<Self> {
        match Self::lookup_listen() {
            Ok(listen) => Some(Self { listen, event: event.to_string() }),
            Err(e) => {
                tracing::warn!("update notifications disabled: {}", e);
                None
            }
        }
    }

    fn lookup_listen() -> Result<Function, BoardError> {
        let window = web_sys::window().ok_or_else(|| BoardError::Unavailable("window".into()))?;
        let mut target: JsValue = window.into();
        for key in ["__TAURI__", "event", "listen"] {
            target = Reflect::get(&target, &JsValue::from_str(key))
                .map_err(|e| BoardError::from_js(key, &e))?;
            if target.is_undefined() || target.is_null() {
                return Err(BoardError::Unavailable(format!("__TAURI__ bridge has no {}", key)));
            }
        }
        target
            .dyn_into::<Function>()
            .map_err(|_| BoardError::Unavailable("__TAURI__.event.listen is not a function".into()))
    }
}

impl<C> Teardown<C, Function> {
    fn run(self) {
        if let Some(func) = &self.unlisten {
            unlisten(func);
        }
        drop(self.callback);
    }
}

fn unlisten(func: &Function) {
    if let Err(e) = func.call0(&JsValue::NULL) {
        tracing::warn!("unlisten failed: {:?}", e);
    }
}

impl UpdateChannel for TauriUpdateChannel {
    fn on_notify(&self, handler: UpdateHandler) -> Subscription {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let payload = Reflect::get(&event, &JsValue::from_str("payload")).unwrap_or(JsValue::UNDEFINED);
            match serde_wasm_bindgen::from_value::<UpdateCheckResult>(payload) {
                Ok(result) => handler(result),
                Err(e) => tracing::debug!("ignoring malformed update event: {}", e),
            }
        });

        let registered = self
            .listen
            .call2(&JsValue::NULL, &JsValue::from_str(&self.event), callback.as_ref());
        let promise = match registered.map(|value| value.dyn_into::<Promise>()) {
            Ok(Ok(promise)) => Some(promise),
            Ok(Err(_)) => {
                tracing::warn!("listen did not return a promise");
                None
            }
            Err(e) => {
                tracing::warn!("listen threw: {:?}", e);
                None
            }
        };
        let state = Rc::new(RefCell::new(ListenState::new(callback, promise.is_some())));

        if let Some(promise) = promise {
            let state = state.clone();
            spawn_local(async move {
                let func = match JsFuture::from(promise).await.map(|value| value.dyn_into::<Function>()) {
                    Ok(Ok(func)) => Some(func),
                    Ok(Err(_)) => {
                        tracing::warn!("listen resolved without an unlisten function");
                        None
                    }
                    Err(e) => {
                        tracing::warn!("listen rejected: {:?}", e);
                        None
                    }
                };
                let teardown = state.borrow_mut().resolve(func);
                teardown.run();
            });
        }

        Subscription::new(move || {
            let teardown = state.borrow_mut().release();
            teardown.run();
        })
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn subscription_releases_once_when_released_explicitly() {
        let count = Rc::new(Cell::new(0));
        let sub = {
            let count = count.clone();
            Subscription::new(move || count.set(count.get() + 1))
        };
        sub.release();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn subscription_releases_on_drop() {
        let count = Rc::new(Cell::new(0));
        {
            let count = count.clone();
            let _sub = Subscription::new(move || count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    // Drop counter standing in for the JS closure.
    struct Callback(Rc<Cell<usize>>);

    impl Drop for Callback {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn release_before_listen_resolves_keeps_callback_until_unlisten() {
        let dropped = Rc::new(Cell::new(0));
        let mut state = ListenState::new(Callback(dropped.clone()), true);

        let early = state.release();
        assert!(early.unlisten.is_none());
        assert!(early.callback.is_none());
        drop(early);
        assert_eq!(dropped.get(), 0, "listener is still registered");

        let late = state.resolve(Some("unlisten"));
        assert_eq!(late.unlisten, Some("unlisten"));
        assert!(late.callback.is_some());
        drop(late);
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn release_after_listen_resolves_unlistens_then_drops() {
        let dropped = Rc::new(Cell::new(0));
        let mut state = ListenState::new(Callback(dropped.clone()), true);

        let settled = state.resolve(Some("unlisten"));
        assert!(settled.unlisten.is_none());
        assert!(settled.callback.is_none());

        let teardown = state.release();
        assert_eq!(teardown.unlisten, Some("unlisten"));
        assert!(teardown.callback.is_some());
        drop(teardown);
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn failed_registration_drops_callback_on_release() {
        let dropped = Rc::new(Cell::new(0));
        let mut state: ListenState<Callback, &str> = ListenState::new(Callback(dropped.clone()), false);
        let teardown = state.release();
        assert!(teardown.unlisten.is_none());
        drop(teardown);
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn fake_channel_stops_delivering_after_release() {
        let channel = fake::FakeChannel::default();
        let seen = Rc::new(Cell::new(0));
        let sub = {
            let seen = seen.clone();
            channel.on_notify(Box::new(move |_: UpdateCheckResult| seen.set(seen.get() + 1)))
        };
        channel.emit(UpdateCheckResult::available("1.2.3"));
        sub.release();
        channel.emit(UpdateCheckResult::available("1.2.4"));
        assert_eq!(seen.get(), 1);
        assert_eq!(channel.listeners(), 0);
        assert_eq!(channel.released.get(), 1);
    }
}
