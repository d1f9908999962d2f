use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub type DeferredTask = Box<dyn FnOnce() + 'static>;

/// Cooperative deferral on the UI thread.
pub trait Scheduler {
    /// Runs `task` before the next repaint.
    fn next_frame(&self, task: DeferredTask);
    /// Runs `task` once `delay` has elapsed.
    fn after(&self, delay: Duration, task: DeferredTask);
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn next_frame(&self, task: DeferredTask) {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window; animation frame dropped");
            return;
        };
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            tracing::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }

    fn after(&self, delay: Duration, task: DeferredTask) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || task()).forget();
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::time::Duration;

    use super::{Scheduler, DeferredTask};

    /// Queues tasks until the test flushes them.
    #[derive(Default)]
    pub struct ManualScheduler {
        frames: RefCell<VecDeque<DeferredTask>>,
        timers: RefCell<VecDeque<(Duration, DeferredTask)>>,
    }

    impl ManualScheduler {
        pub fn pending_frames(&self) -> usize {
            self.frames.borrow().len()
        }

        pub fn pending_timers(&self) -> usize {
            self.timers.borrow().len()
        }

        /// Runs the tasks queued for one frame; tasks they queue wait for the next.
        pub fn run_frame(&self) {
            let due: Vec<DeferredTask> = self.frames.borrow_mut().drain(..).collect();
            for task in due {
                task();
            }
        }

        /// Fires the oldest timer and returns its delay.
        pub fn fire_timer(&self) -> Option<Duration> {
            let (delay, task) = self.timers.borrow_mut().pop_front()?;
            task();
            Some(delay)
        }
    }

    impl Scheduler for ManualScheduler {
        fn next_frame(&self, task: DeferredTask) {
            self.frames.borrow_mut().push_back(task);
        }

        fn after(&self, delay: Duration, task: DeferredTask) {
            self.timers.borrow_mut().push_back((delay, task));
        }
    }
}
