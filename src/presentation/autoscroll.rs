use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

/// Let layout settle before following a section change.
pub const AUTO_SCROLL_SETTLE: Duration = Duration::from_millis(100);

/// Starts and cancels one-shot timeouts.
pub trait Timeouts: Clone + 'static {
    type Timeout: 'static;

    /// Returns `None` when the host could not schedule the callback.
    fn start_timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Option<Self::Timeout>;

    fn cancel_timeout(&self, timeout: Self::Timeout);
}

/// Scrolls to the presentation's section once it has been stable for
/// [`AUTO_SCROLL_SETTLE`]. Only the newest target is ever scrolled to.
pub struct AutoScroll<T: Timeouts, F> {
    timeouts: T,
    scroll: F,
    pending: Arc<Mutex<Option<T::Timeout>>>,
}

impl<T: Timeouts, F: Clone> Clone for AutoScroll<T, F> {
    fn clone(&self) -> Self {
        Self {
            timeouts: self.timeouts.clone(),
            scroll: self.scroll.clone(),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<T, F> AutoScroll<T, F>
where
    T: Timeouts,
    F: Fn(usize) + Clone + 'static,
{
    pub fn new(timeouts: T, scroll: F) -> Self {
        Self {
            timeouts,
            scroll,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace any pending scroll. `None` only cancels.
    pub fn retarget(&self, target: Option<usize>) {
        self.cancel();
        let Some(index) = target else {
            return;
        };

        let scroll = self.scroll.clone();
        let pending = Arc::clone(&self.pending);
        let timeout = self.timeouts.start_timeout(
            AUTO_SCROLL_SETTLE,
            Box::new(move || {
                pending
                    .lock()
                    .expect("should be able to lock pending auto-scroll")
                    .take();
                scroll(index);
            }),
        );
        if timeout.is_none() {
            log::warn!("presentation: couldn't schedule auto-scroll to section {index}");
        }
        *self
            .pending
            .lock()
            .expect("should be able to lock pending auto-scroll") = timeout;
    }

    pub fn cancel(&self) {
        let timeout = self
            .pending
            .lock()
            .expect("should be able to lock pending auto-scroll")
            .take();
        if let Some(timeout) = timeout {
            self.timeouts.cancel_timeout(timeout);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .expect("should be able to lock pending auto-scroll")
            .is_some()
    }
}
