use std::time::Duration;

use leptos::prelude::*;

use crate::presentation::{
    PlaybackDriver, PresentationState, PresentationStore, Scheduler, SectionExtent, Timeouts,
};

/// Timer host backed by `setInterval` and `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = IntervalHandle;

    fn start_interval(&self, period: Duration, tick: Box<dyn Fn()>) -> Option<IntervalHandle> {
        set_interval_with_handle(tick, period)
            .map_err(|e| log::error!("couldn't start presentation interval: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: IntervalHandle) {
        handle.clear();
    }
}

impl Timeouts for BrowserScheduler {
    type Timeout = TimeoutHandle;

    fn start_timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(fire, delay)
            .map_err(|e| log::warn!("couldn't schedule timeout: {e:?}"))
            .ok()
    }

    fn cancel_timeout(&self, timeout: TimeoutHandle) {
        timeout.clear();
    }
}

impl PresentationStore for RwSignal<PresentationState> {
    fn modify<R>(&self, f: impl FnOnce(&mut PresentationState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn snapshot(&self) -> Option<PresentationState> {
        self.try_get_untracked()
    }
}

pub type BrowserDriver = PlaybackDriver<BrowserScheduler, RwSignal<PresentationState>>;

/// Presentation state and transport for the components of the page.
///
/// The getters read the signal, so calling them inside a reactive closure
/// subscribes to the presentation state.
#[derive(Clone, Copy)]
pub struct Presentation {
    state: RwSignal<PresentationState>,
    driver: StoredValue<BrowserDriver>,
}

impl Presentation {
    pub fn is_playing(&self) -> bool {
        self.state.with(|s| s.is_playing)
    }

    pub fn current_section(&self) -> usize {
        self.state.with(|s| s.current_section)
    }

    pub fn current_time(&self) -> u32 {
        self.state.with(|s| s.current_time)
    }

    pub fn duration(&self) -> u32 {
        self.state.with(|s| s.duration)
    }

    pub fn subtitles(&self) -> &'static str {
        self.state.with(|s| s.subtitles)
    }

    pub fn progress(&self) -> f64 {
        self.state.with(|s| s.progress())
    }

    pub fn auto_scroll_target(&self) -> Option<usize> {
        self.state.with(|s| s.auto_scroll_target())
    }

    pub fn can_step(&self, delta: isize) -> bool {
        self.state.with(|s| s.can_step(delta))
    }

    pub fn accepts_manual_scroll(&self) -> bool {
        self.state
            .try_with_untracked(|s| s.accepts_manual_scroll())
            .unwrap_or(false)
    }

    /// Untracked, for event handlers.
    pub fn manual_scroll_target(&self) -> Option<usize> {
        self.state
            .try_with_untracked(|s| s.manual_scroll_target())
            .flatten()
    }

    pub fn play(&self) {
        self.driver.with_value(|d| d.play());
    }

    pub fn pause(&self) {
        self.driver.with_value(|d| d.pause());
    }

    pub fn toggle(&self) {
        self.driver.with_value(|d| d.toggle());
    }

    pub fn seek_to_section(&self, index: usize) {
        let index = isize::try_from(index).unwrap_or(isize::MAX);
        self.driver.with_value(|d| d.seek_to_section(index));
    }

    pub fn step(&self, delta: isize) {
        self.driver.with_value(|d| d.step(delta));
    }

    pub fn update_time(&self, seconds: u32) {
        self.driver.with_value(|d| d.update_time(seconds));
    }

    pub fn interrupt_auto_scroll(&self) {
        self.driver.with_value(|d| d.interrupt_auto_scroll());
    }

    pub fn follow_scroll(&self, midpoint: f64, extents: &[SectionExtent]) {
        self.driver.with_value(|d| d.follow_scroll(midpoint, extents));
    }
}

/// Create the presentation for the current view and share it through context.
///
/// The clock is stopped when the view is torn down.
pub fn provide_presentation() -> Presentation {
    let state = RwSignal::new(PresentationState::new());
    let driver = PlaybackDriver::new(BrowserScheduler, state);

    let teardown = driver.clone();
    on_cleanup(move || teardown.shutdown());

    let presentation = Presentation {
        state,
        driver: StoredValue::new(driver),
    };
    provide_context(presentation);
    presentation
}

pub fn use_presentation() -> Presentation {
    expect_context::<Presentation>()
}
