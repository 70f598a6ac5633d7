use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use super::{scroll, PresentationState, SectionExtent, TimerAction};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Starts and cancels repeating intervals.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    /// Returns `None` when the host could not start the interval.
    fn start_interval(&self, period: Duration, tick: Box<dyn Fn()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// Owner of the single shared [`PresentationState`].
pub trait PresentationStore: Clone + 'static {
    /// Mutate the state in one step. `None` if the store is gone.
    fn modify<R>(&self, f: impl FnOnce(&mut PresentationState) -> R) -> Option<R>;

    fn snapshot(&self) -> Option<PresentationState>;
}

/// Drives the presentation clock and keeps at most one interval alive.
pub struct PlaybackDriver<S: Scheduler, P: PresentationStore> {
    scheduler: S,
    store: P,
    timer: Arc<Mutex<Option<S::Handle>>>,
}

impl<S: Scheduler, P: PresentationStore> Clone for PlaybackDriver<S, P> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            store: self.store.clone(),
            timer: Arc::clone(&self.timer),
        }
    }
}

impl<S: Scheduler, P: PresentationStore> PlaybackDriver<S, P> {
    pub fn new(scheduler: S, store: P) -> Self {
        Self {
            scheduler,
            store,
            timer: Arc::new(Mutex::new(None)),
        }
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn play(&self) {
        log::debug!("presentation: play");
        self.transition(PresentationState::play);
    }

    pub fn pause(&self) {
        log::debug!("presentation: pause");
        self.transition(PresentationState::pause);
    }

    pub fn toggle(&self) {
        self.transition(PresentationState::toggle);
    }

    pub fn seek_to_section(&self, index: isize) {
        log::debug!("presentation: seek to section {index}");
        self.transition(|s| s.seek_to_section(index));
    }

    pub fn step(&self, delta: isize) {
        self.transition(|s| s.step(delta));
    }

    /// Follow an external media clock instead of the interval.
    pub fn update_time(&self, seconds: u32) {
        let _ = self.store.modify(|s| s.update_time(seconds));
    }

    /// Wheel input while the presentation owns the scroll position.
    pub fn interrupt_auto_scroll(&self) {
        if let Some(true) = self.store.modify(PresentationState::interrupt_auto_scroll) {
            log::debug!("presentation: manual wheel input, auto-scroll released");
        }
    }

    /// Manual scroll: sync the section under the viewport midpoint.
    pub fn follow_scroll(&self, midpoint: f64, extents: &[SectionExtent]) {
        let Some(state) = self.store.snapshot() else {
            return;
        };
        if !state.accepts_manual_scroll() {
            return;
        }
        match scroll::section_containing(midpoint, extents) {
            Some(index) if index != state.current_section => {
                log::debug!("presentation: manual scroll into section {index}");
                self.seek_to_section(index as isize);
            }
            _ => {}
        }
    }

    /// Cancel the clock. The hosting view calls this when it is torn down.
    pub fn shutdown(&self) {
        self.cancel_timer();
    }

    pub fn is_ticking(&self) -> bool {
        self.timer
            .lock()
            .expect("should be able to lock presentation timer")
            .is_some()
    }

    fn tick(&self) {
        match self.store.modify(PresentationState::tick) {
            Some(action) => {
                if let Some(state) = self.store.snapshot() {
                    log::trace!(
                        "presentation: tick time={} section={}",
                        state.current_time,
                        state.current_section
                    );
                }
                self.apply(action);
            }
            None => self.cancel_timer(),
        }
    }

    fn transition(&self, f: impl FnOnce(&mut PresentationState) -> TimerAction) {
        if let Some(action) = self.store.modify(f) {
            self.apply(action);
        }
    }

    fn apply(&self, action: TimerAction) {
        match action {
            TimerAction::Restart => self.restart_timer(),
            TimerAction::Cancel => self.cancel_timer(),
            TimerAction::Keep => {}
        }
    }

    fn restart_timer(&self) {
        self.cancel_timer();
        let driver = self.clone();
        let handle = self
            .scheduler
            .start_interval(TICK_PERIOD, Box::new(move || driver.tick()));
        if handle.is_none() {
            log::warn!("presentation: could not start the playback clock");
        }
        *self
            .timer
            .lock()
            .expect("should be able to lock presentation timer") = handle;
    }

    fn cancel_timer(&self) {
        let handle = self
            .timer
            .lock()
            .expect("should be able to lock presentation timer")
            .take();
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::presentation::timeline::DURATION;

    #[derive(Default)]
    struct ClockInner {
        next_id: usize,
        intervals: Vec<(usize, Rc<dyn Fn()>)>,
        ticks: usize,
    }

    /// Interval scheduler advanced by hand, one second at a time.
    #[derive(Clone, Default)]
    struct ManualClock {
        inner: Rc<RefCell<ClockInner>>,
    }

    impl ManualClock {
        fn advance(&self, seconds: u32) {
            for _ in 0..seconds {
                let due = self
                    .inner
                    .borrow()
                    .intervals
                    .iter()
                    .map(|(id, f)| (*id, Rc::clone(f)))
                    .collect::<Vec<_>>();
                for (id, f) in due {
                    if self.is_live(id) {
                        self.inner.borrow_mut().ticks += 1;
                        f();
                    }
                }
            }
        }

        fn is_live(&self, id: usize) -> bool {
            self.inner.borrow().intervals.iter().any(|(i, _)| *i == id)
        }

        fn live(&self) -> usize {
            self.inner.borrow().intervals.len()
        }

        fn ticks(&self) -> usize {
            self.inner.borrow().ticks
        }
    }

    impl Scheduler for ManualClock {
        type Handle = usize;

        fn start_interval(&self, period: Duration, tick: Box<dyn Fn()>) -> Option<usize> {
            assert_eq!(period, TICK_PERIOD);
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.intervals.push((id, Rc::from(tick)));
            Some(id)
        }

        fn cancel(&self, handle: usize) {
            self.inner
                .borrow_mut()
                .intervals
                .retain(|(id, _)| *id != handle);
        }
    }

    /// Host that refuses to start intervals.
    #[derive(Clone)]
    struct DeadClock;

    impl Scheduler for DeadClock {
        type Handle = ();

        fn start_interval(&self, _: Duration, _: Box<dyn Fn()>) -> Option<()> {
            None
        }

        fn cancel(&self, _: ()) {}
    }

    #[derive(Clone, Default)]
    struct LocalStore(Rc<RefCell<PresentationState>>);

    impl PresentationStore for LocalStore {
        fn modify<R>(&self, f: impl FnOnce(&mut PresentationState) -> R) -> Option<R> {
            Some(f(&mut self.0.borrow_mut()))
        }

        fn snapshot(&self) -> Option<PresentationState> {
            Some(self.0.borrow().clone())
        }
    }

    fn setup() -> (ManualClock, PlaybackDriver<ManualClock, LocalStore>) {
        let clock = ManualClock::default();
        let driver = PlaybackDriver::new(clock.clone(), LocalStore::default());
        (clock, driver)
    }

    fn state(driver: &PlaybackDriver<ManualClock, LocalStore>) -> PresentationState {
        driver.store().snapshot().expect("local store is always present")
    }

    fn section_extents() -> Vec<SectionExtent> {
        (0..7)
            .map(|i| SectionExtent {
                index: i,
                top: i as f64 * 800.0,
                bottom: (i + 1) as f64 * 800.0,
            })
            .collect()
    }

    #[test]
    fn test_play_runs_to_completion() {
        let (clock, driver) = setup();
        driver.play();
        assert!(driver.is_ticking());
        clock.advance(DURATION);

        let s = state(&driver);
        assert_eq!(s.current_time, 210);
        assert_eq!(s.current_section, 6);
        assert!(!s.is_playing);
        assert!(!s.is_auto_scrolling);
        assert!(!driver.is_ticking());
        assert_eq!(clock.live(), 0);

        // nothing left to tick
        clock.advance(5);
        assert_eq!(clock.ticks(), DURATION as usize);
    }

    #[test]
    fn test_pause_then_play_has_one_tick_source() {
        let (clock, driver) = setup();
        driver.play();
        clock.advance(5);
        driver.pause();
        assert!(!driver.is_ticking());
        clock.advance(3);
        assert_eq!(state(&driver).current_time, 5);

        driver.play();
        clock.advance(10);
        assert_eq!(clock.live(), 1);
        assert_eq!(state(&driver).current_time, 15);
        assert_eq!(clock.ticks(), 15);
    }

    #[test]
    fn test_repeated_play_replaces_timer() {
        let (clock, driver) = setup();
        driver.play();
        driver.play();
        driver.play();
        assert_eq!(clock.live(), 1);
        clock.advance(4);
        assert_eq!(state(&driver).current_time, 4);
    }

    #[test]
    fn test_seek_while_playing_continues_from_new_time() {
        let (clock, driver) = setup();
        driver.play();
        clock.advance(12);
        driver.seek_to_section(4);
        assert_eq!(clock.live(), 1);
        assert_eq!(state(&driver).current_time, 120);
        clock.advance(3);

        let s = state(&driver);
        assert_eq!(s.current_time, 123);
        assert_eq!(s.current_section, 4);
        assert!(s.is_playing);
        assert!(s.is_auto_scrolling);
    }

    #[test]
    fn test_seek_while_paused_does_not_start_timer() {
        let (clock, driver) = setup();
        driver.seek_to_section(3);
        assert!(!driver.is_ticking());
        clock.advance(3);
        let s = state(&driver);
        assert_eq!(s.current_time, 90);
        assert_eq!(
            s.subtitles,
            "I specialize in video editing, color grading, and motion graphics"
        );
    }

    #[test]
    fn test_wheel_releases_auto_scroll_but_keeps_playing() {
        let (clock, driver) = setup();
        driver.play();
        driver.interrupt_auto_scroll();
        let s = state(&driver);
        assert!(s.is_playing);
        assert!(!s.is_auto_scrolling);

        clock.advance(2);
        assert_eq!(state(&driver).current_time, 2);
        assert!(driver.is_ticking());
    }

    #[test]
    fn test_follow_scroll_seeks_when_idle() {
        let (_, driver) = setup();
        driver.follow_scroll(2000.0, &section_extents());
        let s = state(&driver);
        assert_eq!(s.current_section, 2);
        assert_eq!(s.current_time, 60);
        assert!(!driver.is_ticking());
    }

    #[test]
    fn test_follow_scroll_ignored_while_playing() {
        let (_, driver) = setup();
        driver.play();
        driver.follow_scroll(4100.0, &section_extents());
        assert_eq!(state(&driver).current_section, 0);

        driver.interrupt_auto_scroll();
        driver.follow_scroll(4100.0, &section_extents());
        assert_eq!(state(&driver).current_section, 0);
    }

    #[test]
    fn test_follow_scroll_outside_sections() {
        let (_, driver) = setup();
        driver.seek_to_section(1);
        driver.follow_scroll(-50.0, &section_extents());
        driver.follow_scroll(99_999.0, &section_extents());
        assert_eq!(state(&driver).current_section, 1);
    }

    #[test]
    fn test_shutdown_cancels_timer() {
        let (clock, driver) = setup();
        driver.play();
        driver.shutdown();
        assert_eq!(clock.live(), 0);
        clock.advance(3);
        assert_eq!(state(&driver).current_time, 0);
    }

    #[test]
    fn test_step_through_sections() {
        let (clock, driver) = setup();
        driver.step(1);
        driver.step(1);
        assert_eq!(state(&driver).current_section, 2);
        driver.step(-5);
        assert_eq!(state(&driver).current_section, 0);
        assert_eq!(clock.live(), 0);
    }

    #[test]
    fn test_unavailable_scheduler_leaves_state_consistent() {
        let driver = PlaybackDriver::new(DeadClock, LocalStore::default());
        driver.play();
        assert!(!driver.is_ticking());
        let s = driver.store().snapshot().expect("local store is always present");
        assert!(s.is_playing);
        driver.pause();
        assert!(!driver.is_ticking());
    }

    #[test]
    fn test_update_time_from_media_clock() {
        let (_, driver) = setup();
        driver.update_time(155);
        let s = state(&driver);
        assert_eq!(s.current_section, 5);
        assert_eq!(s.subtitles, "What my clients say about working with me");
    }
}
