mod autoscroll;
mod driver;
pub mod scroll;
pub mod timeline;

pub use autoscroll::{AutoScroll, Timeouts, AUTO_SCROLL_SETTLE};
pub use driver::{PlaybackDriver, PresentationStore, Scheduler, TICK_PERIOD};
pub use scroll::{section_containing, viewport_midpoint, SectionExtent};

use timeline::{clamp_section, section_index_of, section_start, subtitle_at, DURATION};

/// What the owner of the interval must do after a state transition.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Cancel any running interval and start a fresh one.
    Restart,
    Cancel,
    Keep,
}

/// Shared playback state of the presentation mode.
///
/// Every method replaces the state as a whole, so `current_section` and
/// `subtitles` always agree with `current_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    pub is_playing: bool,
    pub current_section: usize,
    pub current_time: u32,
    pub duration: u32,
    pub is_auto_scrolling: bool,
    pub subtitles: &'static str,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_section: 0,
            current_time: 0,
            duration: DURATION,
            is_auto_scrolling: false,
            subtitles: subtitle_at(0),
        }
    }
}

impl PresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self) -> TimerAction {
        if self.is_finished() {
            self.update_time(0);
        }
        self.is_playing = true;
        self.is_auto_scrolling = true;
        TimerAction::Restart
    }

    pub fn pause(&mut self) -> TimerAction {
        self.is_playing = false;
        self.is_auto_scrolling = false;
        TimerAction::Cancel
    }

    pub fn toggle(&mut self) -> TimerAction {
        if self.is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    pub fn seek_to_section(&mut self, index: isize) -> TimerAction {
        let index = clamp_section(index);
        self.current_time = section_start(index);
        self.current_section = index;
        self.subtitles = subtitle_at(self.current_time);
        self.is_auto_scrolling = self.is_playing;
        if self.is_playing {
            TimerAction::Restart
        } else {
            TimerAction::Keep
        }
    }

    /// Whether [`step`](Self::step) by `delta` would move to another section.
    pub fn can_step(&self, delta: isize) -> bool {
        let target = (self.current_section as isize).saturating_add(delta);
        clamp_section(target) != self.current_section
    }

    /// Seek relative to the current section, e.g. `-1` for previous.
    pub fn step(&mut self, delta: isize) -> TimerAction {
        let target = (self.current_section as isize).saturating_add(delta);
        self.seek_to_section(target)
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) -> TimerAction {
        if !self.is_playing {
            // stale tick from an interval that was already cancelled
            return TimerAction::Cancel;
        }
        let next = self.current_time.saturating_add(1);
        if next >= self.duration {
            self.update_time(self.duration);
            self.is_playing = false;
            self.is_auto_scrolling = false;
            TimerAction::Cancel
        } else {
            self.update_time(next);
            TimerAction::Keep
        }
    }

    /// Set the clock directly, e.g. from a media element's playback position.
    pub fn update_time(&mut self, seconds: u32) {
        self.current_time = seconds.min(self.duration);
        self.current_section = section_index_of(self.current_time);
        self.subtitles = subtitle_at(self.current_time);
    }

    /// Hands scroll control back to the user. Returns whether anything changed.
    pub fn interrupt_auto_scroll(&mut self) -> bool {
        if self.is_playing && self.is_auto_scrolling {
            self.is_auto_scrolling = false;
            true
        } else {
            false
        }
    }

    /// Manual scroll position only drives the state while nobody else owns it.
    pub fn accepts_manual_scroll(&self) -> bool {
        !self.is_auto_scrolling && !self.is_playing
    }

    /// Section the page must be brought to after a user-driven seek. A running
    /// presentation scrolls on its own, so this is `None` while it owns the page.
    pub fn manual_scroll_target(&self) -> Option<usize> {
        self.accepts_manual_scroll().then_some(self.current_section)
    }

    /// Section the page should be scrolled to by the presentation, if any.
    pub fn auto_scroll_target(&self) -> Option<usize> {
        (self.is_playing && self.is_auto_scrolling).then_some(self.current_section)
    }

    pub fn is_finished(&self) -> bool {
        self.current_time >= self.duration
    }

    pub fn progress(&self) -> f64 {
        timeline::progress_percent(self.current_time, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::timeline::{SECTION_COUNT, SECTION_STARTS};
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PresentationState::new();
        assert!(!state.is_playing);
        assert!(!state.is_auto_scrolling);
        assert_eq!(state.current_section, 0);
        assert_eq!(state.current_time, 0);
        assert_eq!(state.duration, 210);
        assert_eq!(state.subtitles, "Welcome to my video editing portfolio");
    }

    #[test]
    fn test_play_and_pause_flags() {
        let mut state = PresentationState::new();
        assert_eq!(state.play(), TimerAction::Restart);
        assert!(state.is_playing);
        assert!(state.is_auto_scrolling);

        assert_eq!(state.pause(), TimerAction::Cancel);
        assert!(!state.is_playing);
        assert!(!state.is_auto_scrolling);
    }

    #[test]
    fn test_seek_to_section_three() {
        let mut state = PresentationState::new();
        assert_eq!(state.seek_to_section(3), TimerAction::Keep);
        assert_eq!(state.current_time, 90);
        assert_eq!(state.current_section, 3);
        assert_eq!(
            state.subtitles,
            "I specialize in video editing, color grading, and motion graphics"
        );
        assert!(!state.is_auto_scrolling);
    }

    #[test]
    fn test_seek_clamps_out_of_range() {
        let mut state = PresentationState::new();
        let _ = state.seek_to_section(-1);
        assert_eq!(state.current_section, 0);
        assert_eq!(state.current_time, 0);

        let _ = state.seek_to_section(42);
        assert_eq!(state.current_section, 6);
        assert_eq!(state.current_time, 180);
    }

    #[test]
    fn test_seek_while_playing_restarts_and_resumes_auto_scroll() {
        let mut state = PresentationState::new();
        let _ = state.play();
        assert!(state.interrupt_auto_scroll());
        assert!(!state.is_auto_scrolling);

        assert_eq!(state.seek_to_section(2), TimerAction::Restart);
        assert!(state.is_playing);
        assert!(state.is_auto_scrolling);
        assert_eq!(state.current_time, 60);
    }

    #[test]
    fn test_step_clamps_at_ends() {
        let mut state = PresentationState::new();
        let _ = state.step(-1);
        assert_eq!(state.current_section, 0);
        for _ in 0..10 {
            let _ = state.step(1);
        }
        assert_eq!(state.current_section, SECTION_COUNT - 1);
        let _ = state.step(-1);
        assert_eq!(state.current_section, 5);
        assert_eq!(state.current_time, 150);
    }

    #[test]
    fn test_ticks_run_to_completion() {
        let mut state = PresentationState::new();
        let _ = state.play();
        for _ in 0..209 {
            assert_eq!(state.tick(), TimerAction::Keep);
        }
        assert_eq!(state.current_time, 209);
        assert_eq!(state.tick(), TimerAction::Cancel);
        assert_eq!(state.current_time, 210);
        assert_eq!(state.current_section, 6);
        assert!(!state.is_playing);
        assert!(!state.is_auto_scrolling);
        assert_eq!(state.subtitles, "");
    }

    #[test]
    fn test_tick_keeps_section_in_sync() {
        let mut state = PresentationState::new();
        let _ = state.play();
        while state.is_playing {
            let _ = state.tick();
            assert_eq!(
                state.current_section,
                timeline::section_index_of(state.current_time)
            );
            assert_eq!(state.subtitles, timeline::subtitle_at(state.current_time));
        }
    }

    #[test]
    fn test_tick_crosses_section_boundary() {
        let mut state = PresentationState::new();
        let _ = state.seek_to_section(1);
        let _ = state.play();
        for _ in 0..29 {
            let _ = state.tick();
        }
        assert_eq!(state.current_time, 59);
        assert_eq!(state.current_section, 1);
        let _ = state.tick();
        assert_eq!(state.current_time, SECTION_STARTS[2]);
        assert_eq!(state.current_section, 2);
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut state = PresentationState::new();
        let _ = state.seek_to_section(2);
        assert_eq!(state.tick(), TimerAction::Cancel);
        assert_eq!(state.current_time, 60);
    }

    #[test]
    fn test_play_after_finish_rewinds() {
        let mut state = PresentationState::new();
        state.update_time(210);
        assert!(state.is_finished());
        let _ = state.play();
        assert_eq!(state.current_time, 0);
        assert_eq!(state.current_section, 0);
        assert!(state.is_playing);
    }

    #[test]
    fn test_update_time_clamps() {
        let mut state = PresentationState::new();
        state.update_time(135);
        assert_eq!(state.current_section, 4);
        assert_eq!(state.subtitles, "My professional journey and achievements");
        state.update_time(999);
        assert_eq!(state.current_time, 210);
        assert_eq!(state.current_section, 6);
    }

    #[test]
    fn test_wheel_interrupt_only_during_auto_scroll() {
        let mut state = PresentationState::new();
        assert!(!state.interrupt_auto_scroll());

        let _ = state.play();
        assert!(state.interrupt_auto_scroll());
        assert!(state.is_playing);
        assert!(!state.is_auto_scrolling);
        assert!(!state.interrupt_auto_scroll());
    }

    #[test]
    fn test_scroll_ownership() {
        let mut state = PresentationState::new();
        assert!(state.accepts_manual_scroll());
        assert_eq!(state.auto_scroll_target(), None);

        let _ = state.play();
        assert!(!state.accepts_manual_scroll());
        assert_eq!(state.auto_scroll_target(), Some(0));

        // interrupted but still playing: nobody drives the section from scroll
        let _ = state.interrupt_auto_scroll();
        assert!(!state.accepts_manual_scroll());
        assert_eq!(state.auto_scroll_target(), None);

        let _ = state.pause();
        assert!(state.accepts_manual_scroll());
    }

    #[test]
    fn test_seek_while_paused_needs_manual_scroll() {
        let mut state = PresentationState::new();
        let _ = state.seek_to_section(4);
        assert_eq!(state.manual_scroll_target(), Some(4));
        let _ = state.step(-1);
        assert_eq!(state.manual_scroll_target(), Some(3));

        let _ = state.play();
        let _ = state.step(1);
        assert_eq!(state.manual_scroll_target(), None);
        assert_eq!(state.auto_scroll_target(), Some(4));
    }

    #[test]
    fn test_can_step_at_ends() {
        let mut state = PresentationState::new();
        assert!(!state.can_step(-1));
        assert!(state.can_step(1));

        let _ = state.seek_to_section(3);
        assert!(state.can_step(-1));
        assert!(state.can_step(1));

        let _ = state.seek_to_section(SECTION_COUNT as isize - 1);
        assert!(state.can_step(-1));
        assert!(!state.can_step(1));
        assert!(!state.can_step(isize::MAX));
    }

    #[test]
    fn test_toggle() {
        let mut state = PresentationState::new();
        assert_eq!(state.toggle(), TimerAction::Restart);
        assert!(state.is_playing);
        assert_eq!(state.toggle(), TimerAction::Cancel);
        assert!(!state.is_playing);
    }
}
