/// Total length of the presentation, in seconds.
pub const DURATION: u32 = 210;

/// Start time of each section, in seconds.
pub const SECTION_STARTS: [u32; 7] = [0, 30, 60, 90, 120, 150, 180];

pub const SECTION_COUNT: usize = SECTION_STARTS.len();

pub const SECTION_TITLES: [&str; SECTION_COUNT] = [
    "Welcome",
    "About",
    "Portfolio",
    "Skills",
    "Experience",
    "Testimonials",
    "Contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub start: u32,
    pub end: u32,
    pub text: &'static str,
}

pub static CUES: [Cue; 7] = [
    Cue {
        start: 0,
        end: 30,
        text: "Welcome to my video editing portfolio",
    },
    Cue {
        start: 30,
        end: 60,
        text: "I'm a passionate video editor with 8+ years of experience",
    },
    Cue {
        start: 60,
        end: 90,
        text: "Here are some of my best projects across different genres",
    },
    Cue {
        start: 90,
        end: 120,
        text: "I specialize in video editing, color grading, and motion graphics",
    },
    Cue {
        start: 120,
        end: 150,
        text: "My professional journey and achievements",
    },
    Cue {
        start: 150,
        end: 180,
        text: "What my clients say about working with me",
    },
    Cue {
        start: 180,
        end: 210,
        text: "Let's create something amazing together",
    },
];

/// Index of the section playing at `time`. The last section is open-ended.
pub fn section_index_of(time: u32) -> usize {
    SECTION_STARTS
        .iter()
        .rposition(|&start| start <= time)
        .unwrap_or(0)
}

pub fn clamp_section(index: isize) -> usize {
    index.clamp(0, SECTION_COUNT as isize - 1) as usize
}

pub fn section_start(index: usize) -> u32 {
    SECTION_STARTS[index.min(SECTION_COUNT - 1)]
}

/// Caption for `time`, or an empty string when no cue covers it.
pub fn subtitle_at(time: u32) -> &'static str {
    CUES.iter()
        .find(|cue| cue.start <= time && time < cue.end)
        .map(|cue| cue.text)
        .unwrap_or("")
}

/// DOM id of the wrapper element for a section.
pub fn section_anchor(index: usize) -> String {
    format!("section-{index}")
}

pub fn format_timestamp(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn progress_percent(time: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    (f64::from(time.min(duration)) / f64::from(duration)) * 100.0
}

/// Whole seconds of a media element's playback position.
pub fn media_seconds(position: f64) -> u32 {
    if position.is_nan() || position <= 0.0 {
        return 0;
    }
    position.floor().min(f64::from(u32::MAX)) as u32
}

/// Media position further than this from the presentation clock gets re-seeked.
pub const MEDIA_DRIFT_SECS: f64 = 1.5;

pub fn media_drifted(position: f64, time: u32) -> bool {
    (position - f64::from(time)).abs() > MEDIA_DRIFT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_index_matches_boundaries() {
        for t in 0..DURATION {
            let i = section_index_of(t);
            assert!(SECTION_STARTS[i] <= t, "t={t} i={i}");
            if i + 1 < SECTION_COUNT {
                assert!(t < SECTION_STARTS[i + 1], "t={t} i={i}");
            }
        }
    }

    #[test]
    fn test_section_index_at_edges() {
        assert_eq!(section_index_of(0), 0);
        assert_eq!(section_index_of(29), 0);
        assert_eq!(section_index_of(30), 1);
        assert_eq!(section_index_of(179), 5);
        assert_eq!(section_index_of(180), 6);
        assert_eq!(section_index_of(DURATION), 6);
        assert_eq!(section_index_of(10_000), 6);
    }

    #[test]
    fn test_clamp_section() {
        assert_eq!(clamp_section(-4), 0);
        assert_eq!(clamp_section(0), 0);
        assert_eq!(clamp_section(3), 3);
        assert_eq!(clamp_section(6), 6);
        assert_eq!(clamp_section(99), 6);
    }

    #[test]
    fn test_cues_are_contiguous() {
        assert_eq!(CUES[0].start, 0);
        assert_eq!(CUES[CUES.len() - 1].end, DURATION);
        for pair in CUES.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for (cue, start) in CUES.iter().zip(SECTION_STARTS) {
            assert_eq!(cue.start, start);
        }
    }

    #[test]
    fn test_subtitle_lookup() {
        assert_eq!(subtitle_at(0), "Welcome to my video editing portfolio");
        assert_eq!(
            subtitle_at(90),
            "I specialize in video editing, color grading, and motion graphics"
        );
        assert_eq!(subtitle_at(209), "Let's create something amazing together");
        assert_eq!(subtitle_at(DURATION), "");
    }

    #[test]
    fn test_every_covered_second_has_caption() {
        for t in 0..DURATION {
            assert!(!subtitle_at(t).is_empty(), "no caption at {t}");
        }
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "0:00");
        assert_eq!(format_timestamp(9), "0:09");
        assert_eq!(format_timestamp(90), "1:30");
        assert_eq!(format_timestamp(DURATION), "3:30");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, DURATION), 0.0);
        assert_eq!(progress_percent(105, DURATION), 50.0);
        assert_eq!(progress_percent(DURATION, DURATION), 100.0);
        assert_eq!(progress_percent(500, DURATION), 100.0);
        assert_eq!(progress_percent(5, 0), 0.0);
    }

    #[test]
    fn test_section_anchor() {
        assert_eq!(section_anchor(0), "section-0");
        assert_eq!(section_anchor(6), "section-6");
    }

    #[test]
    fn test_media_seconds() {
        assert_eq!(media_seconds(0.0), 0);
        assert_eq!(media_seconds(89.97), 89);
        assert_eq!(media_seconds(90.0), 90);
        assert_eq!(media_seconds(-3.0), 0);
        assert_eq!(media_seconds(f64::NAN), 0);
    }

    #[test]
    fn test_media_drift() {
        assert!(!media_drifted(30.4, 30));
        assert!(!media_drifted(31.2, 30));
        assert!(media_drifted(92.0, 30));
        assert!(media_drifted(0.0, 90));
    }
}
