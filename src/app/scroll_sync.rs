use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::presentation::{
    timeline::{section_anchor, SECTION_COUNT},
    viewport_midpoint, AutoScroll, SectionExtent,
};

use super::playback::{BrowserScheduler, Presentation};

/// Keep the page scroll position and the presentation in step.
///
/// Manual scrolling moves the presentation while it is idle, wheel input
/// takes scrolling back from a running presentation, and a running
/// presentation scrolls the page to each new section.
pub fn use_scroll_sync(presentation: Presentation) {
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            if !presentation.accepts_manual_scroll() {
                return;
            }
            if let Some((midpoint, extents)) = measure_sections() {
                presentation.follow_scroll(midpoint, &extents);
            }
        },
        passive(),
    );

    let _ = use_event_listener_with_options(
        use_window(),
        ev::wheel,
        move |_| presentation.interrupt_auto_scroll(),
        passive(),
    );

    let target = Memo::new(move |_| presentation.auto_scroll_target());
    let follower = AutoScroll::new(BrowserScheduler, scroll_to_section as fn(usize));

    let teardown = follower.clone();
    on_cleanup(move || teardown.cancel());

    Effect::new(move |_| follower.retarget(target.get()));
}

fn passive() -> UseEventListenerOptions {
    UseEventListenerOptions::default().passive(true)
}

/// Smooth-scroll the page so the section starts at the top of the viewport.
pub fn scroll_to_section(index: usize) {
    let Some(element) = document().get_element_by_id(&section_anchor(index)) else {
        return;
    };
    log::debug!("scrolling to section {index}");
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Seek and bring the section into view even when nothing is playing.
pub fn jump_to_section(presentation: Presentation, index: usize) {
    presentation.seek_to_section(index);
    follow_manual_seek(presentation);
}

/// Previous/next section, scrolling like [`jump_to_section`].
pub fn step_section(presentation: Presentation, delta: isize) {
    presentation.step(delta);
    follow_manual_seek(presentation);
}

fn follow_manual_seek(presentation: Presentation) {
    if let Some(index) = presentation.manual_scroll_target() {
        scroll_to_section(index);
    }
}

fn measure_sections() -> Option<(f64, Vec<SectionExtent>)> {
    let window = window();
    let scroll_y = window.scroll_y().ok()?;
    let inner_height = window.inner_height().ok()?.as_f64()?;
    let document = document();
    let extents = (0..SECTION_COUNT)
        .filter_map(|index| {
            let rect = document
                .get_element_by_id(&section_anchor(index))?
                .get_bounding_client_rect();
            Some(SectionExtent::from_client_rect(
                index,
                rect.top(),
                rect.height(),
                scroll_y,
            ))
        })
        .collect();
    Some((viewport_midpoint(scroll_y, inner_height), extents))
}
