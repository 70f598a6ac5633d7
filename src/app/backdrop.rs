use leptos::prelude::*;

use crate::presentation::timeline::SECTION_COUNT;

use super::playback::use_presentation;

const ORB_COLOURS: [&str; SECTION_COUNT] = [
    "from-yellow-400/30 to-orange-500/10",
    "from-orange-500/30 to-red-500/10",
    "from-red-500/30 to-pink-500/10",
    "from-pink-500/30 to-purple-500/10",
    "from-purple-500/30 to-blue-500/10",
    "from-blue-500/30 to-cyan-400/10",
    "from-cyan-400/30 to-yellow-400/10",
];

/// Floating orbs behind the page, one per section.
#[component]
pub fn Backdrop() -> impl IntoView {
    let presentation = use_presentation();

    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none bg-black" aria-hidden="true">
            {ORB_COLOURS
                .into_iter()
                .enumerate()
                .map(|(index, colours)| {
                    // spread the orbs on a loose ring
                    let angle = index as f64 / SECTION_COUNT as f64 * std::f64::consts::TAU;
                    let left = 50.0 + 38.0 * angle.cos();
                    let top = 50.0 + 34.0 * angle.sin();
                    view! {
                        <div
                            class=move || {
                                let size = if presentation.current_section() == index {
                                    "w-64 h-64 opacity-80"
                                } else {
                                    "w-32 h-32 opacity-30"
                                };
                                format!(
                                    "absolute -translate-x-1/2 -translate-y-1/2 rounded-full blur-2xl bg-gradient-to-br animate-float transition-all duration-1000 {colours} {size}",
                                )
                            }
                            style:left=format!("{left:.1}%")
                            style:top=format!("{top:.1}%")
                            style:animation-delay=format!("{index}s")
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
