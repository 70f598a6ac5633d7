use leptos::prelude::*;

use crate::presentation::timeline::{format_timestamp, SECTION_COUNT, SECTION_TITLES};

use super::{
    playback::use_presentation,
    scroll_sync::{jump_to_section, step_section},
};

/// Fixed transport bar at the bottom of the page.
#[component]
pub fn PresentationControls() -> impl IntoView {
    let presentation = use_presentation();

    let button_class = "w-10 h-10 rounded-full bg-gray-800 hover:bg-gray-700 text-white flex items-center justify-center transition-colors disabled:opacity-40 disabled:cursor-not-allowed";

    view! {
        <div class="fixed bottom-0 inset-x-0 z-40 bg-black/90 backdrop-blur-md border-t border-yellow-400/20">
            <div
                class="h-1 bg-gradient-to-r from-yellow-400 to-orange-500 transition-all duration-300"
                style:width=move || format!("{}%", presentation.progress())
            ></div>
            <div class="container mx-auto px-4 py-3 flex items-center gap-4">
                <div class="flex items-center gap-2">
                    <button
                        class=button_class
                        aria-label="Previous section"
                        disabled=move || !presentation.can_step(-1)
                        on:click=move |_| step_section(presentation, -1)
                    >
                        "⏮"
                    </button>
                    <button
                        class="w-12 h-12 rounded-full bg-gradient-to-r from-yellow-400 to-orange-500 text-black text-lg flex items-center justify-center hover:scale-105 transition-transform"
                        aria-label=move || if presentation.is_playing() { "Pause" } else { "Play" }
                        on:click=move |_| presentation.toggle()
                    >
                        {move || if presentation.is_playing() { "⏸" } else { "▶" }}
                    </button>
                    <button
                        class=button_class
                        aria-label="Next section"
                        disabled=move || !presentation.can_step(1)
                        on:click=move |_| step_section(presentation, 1)
                    >
                        "⏭"
                    </button>
                </div>
                <div class="font-mono text-sm text-gray-300 whitespace-nowrap">
                    {move || {
                        format!(
                            "{} / {}",
                            format_timestamp(presentation.current_time()),
                            format_timestamp(presentation.duration()),
                        )
                    }}
                </div>
                <div class="hidden sm:block flex-1 text-sm text-yellow-400 font-semibold truncate">
                    {move || SECTION_TITLES[presentation.current_section()]}
                </div>
                <div class="flex items-center gap-2 ml-auto">
                    {(0..SECTION_COUNT)
                        .map(|index| {
                            view! {
                                <button
                                    class=move || {
                                        if presentation.current_section() == index {
                                            "w-3 h-3 rounded-full bg-yellow-400 scale-125 transition-all"
                                        } else {
                                            "w-3 h-3 rounded-full bg-gray-600 hover:bg-gray-400 transition-all"
                                        }
                                    }
                                    aria-label=format!("Go to {}", SECTION_TITLES[index])
                                    on:click=move |_| jump_to_section(presentation, index)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
