use leptos::prelude::*;

use crate::content::{RESUME_URL, SHOWREEL_TITLE, SHOWREEL_VIDEO_ID};

use super::{
    playback::use_presentation, scroll_sync::scroll_to_section, video_modal::VideoModal,
};

const WAVEFORM_BARS: usize = 35;

#[component]
pub fn Hero() -> impl IntoView {
    let presentation = use_presentation();
    let reel_open = RwSignal::new(false);

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-black via-gray-900 to-black"></div>
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute top-20 left-10 w-16 h-12 bg-gradient-to-r from-yellow-400/20 to-orange-500/20 rounded-lg animate-float"></div>
                <div class="hidden sm:block absolute top-40 right-20 w-20 h-15 bg-gradient-to-r from-red-500/20 to-pink-500/20 rounded-lg animate-float [animation-delay:1s]"></div>
                <div class="absolute bottom-40 left-20 w-12 h-9 bg-gradient-to-r from-purple-500/20 to-blue-500/20 rounded-lg animate-float [animation-delay:2s]"></div>
            </div>

            <div class="relative z-10 text-center px-4 sm:px-6 max-w-4xl mx-auto">
                <div class="mb-8 bg-black/50 backdrop-blur-sm rounded-2xl p-4 sm:p-6 border border-yellow-400/30">
                    <div class="flex flex-col sm:flex-row items-center justify-between mb-4 gap-3">
                        <div class="flex items-center gap-4">
                            <button
                                class="w-12 h-12 bg-gradient-to-r from-yellow-400 to-orange-500 rounded-full flex items-center justify-center text-black text-xl hover:scale-110 transition-transform"
                                aria-label="Toggle presentation"
                                on:click=move |_| presentation.toggle()
                            >
                                {move || if presentation.is_playing() { "⏸" } else { "▶" }}
                            </button>
                            <div class="text-yellow-400 text-sm font-semibold">
                                {move || {
                                    if presentation.is_playing() {
                                        "Presentation Playing"
                                    } else {
                                        "Click to Start Experience"
                                    }
                                }}
                            </div>
                        </div>
                        <Waveform />
                    </div>
                    <div class="w-full bg-gray-700 rounded-full h-2 mb-4">
                        <div
                            class="bg-gradient-to-r from-yellow-400 to-orange-500 h-2 rounded-full transition-all duration-300"
                            style:width=move || format!("{}%", presentation.progress())
                        ></div>
                    </div>
                    <div class="text-yellow-400 text-sm font-mono">"Interactive Portfolio"</div>
                </div>

                <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold mb-6 animate-fade-in">
                    <span class="bg-gradient-to-r from-yellow-400 via-orange-500 to-red-500 bg-clip-text text-transparent">
                        "Visual"
                    </span>
                    <br />
                    <span class="text-white">"Storyteller"</span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 mb-8 animate-fade-in">
                    "Crafting cinematic experiences through the art of video editing"
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <button
                        class="bg-gradient-to-r from-yellow-400 to-orange-500 text-black px-8 py-4 rounded-full font-semibold hover:scale-105 transition-all duration-300"
                        on:click=move |_| reel_open.set(true)
                    >
                        "▶ Watch Reel"
                    </button>
                    <a
                        href=RESUME_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="border-2 border-yellow-400 text-yellow-400 px-8 py-4 rounded-full font-semibold hover:bg-yellow-400 hover:text-black transition-all duration-300"
                    >
                        "⬇ Resume"
                    </a>
                </div>
            </div>

            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-yellow-400"
                aria-label="Scroll to About section"
                on:click=move |_| scroll_to_section(1)
            >
                <div class="flex flex-col items-center">
                    <span class="text-2xl">"↓"</span>
                    <span class="text-sm mt-2">"Scroll to Explore"</span>
                </div>
            </button>
        </section>
        <VideoModal open=reel_open video_id=SHOWREEL_VIDEO_ID title=SHOWREEL_TITLE />
    }
}

/// Decorative level meter, animated while the presentation plays.
#[component]
fn Waveform() -> impl IntoView {
    let presentation = use_presentation();
    view! {
        <div class="hidden sm:flex items-center justify-center gap-1 h-5">
            {(0..WAVEFORM_BARS)
                .map(|i| {
                    let height = 10 + (i * 37 + 11) % 30;
                    view! {
                        <div
                            class=move || {
                                if presentation.is_playing() {
                                    "bg-gradient-to-t from-yellow-400 to-orange-500 w-1 rounded-full animate-pulse opacity-100"
                                } else {
                                    "bg-gradient-to-t from-yellow-400 to-orange-500 w-1 rounded-full opacity-50"
                                }
                            }
                            style:height=format!("{height}px")
                            style:animation-delay=format!("{:.1}s", i as f64 * 0.1)
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
