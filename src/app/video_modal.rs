use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::youtube_embed_url;

/// Full-screen overlay playing a YouTube video. The player only exists while
/// the modal is open, so closing it stops playback.
#[component]
pub fn VideoModal(open: RwSignal<bool>, video_id: &'static str, title: &'static str) -> impl IntoView {
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-[60] bg-black/90 backdrop-blur-sm flex items-center justify-center p-4"
                on:click=move |_| open.set(false)
            >
                <div
                    class="relative w-full max-w-4xl bg-gray-900 rounded-2xl border border-yellow-400/30 overflow-hidden"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex items-center justify-between px-6 py-4 border-b border-gray-800">
                        <h3 class="text-lg font-semibold text-white">{title}</h3>
                        <button
                            class="w-10 h-10 rounded-full bg-gray-800 hover:bg-gray-700 text-white"
                            aria-label="Close video"
                            on:click=move |_| open.set(false)
                        >
                            "✕"
                        </button>
                    </div>
                    <iframe
                        class="w-full aspect-video"
                        src=youtube_embed_url(video_id)
                        title=title
                        allow="autoplay; encrypted-media; picture-in-picture; fullscreen"
                        allowfullscreen=true
                    ></iframe>
                </div>
            </div>
        </Show>
    }
}
