use leptos::prelude::*;

use super::playback::use_presentation;

#[component]
pub fn Subtitles() -> impl IntoView {
    let presentation = use_presentation();

    view! {
        <Show when=move || !presentation.subtitles().is_empty()>
            <div class="fixed bottom-24 inset-x-0 z-40 flex justify-center px-4 pointer-events-none">
                <p class="max-w-3xl bg-black/80 text-white text-lg md:text-xl text-center px-6 py-3 rounded-xl border border-yellow-400/30 backdrop-blur-sm">
                    {move || presentation.subtitles()}
                </p>
            </div>
        </Show>
    }
}
