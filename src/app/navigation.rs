use leptos::prelude::*;

use crate::presentation::timeline::{SECTION_COUNT, SECTION_TITLES};

use super::{playback::use_presentation, scroll_sync::jump_to_section};

#[component]
pub fn Navigation() -> impl IntoView {
    let presentation = use_presentation();
    let (menu_open, set_menu_open) = signal(false);

    let links = move |closes_menu: bool| {
        (0..SECTION_COUNT)
            .map(move |index| {
                view! {
                    <button
                        class=move || {
                            if presentation.current_section() == index {
                                "px-3 py-2 text-sm font-semibold text-yellow-400"
                            } else {
                                "px-3 py-2 text-sm text-gray-300 hover:text-white transition-colors"
                            }
                        }
                        on:click=move |_| {
                            if closes_menu {
                                set_menu_open.set(false);
                            }
                            jump_to_section(presentation, index);
                        }
                    >
                        {SECTION_TITLES[index]}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-50 bg-black/80 backdrop-blur-md border-b border-gray-800">
            <div class="container mx-auto px-6 py-4 flex items-center justify-between">
                <button
                    class="text-2xl font-bold bg-gradient-to-r from-yellow-400 to-orange-500 bg-clip-text text-transparent"
                    on:click=move |_| jump_to_section(presentation, 0)
                >
                    "CineEdit"
                </button>
                <div class="hidden md:flex items-center gap-2">{links(false)}</div>
                <button
                    class="md:hidden text-white text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col px-6 pb-4">
                    {links(true)}
                </div>
            </Show>
        </nav>
    }
}
