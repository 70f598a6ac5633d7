use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Latches to `true` the first time the element scrolls into view.
pub fn use_reveal(target: NodeRef<html::Div>) -> Memo<bool> {
    let visible = use_element_visibility(target);
    Memo::new(move |seen: Option<&bool>| seen.copied().unwrap_or(false) || visible.get())
}

pub fn rise(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    }
}

pub fn slide_in_left(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-x-0"
    } else {
        "opacity-0 -translate-x-10"
    }
}

pub fn slide_in_right(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-x-0"
    } else {
        "opacity-0 translate-x-10"
    }
}

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str, revealed: Memo<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            format!("text-center mb-16 transition-all duration-1000 {}", rise(revealed.get()))
        }>
            <h2 class="text-4xl md:text-5xl font-bold mb-6">
                <span class="bg-gradient-to-r from-yellow-400 to-orange-500 bg-clip-text text-transparent">
                    {title}
                </span>
            </h2>
            <p class="text-xl text-gray-300 max-w-3xl mx-auto leading-relaxed">{subtitle}</p>
        </div>
    }
}
