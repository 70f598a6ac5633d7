use leptos::{html, prelude::*};

use crate::content::{next_index, prev_index, TESTIMONIALS};

use super::reveal::{rise, use_reveal, SectionHeading};

#[component]
pub fn Testimonials() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container);
    let (current, set_current) = signal(0usize);
    let count = TESTIMONIALS.len();

    let testimonial = move || &TESTIMONIALS[current.get() % count];

    view! {
        <section class="py-20 bg-gradient-to-b from-black to-gray-900">
            <div class="container mx-auto px-6">
                <div node_ref=container class="max-w-4xl mx-auto">
                    <SectionHeading
                        title="Client Testimonials"
                        subtitle="What clients say about working together"
                        revealed
                    />
                    <div class=move || {
                        format!(
                            "relative bg-gradient-to-br from-gray-800 to-gray-900 p-8 md:p-12 rounded-3xl border border-gray-700 transition-all duration-1000 {}",
                            rise(revealed.get()),
                        )
                    }>
                        <div class="text-yellow-400 text-xl mb-6">
                            {move || "★".repeat(usize::from(testimonial().rating))}
                        </div>
                        <blockquote class="text-xl md:text-2xl text-gray-200 leading-relaxed mb-8">
                            {move || format!("\u{201c}{}\u{201d}", testimonial().text)}
                        </blockquote>
                        <div class="flex items-center gap-4">
                            <div class="w-14 h-14 rounded-full bg-gradient-to-r from-yellow-400 to-orange-500 text-black font-bold flex items-center justify-center">
                                {move || testimonial().initials()}
                            </div>
                            <div>
                                <p class="text-white font-semibold">{move || testimonial().name}</p>
                                <p class="text-gray-400 text-sm">
                                    {move || {
                                        let t = testimonial();
                                        format!("{}, {}", t.role, t.company)
                                    }}
                                </p>
                            </div>
                        </div>
                    </div>

                    <div class="flex items-center justify-center gap-6 mt-8">
                        <button
                            class="w-12 h-12 rounded-full bg-gray-800 hover:bg-gray-700 text-white"
                            aria-label="Previous testimonial"
                            on:click=move |_| set_current.update(|i| *i = prev_index(*i, count))
                        >
                            "‹"
                        </button>
                        <div class="flex gap-2">
                            {(0..count)
                                .map(|i| {
                                    view! {
                                        <button
                                            class=move || {
                                                if current.get() == i {
                                                    "w-8 h-3 rounded-full bg-yellow-400 transition-all"
                                                } else {
                                                    "w-3 h-3 rounded-full bg-gray-600 hover:bg-gray-500 transition-all"
                                                }
                                            }
                                            aria-label=format!("Show testimonial {}", i + 1)
                                            on:click=move |_| set_current.set(i)
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button
                            class="w-12 h-12 rounded-full bg-gray-800 hover:bg-gray-700 text-white"
                            aria-label="Next testimonial"
                            on:click=move |_| set_current.update(|i| *i = next_index(*i, count))
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
