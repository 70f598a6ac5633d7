use leptos::{html, prelude::*};

use crate::content::ABOUT_STATS;

use super::reveal::{rise, slide_in_left, slide_in_right, use_reveal, SectionHeading};

#[component]
pub fn About() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container);

    view! {
        <section class="py-20 bg-gradient-to-b from-black to-gray-900">
            <div class="container mx-auto px-6">
                <div node_ref=container class="max-w-6xl mx-auto">
                    <SectionHeading
                        title="About Me"
                        subtitle="I'm a passionate video editor with over 8 years of experience in crafting compelling visual narratives. From commercial advertisements to documentary films, I bring stories to life through the power of editing."
                        revealed
                    />
                    <div class="grid md:grid-cols-2 gap-8 lg:gap-12 items-center mb-16">
                        <div class=move || {
                            format!("transition-all duration-1000 delay-300 {}", slide_in_left(revealed.get()))
                        }>
                            <div class="w-full h-96 bg-gradient-to-br from-yellow-400/20 to-orange-500/20 rounded-2xl relative">
                                <div class="absolute inset-4 bg-gradient-to-br from-gray-800 to-gray-900 rounded-xl flex items-center justify-center">
                                    <p class="text-gray-300">"Professional Portrait"</p>
                                </div>
                            </div>
                        </div>
                        <div class=move || {
                            format!("transition-all duration-1000 delay-500 {}", slide_in_right(revealed.get()))
                        }>
                            <h3 class="text-2xl font-bold mb-6 text-yellow-400">"My Journey"</h3>
                            <p class="text-gray-300 mb-6 leading-relaxed">
                                "Started as a freelance editor in 2016, I've evolved into a versatile creative professional specializing in narrative storytelling, motion graphics, and color grading. My work spans across multiple genres including music videos, corporate content, and independent films."
                            </p>
                            <p class="text-gray-300 leading-relaxed">
                                "I believe that great editing is invisible. It should serve the story and evoke emotion without drawing attention to itself."
                            </p>
                        </div>
                    </div>
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-6">
                        {ABOUT_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class=move || {
                                        format!("text-center transition-all duration-1000 {}", rise(revealed.get()))
                                    }>
                                        <div class="bg-gradient-to-br from-gray-800 to-gray-900 p-6 rounded-2xl border border-gray-700 hover:border-yellow-400/50 transition-all duration-300">
                                            <h4 class="text-2xl font-bold text-white mb-2">{stat.value}</h4>
                                            <p class="text-gray-400 text-sm">{stat.label}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
