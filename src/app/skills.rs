use leptos::{html, prelude::*};

use crate::content::SKILLS;

use super::reveal::{rise, use_reveal, SectionHeading};

#[component]
pub fn Skills() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container);

    view! {
        <section class="py-20 bg-gradient-to-b from-gray-900 to-black">
            <div class="container mx-auto px-6">
                <div node_ref=container class="max-w-7xl mx-auto">
                    <SectionHeading
                        title="Skills & Expertise"
                        subtitle="Mastering the tools and techniques that bring creative visions to life"
                        revealed
                    />
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class=move || {
                                        format!(
                                            "bg-gradient-to-br from-gray-800 to-gray-900 p-8 rounded-2xl border border-gray-700 hover:border-yellow-400/50 transition-all duration-1000 {}",
                                            rise(revealed.get()),
                                        )
                                    }>
                                        <h3 class="text-xl font-bold text-white mb-3">{skill.title}</h3>
                                        <p class="text-gray-400 text-sm mb-6">{skill.description}</p>
                                        <div class="flex justify-between text-sm mb-2">
                                            <span class="text-gray-300">"Proficiency"</span>
                                            <span class="text-yellow-400 font-semibold">
                                                {format!("{}%", skill.percentage)}
                                            </span>
                                        </div>
                                        <div class="w-full bg-gray-700 rounded-full h-2 mb-6">
                                            <div
                                                class="bg-gradient-to-r from-yellow-400 to-orange-500 h-2 rounded-full transition-all duration-1000 ease-out"
                                                style:width=move || {
                                                    let filled = if revealed.get() { skill.percentage } else { 0 };
                                                    format!("{filled}%")
                                                }
                                            ></div>
                                        </div>
                                        <div class="flex flex-wrap gap-2">
                                            {skill
                                                .tools
                                                .iter()
                                                .map(|tool| {
                                                    view! {
                                                        <span class="px-3 py-1 bg-gray-700 text-gray-300 rounded-full text-xs">
                                                            {*tool}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
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
