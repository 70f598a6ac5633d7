use leptos::{html, prelude::*};

use crate::content::ROLES;

use super::reveal::{slide_in_left, use_reveal, SectionHeading};

#[component]
pub fn Experience() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container);

    view! {
        <section class="py-20 bg-black">
            <div class="container mx-auto px-6">
                <div node_ref=container class="max-w-5xl mx-auto">
                    <SectionHeading
                        title="Experience"
                        subtitle="A journey through diverse projects and collaborations"
                        revealed
                    />
                    <ol class="relative border-l-2 border-yellow-400/30 ml-4 space-y-12">
                        {ROLES
                            .iter()
                            .map(|role| {
                                view! {
                                    <li class=move || {
                                        format!("relative pl-8 transition-all duration-1000 {}", slide_in_left(revealed.get()))
                                    }>
                                        <span class="absolute -left-[9px] w-4 h-4 rounded-full bg-gradient-to-r from-yellow-400 to-orange-500"></span>
                                        <div class="bg-gradient-to-br from-gray-800 to-gray-900 p-6 rounded-2xl border border-gray-700">
                                            <div class="flex flex-wrap items-baseline justify-between gap-2 mb-2">
                                                <h3 class="text-xl font-bold text-white">{role.title}</h3>
                                                <span class="text-sm text-yellow-400">{role.period}</span>
                                            </div>
                                            <p class="text-gray-300 mb-4">
                                                {format!("{} · {} · {}", role.company, role.location, role.kind)}
                                            </p>
                                            <ul class="list-disc list-inside text-gray-400 text-sm space-y-1">
                                                {role
                                                    .achievements
                                                    .iter()
                                                    .map(|achievement| view! { <li>{*achievement}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </div>
        </section>
    }
}
