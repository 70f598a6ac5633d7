use leptos::{html, prelude::*};

use crate::content::{projects_in, Category, PORTFOLIO_STATS};

use super::reveal::{rise, use_reveal, SectionHeading};

#[component]
pub fn Portfolio() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container);
    let (category, set_category) = signal(Category::All);

    view! {
        <section class="py-20 bg-black relative overflow-hidden">
            <div class="container mx-auto px-6 relative">
                <div node_ref=container class="max-w-7xl mx-auto">
                    <SectionHeading
                        title="Portfolio"
                        subtitle="A showcase of my best work across different genres and styles"
                        revealed
                    />
                    <div class="flex justify-center gap-8 -mt-8 mb-12">
                        {PORTFOLIO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center">
                                        <div class="text-2xl font-bold text-yellow-400">{stat.value}</div>
                                        <div class="text-gray-400 text-sm">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class=move || {
                        format!(
                            "flex flex-wrap justify-center gap-4 mb-12 transition-all duration-1000 delay-300 {}",
                            rise(revealed.get()),
                        )
                    }>
                        {Category::FILTERS
                            .into_iter()
                            .map(|filter| {
                                view! {
                                    <button
                                        class=move || {
                                            if category.get() == filter {
                                                "px-6 py-3 rounded-full font-semibold bg-gradient-to-r from-yellow-400 to-orange-500 text-black"
                                            } else {
                                                "px-6 py-3 rounded-full font-semibold bg-gray-800 text-gray-300 hover:bg-gray-700 hover:text-white"
                                            }
                                        }
                                        on:click=move |_| set_category.set(filter)
                                    >
                                        {filter.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                        {move || {
                            projects_in(category.get())
                                .map(|project| {
                                    view! {
                                        <article class="group bg-gradient-to-br from-gray-800 to-gray-900 rounded-2xl overflow-hidden border border-gray-700 hover:border-yellow-400/50 transition-all duration-500">
                                            <div class="relative h-48 bg-gradient-to-br from-yellow-400/20 via-orange-500/10 to-black flex items-center justify-center">
                                                <span class="w-16 h-16 rounded-full bg-gradient-to-r from-yellow-400 to-orange-500 text-black text-2xl flex items-center justify-center group-hover:scale-110 transition-transform">
                                                    "▶"
                                                </span>
                                                <span class="absolute bottom-3 right-3 bg-black/70 text-xs px-2 py-1 rounded">
                                                    {project.duration}
                                                </span>
                                            </div>
                                            <div class="p-6">
                                                <h3 class="text-xl font-bold text-white mb-2 group-hover:text-yellow-400 transition-colors">
                                                    {project.title}
                                                </h3>
                                                <p class="text-gray-400 text-sm mb-4">{project.description}</p>
                                                <div class="flex justify-between text-xs text-gray-500">
                                                    <span>{project.year}</span>
                                                    <span>{format!("{} views", project.views)}</span>
                                                    <span class="text-yellow-400">{project.category.label()}</span>
                                                </div>
                                            </div>
                                        </article>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
