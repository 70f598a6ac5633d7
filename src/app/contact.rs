use leptos::{html, prelude::*};

use crate::contact::{ContactError, ContactForm, ProjectType};
use crate::content::{build_year, CONTACT_CHANNELS, PROJECT_TIMELINE};

use super::reveal::{slide_in_left, slide_in_right, use_reveal, SectionHeading};

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Sent(String),
    Invalid(ContactError),
}

#[component]
pub fn Contact() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container);

    view! {
        <section class="py-20 bg-gradient-to-b from-gray-900 to-black">
            <div class="container mx-auto px-6">
                <div node_ref=container class="max-w-6xl mx-auto">
                    <SectionHeading
                        title="Let's Work Together"
                        subtitle="Ready to bring your vision to life? Let's discuss your next project"
                        revealed
                    />
                    <div class="grid lg:grid-cols-2 gap-12">
                        <div class=move || {
                            format!("space-y-8 transition-all duration-1000 {}", slide_in_left(revealed.get()))
                        }>
                            <div class="space-y-4">
                                {CONTACT_CHANNELS
                                    .iter()
                                    .map(|channel| {
                                        view! {
                                            <a
                                                href=channel.href
                                                class="flex items-center gap-4 bg-gray-800/50 p-4 rounded-xl border border-gray-700 hover:border-yellow-400/50 transition-colors"
                                            >
                                                <span class="text-yellow-400 font-semibold w-24">{channel.name}</span>
                                                <span class="text-gray-300">{channel.value}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="bg-gray-800/50 p-6 rounded-xl border border-gray-700">
                                <h3 class="text-lg font-semibold text-white mb-4">"Project Timeline"</h3>
                                <table class="w-full text-sm">
                                    <tbody>
                                        {PROJECT_TIMELINE
                                            .iter()
                                            .map(|(step, time)| {
                                                view! {
                                                    <tr class="border-b border-gray-700 last:border-0">
                                                        <td class="py-2 text-gray-300">{*step}</td>
                                                        <td class="py-2 text-right text-yellow-400">{*time}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </div>
                        <div class=move || {
                            format!("transition-all duration-1000 {}", slide_in_right(revealed.get()))
                        }>
                            <ContactFormView />
                        </div>
                    </div>
                </div>
            </div>
            <Footer />
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let project_ref = NodeRef::<html::Select>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(None::<Status>);

    let read_form = move || -> Option<ContactForm> {
        Some(ContactForm {
            name: name_ref.get_untracked()?.value(),
            email: email_ref.get_untracked()?.value(),
            project: project_ref.get_untracked()?.value(),
            message: message_ref.get_untracked()?.value(),
        })
    };

    let clear_form = move || {
        if let Some(el) = name_ref.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = email_ref.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = project_ref.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = message_ref.get_untracked() {
            el.set_value("");
        }
    };

    let input_class = "w-full px-4 py-3 bg-gray-800 border border-gray-700 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-yellow-400 focus:border-transparent";

    view! {
        <form
            class="bg-gray-800/50 p-8 rounded-2xl border border-gray-700 space-y-6"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                let Some(form) = read_form() else {
                    return;
                };
                match form.validate() {
                    Ok(request) => {
                        log::info!(
                            "contact request from {} <{}> about {}",
                            request.name,
                            request.email,
                            request.project.label(),
                        );
                        clear_form();
                        set_status.set(Some(Status::Sent(request.name)));
                    }
                    Err(e) => {
                        log::debug!("contact form rejected: {e}");
                        set_status.set(Some(Status::Invalid(e)));
                    }
                }
            }
        >
            <div class="grid sm:grid-cols-2 gap-6">
                <input node_ref=name_ref type="text" placeholder="Your Name" class=input_class />
                <input node_ref=email_ref type="email" placeholder="Your Email" class=input_class />
            </div>
            <select node_ref=project_ref class=input_class>
                <option value="">"Select Project Type"</option>
                {ProjectType::ALL
                    .into_iter()
                    .map(|p| view! { <option value=p.value()>{p.label()}</option> })
                    .collect_view()}
            </select>
            <textarea
                node_ref=message_ref
                rows="5"
                placeholder="Tell me about your project..."
                class=input_class
            ></textarea>
            <button
                type="submit"
                class="w-full bg-gradient-to-r from-yellow-400 to-orange-500 text-black py-4 rounded-lg font-semibold hover:scale-[1.02] transition-transform"
            >
                "Send Message"
            </button>
            {move || {
                status
                    .get()
                    .map(|status| match status {
                        Status::Sent(name) => {
                            view! {
                                <p class="text-green-400 text-center">
                                    {format!("Thanks {name}, I'll get back to you within 24 hours.")}
                                </p>
                            }
                                .into_any()
                        }
                        Status::Invalid(e) => {
                            view! { <p class="text-red-400 text-center">{e.to_string()}</p> }.into_any()
                        }
                    })
            }}
        </form>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-20 pt-8 border-t border-gray-800 text-center text-gray-500 text-sm">
            {format!("© {} CineEdit. All rights reserved.", build_year(env!("BUILD_TIME")))}
        </footer>
    }
}
