use leptos::prelude::*;
use leptos_meta::Title;

use crate::presentation::timeline::section_anchor;

use super::{
    about::About, audio::PresentationAudio, backdrop::Backdrop, contact::Contact,
    controls::PresentationControls, experience::Experience, hero::Hero, navigation::Navigation,
    playback::provide_presentation, portfolio::Portfolio, scroll_sync::use_scroll_sync,
    skills::Skills, subtitles::Subtitles, testimonials::Testimonials,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let presentation = provide_presentation();
    use_scroll_sync(presentation);

    view! {
        <Title text="Video Editor Portfolio" />
        <Backdrop />
        <Navigation />
        <main class="relative pb-24">
            <div id=section_anchor(0)>
                <Hero />
            </div>
            <div id=section_anchor(1)>
                <About />
            </div>
            <div id=section_anchor(2)>
                <Portfolio />
            </div>
            <div id=section_anchor(3)>
                <Skills />
            </div>
            <div id=section_anchor(4)>
                <Experience />
            </div>
            <div id=section_anchor(5)>
                <Testimonials />
            </div>
            <div id=section_anchor(6)>
                <Contact />
            </div>
        </main>
        <Subtitles />
        <PresentationControls />
        <PresentationAudio />
    }
}
