use leptos::{ev, html, prelude::*};
use leptos_use::use_event_listener;

use crate::presentation::timeline::{media_drifted, media_seconds};

use super::playback::use_presentation;

/// `HTMLMediaElement.HAVE_METADATA`
const HAVE_METADATA: u16 = 1;

/// Optional narration track. When `/presentation-audio.*` is served, the
/// element plays along with the presentation and its position becomes the
/// presentation clock. Without a track it stays idle.
#[component]
pub fn PresentationAudio() -> impl IntoView {
    let presentation = use_presentation();
    let audio_ref = NodeRef::<html::Audio>::new();

    let _ = use_event_listener(audio_ref, ev::timeupdate, move |_| {
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };
        if !audio.paused() {
            presentation.update_time(media_seconds(audio.current_time()));
        }
    });

    Effect::new(move |_| {
        let playing = presentation.is_playing();
        let Some(audio) = audio_ref.get() else {
            return;
        };
        if audio.ready_state() < HAVE_METADATA {
            return;
        }
        if playing {
            if let Err(e) = audio.play() {
                log::warn!("couldn't start presentation audio: {e:?}");
            }
        } else if let Err(e) = audio.pause() {
            log::warn!("couldn't pause presentation audio: {e:?}");
        }
    });

    // seeks and the fallback clock pull the track along
    Effect::new(move |_| {
        let time = presentation.current_time();
        let Some(audio) = audio_ref.get() else {
            return;
        };
        if audio.ready_state() >= HAVE_METADATA && media_drifted(audio.current_time(), time) {
            audio.set_current_time(f64::from(time));
        }
    });

    view! {
        <audio node_ref=audio_ref preload="auto" class="hidden">
            <source src="/presentation-audio.mp3" type="audio/mpeg" />
            <source src="/presentation-audio.wav" type="audio/wav" />
        </audio>
    }
}
