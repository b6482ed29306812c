//! The shared alarm sound.

use log::{error, info};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// A single alarm shared by every timer on the board.
pub trait AlarmPlayer {
    /// Start playback from the current position. Failures are logged, never
    /// surfaced.
    fn play(&self);

    /// Pause and rewind to the beginning. Safe to call when nothing plays.
    fn stop(&self);
}

/// Alarm backed by an `<audio>` element that is never attached to the page.
pub struct AudioAlarm {
    audio: Option<HtmlAudioElement>,
}

impl AudioAlarm {
    pub fn new(src: &str) -> Self {
        let audio = match HtmlAudioElement::new_with_src(src) {
            Ok(audio) => {
                info!("Alarm sound loaded from {}", src);
                Some(audio)
            }
            Err(e) => {
                error!("Could not create alarm audio for {}: {:?}", src, e);
                None
            }
        };
        Self { audio }
    }
}

impl AlarmPlayer for AudioAlarm {
    fn play(&self) {
        let Some(audio) = &self.audio else {
            error!("Error playing sound: no audio element");
            return;
        };

        match audio.play() {
            // Browsers reject the promise when autoplay is not allowed yet
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    error!("Error playing sound: {:?}", e);
                }
            }),
            Err(e) => error!("Error playing sound: {:?}", e),
        }
    }

    fn stop(&self) {
        if let Some(audio) = &self.audio {
            if let Err(e) = audio.pause() {
                error!("Error pausing sound: {:?}", e);
            }
            audio.set_current_time(0.0);
        }
    }
}
