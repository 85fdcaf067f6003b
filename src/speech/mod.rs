pub mod resolver;

use tts::Tts;

pub use resolver::{
    resolve,
    VoiceInfo,
};

/// Fixed prosody: slightly clearer pitch, slightly slower rate, expressed as
/// multiples of the backend's normal values and clamped to its bounds.
const PITCH_SCALE: f32 = 1.05;
const RATE_SCALE: f32 = 0.9;

/// Thin wrapper over the platform speech engine. At most one utterance is
/// audible at a time: a new request pre-empts the current one, requests
/// never queue. Every failure path degrades to silence.
pub struct SpeechTrigger {
    tts: Option<Tts>,
    voices: Vec<tts::Voice>,
    snapshot: Vec<VoiceInfo>,
}

impl SpeechTrigger {
    /// Initializes the engine and snapshots its voice inventory once. An
    /// engine that fails to come up yields a trigger that stays silent for
    /// the process lifetime instead of erroring.
    pub fn new() -> Self {
        let tts = match Tts::default() {
            Ok(tts) => Some(tts),
            Err(e) => {
                eprintln!("Speech synthesis unavailable: {}", e);
                None
            }
        };

        let voices = tts.as_ref().and_then(|t| t.voices().ok()).unwrap_or_default();

        let snapshot = voices
            .iter()
            .map(|v| VoiceInfo { id: v.id(), name: v.name(), language: v.language().to_string() })
            .collect();

        Self { tts, voices, snapshot }
    }

    /// The snapshot used for voice resolution; fixed for the process
    /// lifetime.
    pub fn voices(&self) -> &[VoiceInfo] {
        &self.snapshot
    }

    /// Fire-and-forget: pre-empts the in-flight utterance and speaks `text`
    /// with the best voice for `language_tag`. When no voice matches (or
    /// none are loaded at all) the platform default voice is used.
    pub fn speak(&mut self, text: &str, language_tag: &str) {
        let Some(tts) = self.tts.as_mut() else { return };
        if text.is_empty() {
            return;
        }

        if let Some(info) = resolver::resolve(language_tag, &self.snapshot) {
            if let Some(voice) = self.voices.iter().find(|v| v.id() == info.id) {
                if let Err(e) = tts.set_voice(voice) {
                    eprintln!("Failed to set voice '{}': {}", info.name, e);
                }
            }
        }

        let pitch = (tts.normal_pitch() * PITCH_SCALE).clamp(tts.min_pitch(), tts.max_pitch());
        let rate = (tts.normal_rate() * RATE_SCALE).clamp(tts.min_rate(), tts.max_rate());
        let _ = tts.set_pitch(pitch);
        let _ = tts.set_rate(rate);

        // interrupt = true: cancel whatever is playing instead of queueing.
        if let Err(e) = tts.speak(text, true) {
            eprintln!("Failed to speak: {}", e);
        }
    }

    /// Cancels the in-flight utterance, if any. Called when a playback
    /// session ends or the player is left.
    pub fn stop(&mut self) {
        if let Some(tts) = self.tts.as_mut() {
            let _ = tts.stop();
        }
    }
}

impl Default for SpeechTrigger {
    fn default() -> Self {
        Self::new()
    }
}
