use std::time::Duration;

use rodio::{
    source::{
        SineWave,
        Source,
    },
    OutputStream,
    OutputStreamHandle,
};

use crate::core::AppSettings;

/// Synthesized UI sound effects, the audible counterpart of every tap,
/// toggle and destructive action. All playback is fire-and-forget and gated
/// by `sound_enabled`; without an output device every trigger is a no-op.
pub struct Feedback {
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl Feedback {
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(e) => {
                eprintln!("Audio output unavailable: {}", e);
                None
            }
        };
        Self { output }
    }

    /// Crisp, short, high click.
    pub fn tap(&self, settings: &AppSettings) {
        if !settings.sound_enabled {
            return;
        }
        self.tone(800.0, 0, 80, 0.05);
    }

    /// Major chord arpeggio.
    pub fn success(&self, settings: &AppSettings) {
        if !settings.sound_enabled {
            return;
        }
        self.tone(523.25, 0, 300, 0.05); // C5
        self.tone(659.25, 100, 300, 0.05); // E5
        self.tone(783.99, 200, 400, 0.05); // G5
    }

    /// Low dissonant thud: two close frequencies beating against each other.
    pub fn error(&self, settings: &AppSettings) {
        if !settings.sound_enabled {
            return;
        }
        self.tone(150.0, 0, 200, 0.1);
        self.tone(145.0, 0, 200, 0.1);
    }

    /// Descending steps.
    pub fn delete(&self, settings: &AppSettings) {
        if !settings.sound_enabled {
            return;
        }
        self.tone(300.0, 0, 140, 0.08);
        self.tone(170.0, 100, 140, 0.08);
        self.tone(80.0, 200, 160, 0.08);
    }

    /// Two tones up when enabling, down when disabling.
    pub fn toggle(&self, settings: &AppSettings, enabled: bool) {
        if !settings.sound_enabled {
            return;
        }
        let (first, second) = if enabled { (600.0, 800.0) } else { (800.0, 600.0) };
        self.tone(first, 0, 100, 0.05);
        self.tone(second, 50, 100, 0.05);
    }

    fn tone(&self, freq: f32, delay_ms: u64, duration_ms: u64, volume: f32) {
        let Some((_, handle)) = &self.output else { return };

        let mut tone = SineWave::new(freq).take_duration(Duration::from_millis(duration_ms));
        tone.set_filter_fadeout();

        let source = tone
            .amplify(volume)
            .fade_in(Duration::from_millis(10))
            .delay(Duration::from_millis(delay_ms));

        let _ = handle.play_raw(source);
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new()
    }
}
