use serde::{
    Deserialize,
    Serialize,
};

/// Bounds of the per-card duration slider, in seconds.
pub const MIN_INTERVAL_SECS: u32 = 3;
pub const MAX_INTERVAL_SECS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

/// Which language form is spoken aloud automatically when a card becomes
/// active in the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AutoPlayLanguage {
    En,
    Jp,
    Bn,
    #[default]
    None,
}

/// Application settings, persisted as a single record. Every field carries a
/// serde default so records written by older builds keep loading after new
/// fields are added (missing fields fill with the documented defaults).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: ThemeMode,
    /// Seconds per card in the player, within [3, 20].
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default = "default_true")]
    pub animations_enabled: bool,
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    #[serde(default = "default_true")]
    pub haptics_enabled: bool,
    #[serde(default)]
    pub auto_play_language: AutoPlayLanguage,
}

fn default_interval() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            interval: default_interval(),
            animations_enabled: true,
            sound_enabled: true,
            haptics_enabled: true,
            auto_play_language: AutoPlayLanguage::None,
        }
    }
}

impl AppSettings {
    /// The configured interval forced back into its documented bounds, for
    /// callers that cannot tolerate an out-of-range persisted value.
    pub fn clamped_interval(&self) -> u32 {
        self.interval.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_is_lossless() {
        let settings = AppSettings {
            theme: ThemeMode::Dark,
            interval: 12,
            animations_enabled: false,
            sound_enabled: true,
            haptics_enabled: false,
            auto_play_language: AutoPlayLanguage::Jp,
        };

        let json = serde_json::to_string(&settings).unwrap();
        let reloaded: AppSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(settings, reloaded);
    }

    #[test]
    fn missing_fields_fill_with_documented_defaults() {
        // A record persisted before sound/haptics/auto-play existed.
        let old_record = r#"{"theme":"dark","interval":8}"#;
        let settings: AppSettings = serde_json::from_str(old_record).unwrap();

        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.interval, 8);
        assert!(settings.animations_enabled);
        assert!(settings.sound_enabled);
        assert!(settings.haptics_enabled);
        assert_eq!(settings.auto_play_language, AutoPlayLanguage::None);
    }

    #[test]
    fn empty_record_is_all_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn out_of_range_interval_is_clamped_for_playback() {
        let mut settings = AppSettings::default();

        settings.interval = 1;
        assert_eq!(settings.clamped_interval(), MIN_INTERVAL_SECS);

        settings.interval = 90;
        assert_eq!(settings.clamped_interval(), MAX_INTERVAL_SECS);
    }
}
