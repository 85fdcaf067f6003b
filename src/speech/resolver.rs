/// Immutable snapshot of one synthesis voice. The live platform inventory is
/// copied into these at startup so resolution stays a pure function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    /// BCP 47 style tag as reported by the platform, e.g. "en-GB".
    pub language: String,
}

/// Voices carrying this marker in their name come from the higher-quality
/// synthesis engine and win over everything else in their language.
const QUALITY_ENGINE_MARKER: &str = "Google";

/// Known female voice names and keywords across platforms.
const FEMALE_VOICE_KEYWORDS: [&str; 7] =
    ["female", "samantha", "zira", "yuri", "kyoko", "kanya", "lekha"];

/// Picks the best available voice for a language tag, or `None` when no
/// voice shares its base language.
///
/// Region separators are normalized (`_` becomes `-`) on both sides. The
/// candidate set is every voice whose base language (the subtag before the
/// first `-`) matches; when the request names a region and exact full-tag
/// matches exist, the set narrows to those. Within the set the preference
/// order is: quality-engine marker, then a female voice, then the first
/// candidate in enumeration order. Ties always break by first match, so the
/// same snapshot yields the same voice on every call.
pub fn resolve<'a>(language_tag: &str, voices: &'a [VoiceInfo]) -> Option<&'a VoiceInfo> {
    let target = normalize(language_tag);
    let base = base_language(&target);

    let mut candidates: Vec<&VoiceInfo> = voices
        .iter()
        .filter(|v| {
            let tag = normalize(&v.language);
            base_language(&tag).eq_ignore_ascii_case(base)
        })
        .collect();

    if candidates.is_empty() {
        return None;
    }

    if target.contains('-') {
        let region_matches: Vec<&VoiceInfo> = candidates
            .iter()
            .copied()
            .filter(|v| normalize(&v.language).eq_ignore_ascii_case(&target))
            .collect();
        if !region_matches.is_empty() {
            candidates = region_matches;
        }
    }

    if let Some(voice) =
        candidates.iter().copied().find(|v| v.name.contains(QUALITY_ENGINE_MARKER))
    {
        return Some(voice);
    }

    if let Some(voice) = candidates.iter().copied().find(|v| {
        let name = v.name.to_lowercase();
        FEMALE_VOICE_KEYWORDS.iter().any(|keyword| name.contains(keyword))
    }) {
        return Some(voice);
    }

    candidates.first().copied()
}

fn normalize(tag: &str) -> String {
    tag.replace('_', "-")
}

fn base_language(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(id: &str, name: &str, language: &str) -> VoiceInfo {
        VoiceInfo { id: id.to_string(), name: name.to_string(), language: language.to_string() }
    }

    #[test]
    fn resolution_is_deterministic_for_a_fixed_snapshot() {
        let voices = vec![
            voice("a", "Daniel", "en-GB"),
            voice("b", "Serena", "en-GB"),
            voice("c", "Alex", "en-US"),
        ];

        let first = resolve("en-GB", &voices).unwrap();
        for _ in 0..10 {
            assert_eq!(resolve("en-GB", &voices).unwrap(), first);
        }
    }

    #[test]
    fn no_base_language_match_yields_none() {
        let voices = vec![voice("a", "Alex", "en-US"), voice("b", "Kyoko", "ja-JP")];
        assert!(resolve("bn-BD", &voices).is_none());
        assert!(resolve("bn", &voices).is_none());
    }

    #[test]
    fn base_language_must_match_exactly_not_by_prefix() {
        // "enm" (Middle English) is not "en".
        let voices = vec![voice("a", "Chaucer", "enm-GB")];
        assert!(resolve("en-GB", &voices).is_none());
    }

    #[test]
    fn underscores_normalize_on_both_sides() {
        let voices = vec![voice("a", "Daniel", "en_GB")];
        assert_eq!(resolve("en-GB", &voices).unwrap().id, "a");
        assert_eq!(resolve("en_GB", &voices).unwrap().id, "a");
    }

    #[test]
    fn region_match_narrows_the_candidate_set() {
        let voices = vec![
            voice("us", "Google US English", "en-US"),
            voice("gb", "Daniel", "en-GB"),
        ];

        // The exact-region set wins even though the US voice carries the
        // quality marker.
        assert_eq!(resolve("en-GB", &voices).unwrap().id, "gb");
    }

    #[test]
    fn unmatched_region_falls_back_to_the_base_language_set() {
        let voices = vec![voice("us", "Alex", "en-US"), voice("gb", "Daniel", "en-GB")];
        assert_eq!(resolve("en-AU", &voices).unwrap().id, "us");
    }

    #[test]
    fn region_comparison_is_case_insensitive() {
        let voices = vec![voice("us", "Alex", "en-US"), voice("gb", "Daniel", "EN-gb")];
        assert_eq!(resolve("en-gb", &voices).unwrap().id, "gb");
    }

    #[test]
    fn quality_engine_marker_wins_within_the_set() {
        let voices = vec![
            voice("a", "Kyoko", "ja-JP"),
            voice("b", "Google 日本語", "ja-JP"),
            voice("c", "Otoya", "ja-JP"),
        ];
        assert_eq!(resolve("ja-JP", &voices).unwrap().id, "b");
    }

    #[test]
    fn female_voice_beats_plain_first_candidate() {
        let voices = vec![
            voice("a", "Microsoft David Desktop", "en-US"),
            voice("b", "Microsoft Zira Desktop", "en-US"),
        ];
        assert_eq!(resolve("en-US", &voices).unwrap().id, "b");
    }

    #[test]
    fn falls_back_to_the_first_candidate_in_enumeration_order() {
        let voices = vec![voice("a", "Daniel", "en-GB"), voice("b", "Oliver", "en-GB")];
        assert_eq!(resolve("en", &voices).unwrap().id, "a");
    }

    #[test]
    fn bare_base_language_request_considers_all_regions() {
        let voices = vec![voice("in", "Piya", "bn-IN"), voice("bd", "Lekha Bangla", "bn-BD")];
        // "lekha" is a female keyword; it wins over enumeration order.
        assert_eq!(resolve("bn", &voices).unwrap().id, "bd");
    }

    #[test]
    fn empty_snapshot_yields_none() {
        assert!(resolve("en-GB", &[]).is_none());
    }
}
