//! Locale tag simplification
//!
//! Accepts `language[-_territory[.codeset][@modifier]]` and reduces it to
//! `language` or `language_territory`. Anything else passes through as-is.

use std::sync::OnceLock;

use regex::Regex;

static LOCALE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn locale_pattern() -> &'static Regex {
    LOCALE_PATTERN.get_or_init(|| {
        Regex::new(r"^(?i)([a-z]{2})(?:[-_]([a-z]{2})(?:[.:]([\w-]+))?(?:@(\w+))?)?$")
            .expect("locale pattern is valid")
    })
}

/// Reduce a locale tag to `language` or `language_territory`, lowercased
///
/// ```
/// use flexion_core::simplify_locale;
///
/// assert_eq!(simplify_locale("fr_FR.UTF-8@latin"), "fr_fr");
/// assert_eq!(simplify_locale("EN"), "en");
/// assert_eq!(simplify_locale("not-a-locale"), "not-a-locale");
/// ```
pub fn simplify_locale(locale: &str) -> String {
    let Some(caps) = locale_pattern().captures(locale) else {
        return locale.to_string();
    };

    let language = caps[1].to_lowercase();
    match caps.get(2) {
        Some(territory) => format!("{language}_{}", territory.as_str().to_lowercase()),
        None => language,
    }
}

/// Most-specific-first lookup candidates for `locale`
///
/// The simplified tag and its bare language, deduplicated, longest first.
pub fn fallback_candidates(locale: &str) -> Vec<String> {
    let simplified = simplify_locale(locale);
    let language = simplified
        .split('_')
        .next()
        .unwrap_or_default()
        .to_string();

    let mut candidates = vec![simplified];
    if !candidates.contains(&language) {
        candidates.push(language);
    }
    candidates.sort_by(|a, b| b.len().cmp(&a.len()));
    candidates
}
