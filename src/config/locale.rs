//! Locale detection and resolution
//!
//! Resolves the host locale against the set of installed translations so
//! that `appLang` always holds a tag we actually ship. Resolution never
//! fails: anything we cannot parse or match degrades to [`FALLBACK_APP_LANG`].

use std::env;

/// Tag used whenever the host locale cannot be parsed or matched
pub const FALLBACK_APP_LANG: &str = "en-US";

/// Translation files bundled with the application, by canonical tag.
/// Kept sorted so the settings panel can list them without re-sorting.
pub const PROVIDED_TRANSLATIONS: &[&str] = &[
    "de-DE", "en-GB", "en-US", "es-ES", "fi-FI", "fr-FR", "it-IT", "ja-JP", "ko-KR", "nl-NL",
    "pl-PL", "pt-BR", "ro-RO", "ru-RU", "sv-SE", "tr-TR", "uk-UA", "zh-CN", "zh-TW",
];

/// A parsed locale: BCP-47 language subtag plus optional region subtag.
///
/// The parser is deliberately permissive about separators and POSIX
/// decorations (`de_DE.UTF-8@euro` parses the same as `de-DE`) and
/// deliberately strict about the language subtag itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub language: String,
    pub region: Option<String>,
}

impl Locale {
    /// Parse a locale tag. Returns `None` when the language subtag is
    /// missing or malformed; an unusable region subtag is dropped, not fatal.
    pub fn parse(tag: &str) -> Option<Locale> {
        // Strip POSIX codeset/modifier suffixes before splitting subtags.
        let tag = tag.trim().split(['.', '@']).next().unwrap_or("");
        let mut subtags = tag.split(['-', '_']);

        let language = subtags.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }
        let language = language.to_ascii_lowercase();

        // Skip script subtags (e.g. "Hant" in zh-Hant-TW) and take the first
        // subtag shaped like a region: two letters or three digits.
        let region = subtags.find_map(|subtag| {
            if subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
                Some(subtag.to_ascii_uppercase())
            } else if subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()) {
                Some(subtag.to_string())
            } else {
                None
            }
        });

        Some(Locale { language, region })
    }

    /// Canonical `language-REGION` form (or bare language without a region).
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }
}

/// Resolve a requested locale against the installed translation tags.
///
/// Policy: exact tag match first, then first installed translation sharing
/// the language subtag, then [`FALLBACK_APP_LANG`]. The returned string is
/// always the installed tag's canonical spelling.
pub fn resolve(requested: Option<&str>, installed: &[&str]) -> String {
    let wanted = match requested.and_then(Locale::parse) {
        Some(locale) => locale,
        None => return FALLBACK_APP_LANG.to_string(),
    };

    let wanted_tag = wanted.tag();
    if let Some(hit) = installed
        .iter()
        .find(|tag| tag.eq_ignore_ascii_case(&wanted_tag))
    {
        return hit.to_string();
    }

    if let Some(hit) = installed
        .iter()
        .find(|tag| Locale::parse(tag).is_some_and(|locale| locale.language == wanted.language))
    {
        return hit.to_string();
    }

    FALLBACK_APP_LANG.to_string()
}

/// Read the host locale from the environment, in POSIX precedence order.
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .find_map(|var| env::var(var).ok().filter(|value| !value.is_empty()))
}
