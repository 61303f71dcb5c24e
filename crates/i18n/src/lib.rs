use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

mod catalog;

use catalog::catalog;

/// Languages with a message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English. Default and authoritative: every UI key has an entry.
    En,
    /// Portuguese.
    Pt,
}

impl Language {
    /// Canonical language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Resolves a free-form locale identifier to a supported language.
    ///
    /// A coarse two-way classifier, not locale negotiation: any identifier
    /// starting with `pt` (case-insensitive) resolves to Portuguese and
    /// everything else, malformed input included, resolves to English.
    /// Absent input defaults to `en_US`.
    pub fn from_locale(locale: Option<&str>) -> Self {
        let value = locale.unwrap_or("en_US").to_lowercase();
        if value.starts_with("pt") {
            Self::Pt
        } else {
            Self::En
        }
    }
}

// The pattern is a literal that always compiles.
#[allow(clippy::expect_used)]
fn placeholder_pattern() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("valid placeholder pattern"))
}

/// Replaces `{identifier}` placeholders with matching parameter values.
///
/// Substitution is a single pass: inserted values are not rescanned.
/// Placeholders without a matching key stay verbatim, and an empty
/// parameter list returns the template unchanged.
pub fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    placeholder_pattern()
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let key = &caps[1];
            match params.iter().find(|(name, _)| *name == key) {
                Some((_, value)) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Looks up the message for `key` in the language resolved from `locale`.
///
/// Falls back to the English entry, then to the literal key itself, so a
/// lookup never produces empty output.
pub fn tr(locale: Option<&str>, key: &str) -> String {
    tr_with(locale, key, &[])
}

/// [`tr`] with `{placeholder}` parameters.
pub fn tr_with(locale: Option<&str>, key: &str, params: &[(&str, String)]) -> String {
    let language = Language::from_locale(locale);
    let template = match catalog(language).get(key) {
        Some(text) => *text,
        None => match catalog(Language::En).get(key) {
            Some(text) => {
                debug!(key, language = language.code(), "missing translation, using English");
                *text
            }
            None => {
                debug!(key, "unknown message key, echoing key");
                key
            }
        },
    };

    interpolate(template, params)
}
