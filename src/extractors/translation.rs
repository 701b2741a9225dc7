//! Translation query extraction.
//!
//! Confirms a supported target language ("in french" / "to french"),
//! then tries three phrase patterns in order: a quoted span, the
//! "how do you say … in …" form, and the "what is '…' in …" form.
//! Language found but no phrase → `None`, so the classifier falls
//! through to the next intent.

use regex::Regex;
use tracing::debug;

use crate::lexicon::SUPPORTED_LANGUAGES;
use crate::types::TranslationQuery;

/// Extract the phrase to translate and its target language.
///
/// Returns `None` when no supported language keyword is present or no
/// phrase pattern matches.
pub fn extract_translation_query(original_text: &str) -> Option<TranslationQuery> {
    let lowered = original_text.to_lowercase();

    let language = SUPPORTED_LANGUAGES.iter().map(|(name, _)| *name).find(|name| {
        lowered.contains(&format!("in {name}")) || lowered.contains(&format!("to {name}"))
    })?;

    let phrase = quoted_phrase(original_text)
        .or_else(|| say_phrase(original_text, language))
        .or_else(|| what_is_phrase(original_text, language))?;

    let phrase = phrase.trim_end_matches(['?', '.', '!']);
    if phrase.trim().is_empty() {
        return None;
    }

    debug!(language, phrase, "translation query extracted");
    Some(TranslationQuery {
        phrase: phrase.to_owned(),
        target_language: language.to_owned(),
    })
}

/// Pattern 1: any span between quote characters.
fn quoted_phrase(text: &str) -> Option<String> {
    let Ok(re) = Regex::new(r#"['"](.*?)['"]"#) else {
        return None;
    };
    re.captures(text).map(|c| c.get(1).map_or(String::new(), |m| m.as_str().to_owned()))
}

/// Pattern 2: "how do you say PHRASE in <language>".
fn say_phrase(text: &str, language: &str) -> Option<String> {
    let Ok(re) = Regex::new(&format!(r"(?i)how do you say (.*?) in {language}")) else {
        return None;
    };
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Pattern 3: "what is 'PHRASE' in <language>".
fn what_is_phrase(text: &str, language: &str) -> Option<String> {
    let Ok(re) = Regex::new(&format!(r#"(?i)what is ['"](.*?)['"] in {language}"#)) else {
        return None;
    };
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
}
