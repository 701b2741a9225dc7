//! Static trigger-phrase tables and word-boundary-aware matching.
//!
//! The classifier works on lowercased text, so every phrase here is
//! lowercase. Matching is hand-tokenized rather than regex-based: the
//! boundary rules mirror `\b` semantics without recompiling patterns
//! per call.

use crate::types::Intent;

/// Precedence order for classification — most specific first.
///
/// Order matters: "remind me to check the forecast tomorrow" must hit
/// `CreateReminder` before `GetWeather` ever gets a look.
pub const INTENT_PRECEDENCE: [Intent; 7] = [
    Intent::CreateReminder,
    Intent::GetTranslation,
    Intent::GetMathResult,
    Intent::GetLocation,
    Intent::GetNews,
    Intent::GetTime,
    Intent::GetWeather,
];

const TIME_KEYWORDS: &[&str] = &[
    "time",
    "hour",
    "clock",
    "time is it",
    "the hour",
    "current time",
    "what's the ticker",
    "how late is it",
    "is it noon yet",
    "is it midnight",
];

const WEATHER_KEYWORDS: &[&str] = &[
    "weather",
    "forecast",
    "temperature",
    "sunny",
    "sun",
    "sunshine",
    "clear",
    "rainy",
    "rain",
    "drizzle",
    "showers",
    "cloudy",
    "clouds",
    "overcast",
    "stormy",
    "storm",
    "thunderstorm",
    "windy",
    "wind",
    "breeze",
    "snowy",
    "snow",
    "frost",
    "foggy",
    "fog",
    "humid",
    "humidity",
    "hot",
    "warm",
    "heat",
    "heatwave",
    "cold",
    "chilly",
    "freezing",
    "outside",
    "out",
    "sky",
    "air",
    "atmosphere",
    "sunset",
    "sunrise",
];

const NEWS_KEYWORDS: &[&str] = &[
    "news",
    "headlines",
    "the news",
    "current events",
    "what's happening in",
    "what is happening in",
    "latest events",
    "recent events",
    "top stories",
    "breaking news",
    "tell me about the news",
    "give me the news",
    "can i have the news",
    "update me on",
    "latest happenings",
    "recent happenings",
];

const LOCATION_KEYWORDS: &[&str] = &[
    "where am i",
    "where are we",
    "what is my current location",
    "what's my current location",
    "my location",
    "where is this",
    "what is this place",
    "what's this place",
    "name of this place",
    "where are we now",
    "tell me my location",
    "identify my location",
    "current position",
    "provide coordinates",
    "what city am i in",
    "what city are we in",
    "which city is this",
    "what country am i in",
    "i'm lost",
    "i am lost",
    "am i near",
];

const MATH_KEYWORDS: &[&str] = &[
    "plus",
    "minus",
    "times",
    "divided by",
    "multiplied by",
    "+",
    "-",
    "*",
    "x",
    "/",
    "calculate",
    "sum of",
    "difference between",
    "how much is",
    "how many is",
];

const TRANSLATION_KEYWORDS: &[&str] = &[
    "translate",
    "say in",
    // Ambiguous on its own — extraction must confirm a language.
    "what is",
    "what's",
    "how do you say",
    "how to say",
    "in french",
    "in spanish",
    "in german",
    "in japanese",
    "in italian",
    "in chinese",
    "to french",
    "to spanish",
    "to german",
    "to japanese",
    "to italian",
    "to chinese",
];

const REMINDER_KEYWORDS: &[&str] = &["set a reminder", "add a reminder", "remind me"];

/// Trigger phrases for an intent. Order within a list is irrelevant,
/// except for `CreateReminder` where the reminder extractor removes
/// the first phrase that matches.
pub fn intent_keywords(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::GetTime => TIME_KEYWORDS,
        Intent::GetWeather => WEATHER_KEYWORDS,
        Intent::GetNews => NEWS_KEYWORDS,
        Intent::GetLocation => LOCATION_KEYWORDS,
        Intent::GetMathResult => MATH_KEYWORDS,
        Intent::GetTranslation => TRANSLATION_KEYWORDS,
        Intent::CreateReminder => REMINDER_KEYWORDS,
    }
}

/// Map a lowercase number word to its value ("a"/"an"/"one" → 1 … "ten" → 10).
pub fn number_word(word: &str) -> Option<u32> {
    match word {
        "a" | "an" | "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        "eight" => Some(8),
        "nine" => Some(9),
        "ten" => Some(10),
        _ => None,
    }
}

/// Prepositions that may introduce a place name.
pub const LOCATION_PREPOSITIONS: &[&str] = &["in", "at", "for", "on", "from"];

/// Lowercase words that may continue a multi-word proper noun without
/// being capitalized themselves ("Rio de Janeiro", "Isle of Man").
pub const LOCATION_CONNECTORS: &[&str] = &["de", "del", "la", "las", "es", "of", "the"];

/// Articles skipped between a preposition and the place name.
pub const ARTICLES: &[&str] = &["the", "a", "an"];

/// Supported translation targets: lowercase English name and the ISO
/// 639-1 code the external translation lookup expects.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("french", "fr"),
    ("spanish", "es"),
    ("german", "de"),
    ("japanese", "ja"),
    ("italian", "it"),
    ("chinese", "zh"),
];

/// ISO 639-1 code for a supported language name (case-insensitive).
pub fn language_code(name: &str) -> Option<&'static str> {
    let lowered = name.to_lowercase();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(n, _)| *n == lowered)
        .map(|(_, code)| *code)
}

// ---------------------------------------------------------------------------
// Whole-word matching
// ---------------------------------------------------------------------------

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word boundary between two adjacent characters, `None` meaning the
/// string edge. Mirrors regex `\b`: a boundary exists iff exactly one
/// side is a word character.
fn is_boundary(left: Option<char>, right: Option<char>) -> bool {
    left.is_some_and(is_word_char) != right.is_some_and(is_word_char)
}

/// Find `phrase` in `haystack` as a whole word/phrase, searching from
/// byte offset `from`. Returns the byte range of the match.
pub fn find_phrase_from(haystack: &str, phrase: &str, from: usize) -> Option<(usize, usize)> {
    if phrase.is_empty() {
        return None;
    }
    let first = phrase.chars().next();
    let last = phrase.chars().next_back();
    let mut search_from = from;
    loop {
        let window = haystack.get(search_from..)?;
        let rel = window.find(phrase)?;
        let start = search_from.saturating_add(rel);
        let end = start.saturating_add(phrase.len());
        let before = haystack.get(..start).and_then(|s| s.chars().next_back());
        let after = haystack.get(end..).and_then(|s| s.chars().next());
        if is_boundary(before, first) && is_boundary(last, after) {
            return Some((start, end));
        }
        let step = haystack
            .get(start..)
            .and_then(|s| s.chars().next())
            .map_or(1, char::len_utf8);
        search_from = start.saturating_add(step);
    }
}

/// Find `phrase` anywhere in `haystack` as a whole word/phrase.
pub fn find_phrase(haystack: &str, phrase: &str) -> Option<(usize, usize)> {
    find_phrase_from(haystack, phrase, 0)
}

/// Whether `phrase` occurs in `haystack` as a whole word/phrase.
pub fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    find_phrase(haystack, phrase).is_some()
}
