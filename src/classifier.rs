//! Intent classification — greedy, precedence-ordered keyword matching
//! with per-intent structured extraction.
//!
//! Deterministic by construction: no learned models, no scoring. The
//! first intent whose keywords match *and* whose extraction succeeds
//! wins; a failed extraction falls through to the next intent in
//! precedence order. Multi-intent utterances are out of scope.

use chrono::{DateTime, Local};
use tracing::debug;

use crate::extractors::{extract_location, extract_reminder_info, extract_translation_query};
use crate::lexicon::{contains_phrase, intent_keywords, INTENT_PRECEDENCE};
use crate::time::extract_time_context;
use crate::types::{ExtractedIntent, Intent};

/// Classify an utterance and extract its structured arguments.
///
/// Reads the wall clock once and delegates to
/// [`classify_and_extract_at`]. Returns `None` when no intent
/// confirms; never an error, however malformed the input.
pub fn classify_and_extract(text: &str) -> Option<ExtractedIntent> {
    classify_and_extract_at(text, Local::now())
}

/// Classify an utterance against an explicit "now".
///
/// Idempotent: the same text and the same instant always produce the
/// same result.
pub fn classify_and_extract_at(text: &str, now: DateTime<Local>) -> Option<ExtractedIntent> {
    let lowered = text.to_lowercase();

    for intent in INTENT_PRECEDENCE {
        let matched = intent_keywords(intent)
            .iter()
            .any(|keyword| contains_phrase(&lowered, keyword));
        if !matched {
            continue;
        }

        // A keyword was found — attempt the intent-specific extraction.
        // A `None` here means the match was not confident enough and the
        // next intent gets its turn.
        let extracted = match intent {
            // Keyword match alone is sufficient confirmation.
            Intent::GetLocation | Intent::GetMathResult => Some(ExtractedIntent::bare(intent)),
            Intent::GetTranslation => extract_translation_query(text).map(|query| {
                let mut data = ExtractedIntent::bare(intent);
                data.translation_query = Some(query);
                data
            }),
            Intent::CreateReminder => extract_reminder_info(text, now).map(|info| {
                let mut data = ExtractedIntent::bare(intent);
                data.reminder_info = Some(info);
                data
            }),
            // Weather, news and time attach optional arguments; their
            // absence does not block confirmation.
            Intent::GetWeather | Intent::GetNews | Intent::GetTime => {
                let mut data = ExtractedIntent::bare(intent);
                data.location = extract_location(text);
                data.time_context = extract_time_context(&lowered, now);
                Some(data)
            }
        };

        if let Some(data) = extracted {
            debug!(intent = ?data.intent, "utterance classified");
            return Some(data);
        }
    }

    None
}
