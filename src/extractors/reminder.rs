//! Reminder extraction: isolate the task text by subtracting the time
//! span and the trigger keyword from the sentence.
//!
//! Three sub-extractions, all required:
//! 1. parse the time expression,
//! 2. reconstruct the literal "time block" substring the parser
//!    consumed (so it can be removed),
//! 3. find the trigger keyword ("remind me", "set a reminder", …).
//!
//! Any failure to locate a span aborts the extraction — a
//! miscalculated span would corrupt the task text, so the policy is
//! fail-closed. The residual text is trimmed, stripped of leading
//! connector words, and capitalized.

use chrono::{DateTime, Local};
use tracing::debug;

use crate::lexicon::{self, contains_phrase, find_phrase, find_phrase_from};
use crate::time::parse_time;
use crate::types::{Intent, ParsedTime, ReminderInfo};

/// Time-of-day keywords recognised by the absolute time strategy,
/// re-checked here to rebuild the matched block.
const TIME_OF_DAY_WORDS: &[&str] = &[
    "morning",
    "noon",
    "afternoon",
    "evening",
    "tonight",
    "midnight",
];

/// Prepositions folded into a relative time block ("in 2 hours").
const TIME_PREPOSITIONS: &[&str] = &["in", "at", "on"];

/// Connector words stripped once each from the front of the task.
const TASK_PREFIXES: &[&str] = &[",", ":", "to", "for", "about", "that"];

/// Extract a reminder's task text and parsed time from an utterance.
///
/// Returns `None` when no time expression is found, when a matched
/// span cannot be located in the sentence, or when removing the spans
/// leaves no task text.
pub fn extract_reminder_info(text: &str, now: DateTime<Local>) -> Option<ReminderInfo> {
    let lowered = text.to_lowercase();

    let Some(parsed_time) = parse_time(&lowered, now) else {
        debug!("no time expression found, cannot create reminder");
        return None;
    };

    let Some(time_block) = reconstruct_time_block(text, &lowered, &parsed_time) else {
        debug!("failed to reconstruct time block, cannot create reminder");
        return None;
    };

    let keyword_block = lexicon::intent_keywords(Intent::CreateReminder)
        .iter()
        .find_map(|keyword| {
            let (start, end) = find_phrase(&lowered, keyword)?;
            text.get(start..end)
        })?;

    debug!(time_block, keyword_block, "isolating reminder task");

    let task = remove_ignore_case(text, keyword_block);
    let task = remove_ignore_case(&task, &time_block);

    let mut task = task.trim();
    for prefix in TASK_PREFIXES {
        task = task.strip_prefix(prefix).unwrap_or(task);
    }
    let task = task.trim().trim_end_matches(['.', ',', '?', '!']).trim();

    if task.is_empty() {
        debug!("task is blank after removing blocks, cannot create reminder");
        return None;
    }

    Some(ReminderInfo {
        task: capitalize_first(task),
        parsed_time,
    })
}

/// Rebuild the literal substring of the original text that the time
/// parser consumed.
fn reconstruct_time_block(
    text: &str,
    lowered: &str,
    parsed_time: &ParsedTime,
) -> Option<String> {
    match parsed_time {
        ParsedTime::Absolute(_) => {
            // Re-find which time-of-day keyword matched and fold in a
            // preceding "this" or "at".
            let keyword = TIME_OF_DAY_WORDS
                .iter()
                .find(|k| contains_phrase(lowered, k))?;
            let with_this = format!("this {keyword}");
            let with_at = format!("at {keyword}");
            if contains_phrase(lowered, &with_this) {
                Some(with_this)
            } else if contains_phrase(lowered, &with_at) {
                Some(with_at)
            } else {
                Some((*keyword).to_owned())
            }
        }
        ParsedTime::Relative(context) => {
            let number_text = context.original_number_text.as_str();

            // Standalone day words carry no unit word; the word itself
            // is the whole time block.
            if matches!(number_text, "tomorrow" | "today" | "yesterday") {
                let (start, end) = find_phrase(lowered, number_text)?;
                return text.get(start..end).map(str::to_owned);
            }

            let time_start = lowered.rfind(number_text)?;

            let words: Vec<&str> = lowered.split(' ').collect();
            let number_word_index = words.iter().rposition(|w| *w == number_text)?;
            let unit_word = words
                .get(number_word_index.saturating_add(1))?
                .trim_end_matches(['.', ',', '?', '!', ':', ';']);

            let preposition = number_word_index
                .checked_sub(1)
                .and_then(|i| words.get(i))
                .copied();
            let block_start = match preposition {
                Some(p) if TIME_PREPOSITIONS.contains(&p) => {
                    lowered.rfind(&format!("{p} {number_text}"))?
                }
                _ => time_start,
            };

            let (_, unit_end) = find_phrase_from(lowered, unit_word, time_start)?;
            text.get(block_start..unit_end).map(str::to_owned)
        }
    }
}

/// Remove every case-insensitive occurrence of `pattern` from `text`.
fn remove_ignore_case(text: &str, pattern: &str) -> String {
    if pattern.is_empty() {
        return text.to_owned();
    }
    let pattern_lowered = pattern.to_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let rest_lowered = rest.to_lowercase();
        let Some(pos) = rest_lowered.find(&pattern_lowered) else {
            out.push_str(rest);
            return out;
        };
        // Byte offsets only transfer when lowercasing preserved the
        // prefix length (always true for ASCII input).
        let Some((before, after_start)) = rest
            .get(..pos)
            .zip(Some(pos.saturating_add(pattern_lowered.len())))
        else {
            out.push_str(rest);
            return out;
        };
        let Some(after) = rest.get(after_start..) else {
            out.push_str(rest);
            return out;
        };
        out.push_str(before);
        rest = after;
    }
}

fn capitalize_first(task: &str) -> String {
    let mut chars = task.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            out
        }
        _ => task.to_owned(),
    }
}
