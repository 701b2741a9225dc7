//! Time expression parsing — the multi-strategy temporal resolver.
//!
//! [`parse_time`] tries three strategies in strict order and stops at
//! the first hit:
//!
//! 1. absolute time-of-day keywords ("morning" → 09:00, rolling to
//!    tomorrow when that hour has already passed),
//! 2. standalone relative day words ("tomorrow"/"today"/"yesterday"),
//! 3. left-to-right (number, unit) word pairs ("in 10 minutes",
//!    "3 days ago", "next week").
//!
//! Pure computation over the lowercased utterance; "now" is an
//! explicit parameter so results are deterministic and testable.

use chrono::{DateTime, Datelike, Days, Duration, Local, Timelike};
use tracing::debug;

use crate::lexicon::{self, contains_phrase};
use crate::types::{AbsoluteTime, ParsedTime, Tense, TimeContext, TimeUnit};

/// Time-of-day keywords and the hour they resolve to, checked in order.
const TIME_OF_DAY: &[(&str, u32)] = &[
    ("morning", 9),
    ("noon", 12),
    ("afternoon", 15),
    ("evening", 20),
    ("tonight", 21),
    ("midnight", 0),
];

/// Unit words accepted in (number, unit) pairs, after stripping
/// trailing punctuation and a plural "s".
const TIME_UNIT_WORDS: &[&str] = &[
    "second", "minute", "hour", "day", "week", "month", "year", "pm", "am",
];

fn unit_from_word(word: &str) -> Option<TimeUnit> {
    match word {
        "second" => Some(TimeUnit::Second),
        "minute" => Some(TimeUnit::Minute),
        "hour" | "pm" | "am" => Some(TimeUnit::Hour),
        "day" => Some(TimeUnit::Day),
        "week" => Some(TimeUnit::Week),
        "month" => Some(TimeUnit::Month),
        "year" => Some(TimeUnit::Year),
        _ => None,
    }
}

/// Parse the first time expression in a lowercased utterance.
///
/// Returns `None` when no strategy matches. Deterministic given the
/// same `now`.
pub fn parse_time(lowered: &str, now: DateTime<Local>) -> Option<ParsedTime> {
    // Strategy 1: absolute time-of-day keywords.
    if let Some((keyword, hour)) = TIME_OF_DAY
        .iter()
        .find(|(k, _)| contains_phrase(lowered, k))
    {
        let absolute = resolve_time_of_day(*hour, now)?;
        debug!(keyword, ?absolute, "absolute time-of-day keyword matched");
        return Some(ParsedTime::Absolute(absolute));
    }

    // Strategy 2: standalone relative day words.
    if contains_phrase(lowered, "tomorrow") {
        return Some(ParsedTime::Relative(TimeContext {
            value: 1,
            unit: TimeUnit::Day,
            tense: Tense::Future,
            original_number_text: "tomorrow".to_owned(),
        }));
    }
    if contains_phrase(lowered, "today") {
        return Some(ParsedTime::Relative(TimeContext {
            value: 0,
            unit: TimeUnit::Day,
            tense: Tense::Present,
            original_number_text: "today".to_owned(),
        }));
    }
    if contains_phrase(lowered, "yesterday") {
        return Some(ParsedTime::Relative(TimeContext {
            value: 1,
            unit: TimeUnit::Day,
            tense: Tense::Past,
            original_number_text: "yesterday".to_owned(),
        }));
    }

    // Strategy 3: (number, unit) word pairs, first match wins.
    parse_numeric_pair(lowered)
}

/// Resolve an hour-of-day to a concrete calendar time: today at
/// `hour`:00, or tomorrow if that instant has already passed.
fn resolve_time_of_day(hour: u32, now: DateTime<Local>) -> Option<AbsoluteTime> {
    let today_at = now
        .with_hour(hour)?
        .with_minute(0)?
        .with_second(0)?
        .with_nanosecond(0)?;
    let target = if today_at <= now {
        today_at.checked_add_days(Days::new(1))?
    } else {
        today_at
    };
    Some(AbsoluteTime {
        year: target.year(),
        month: target.month(),
        day_of_month: target.day(),
        hour_of_day: target.hour(),
        minute: target.minute(),
    })
}

fn parse_numeric_pair(lowered: &str) -> Option<ParsedTime> {
    let words: Vec<&str> = lowered.split(' ').collect();

    let mut number: Option<u32> = None;
    let mut number_index: usize = 0;
    let mut unit: Option<TimeUnit> = None;
    let mut tense = Tense::Present;
    let mut number_text = String::new();

    for i in 0..words.len().saturating_sub(1) {
        let current = words.get(i)?;
        let next = words.get(i.saturating_add(1))?;
        let next_clean = next
            .trim_end_matches(['.', ',', '?', '!', ':', ';'])
            .trim_end_matches('s');

        if !TIME_UNIT_WORDS.contains(&next_clean) {
            continue;
        }

        if let Ok(digits) = current.parse::<u32>() {
            number = Some(digits);
            number_index = i;
            number_text = (*current).to_owned();
        } else if let Some(word_value) = lexicon::number_word(current) {
            number = Some(word_value);
            number_index = i;
            number_text = (*current).to_owned();
        } else if *current == "next" {
            number = Some(1);
            number_index = i;
            number_text = "next".to_owned();
            tense = Tense::Future;
        } else if *current == "last" {
            number = Some(1);
            number_index = i;
            number_text = "last".to_owned();
            tense = Tense::Past;
        }

        if number.is_some() {
            unit = unit_from_word(next_clean);
            if unit.is_some() {
                break;
            }
        }
    }

    let value = number?;
    let unit = unit?;
    if number_text.is_empty() {
        return None;
    }

    // Tense disambiguation unless "next"/"last" already fixed it:
    // a leading "in" means future, a trailing "ago" means past,
    // "from now" means future, otherwise present.
    if number_text != "next" && number_text != "last" {
        let before = number_index.checked_sub(1).and_then(|i| words.get(i));
        if before == Some(&"in") {
            tense = Tense::Future;
        } else {
            let after_unit = words.get(number_index.saturating_add(2));
            let two_after_unit = words.get(number_index.saturating_add(3));
            if after_unit.map(|w| w.trim_end_matches(['?', '.', '!'])) == Some("ago") {
                tense = Tense::Past;
            } else if after_unit == Some(&"from")
                && two_after_unit.map(|w| w.trim_end_matches(['?', '.', '!'])) == Some("now")
            {
                tense = Tense::Future;
            }
        }
    }

    Some(ParsedTime::Relative(TimeContext {
        value,
        unit,
        tense,
        original_number_text: number_text,
    }))
}

/// Flatten a parsed time into a relative [`TimeContext`].
///
/// `Relative` results pass through unchanged. `Absolute` results are
/// converted to a forward hour offset (clamped to zero), because the
/// weather and news lookups operate on relative offsets even when the
/// user spoke in absolute terms ("tonight").
pub fn extract_time_context(lowered: &str, now: DateTime<Local>) -> Option<TimeContext> {
    match parse_time(lowered, now)? {
        ParsedTime::Relative(context) => Some(context),
        ParsedTime::Absolute(absolute) => {
            let target = local_datetime(&absolute)?;
            let diff_hours = target.signed_duration_since(now).num_hours().max(0);
            Some(TimeContext {
                value: u32::try_from(diff_hours).unwrap_or(u32::MAX),
                unit: TimeUnit::Hour,
                tense: Tense::Future,
                original_number_text: String::new(),
            })
        }
    }
}

/// Materialize an [`AbsoluteTime`] in the local timezone.
///
/// Returns `None` for calendar combinations the local timezone cannot
/// represent unambiguously (DST gaps).
pub fn local_datetime(absolute: &AbsoluteTime) -> Option<DateTime<Local>> {
    use chrono::TimeZone;
    Local
        .with_ymd_and_hms(
            absolute.year,
            absolute.month,
            absolute.day_of_month,
            absolute.hour_of_day,
            absolute.minute,
            0,
        )
        .single()
}

/// Resolve a [`ParsedTime`] into the instant a reminder should fire.
///
/// Relative contexts add their offset to `now`; the tense is ignored
/// here because a reminder is always scheduled forward. Absolute
/// contexts map their calendar fields through the local timezone.
pub fn trigger_time(parsed: &ParsedTime, now: DateTime<Local>) -> Option<DateTime<Local>> {
    match parsed {
        ParsedTime::Relative(context) => {
            let value = i64::from(context.value);
            match context.unit {
                TimeUnit::Second => now.checked_add_signed(Duration::seconds(value)),
                TimeUnit::Minute => now.checked_add_signed(Duration::minutes(value)),
                TimeUnit::Hour => now.checked_add_signed(Duration::hours(value)),
                TimeUnit::Day => now.checked_add_signed(Duration::days(value)),
                TimeUnit::Week => now.checked_add_signed(Duration::weeks(value)),
                TimeUnit::Month => now.checked_add_months(chrono::Months::new(context.value)),
                TimeUnit::Year => {
                    let months = context.value.checked_mul(12)?;
                    now.checked_add_months(chrono::Months::new(months))
                }
            }
        }
        ParsedTime::Absolute(absolute) => local_datetime(absolute),
    }
}
