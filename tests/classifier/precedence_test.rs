//! Tests for precedence-ordered intent selection and fallthrough.

use augur::classify_and_extract_at;
use augur::types::Intent;
use chrono::{DateTime, Local, TimeZone};

fn noon() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 8, 24, 12, 0, 0)
        .single()
        .expect("fixed test instant should exist")
}

#[test]
fn reminder_outranks_weather() {
    let data = classify_and_extract_at("remind me to check the weather in 2 hours", noon())
        .expect("should classify");
    assert_eq!(data.intent, Intent::CreateReminder);
    let info = data.reminder_info.expect("should carry reminder info");
    assert_eq!(info.task, "Check the weather");
}

#[test]
fn reminder_with_day_word_outranks_weather() {
    let data = classify_and_extract_at("remind me to check the forecast tomorrow", noon())
        .expect("should classify");
    assert_eq!(data.intent, Intent::CreateReminder);
    let info = data.reminder_info.expect("should carry reminder info");
    assert_eq!(info.task, "Check the forecast");
}

#[test]
fn translation_outranks_math() {
    let data = classify_and_extract_at("translate 'one plus one' to french", noon())
        .expect("should classify");
    assert_eq!(data.intent, Intent::GetTranslation);
    let query = data.translation_query.expect("should carry a query");
    assert_eq!(query.phrase, "one plus one");
    assert_eq!(query.target_language, "french");
}

#[test]
fn failed_translation_falls_through_to_math() {
    // "what is" matches the translation keywords but no supported
    // language confirms, so "divided by" gets its turn.
    let data =
        classify_and_extract_at("what is 12 divided by 4", noon()).expect("should classify");
    assert_eq!(data.intent, Intent::GetMathResult);
}

#[test]
fn failed_reminder_falls_through_to_time() {
    let data =
        classify_and_extract_at("remind me what time it is", noon()).expect("should classify");
    assert_eq!(data.intent, Intent::GetTime);
}

#[test]
fn location_intent_matches_whole_phrase() {
    let data = classify_and_extract_at("where am i right now", noon()).expect("should classify");
    assert_eq!(data.intent, Intent::GetLocation);
}

#[test]
fn time_comes_before_weather() {
    // "hour" and "outside" both occur; time wins by precedence.
    let data = classify_and_extract_at("what hour is it outside", noon())
        .expect("should classify");
    assert_eq!(data.intent, Intent::GetTime);
}

#[test]
fn unrelated_chatter_yields_nothing() {
    assert_eq!(classify_and_extract_at("hello there", noon()), None);
    assert_eq!(
        classify_and_extract_at("tell me a story about dragons", noon()),
        None
    );
}
