//! End-to-end extraction tests: classified intents must carry the
//! structured arguments the resolver needs.

use augur::classify_and_extract_at;
use augur::types::{Intent, ParsedTime, Tense, TimeUnit};
use chrono::{DateTime, Local, TimeZone};

fn at(hour: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 8, 24, hour, 0, 0)
        .single()
        .expect("fixed test instant should exist")
}

#[test]
fn weather_carries_location_and_relative_time() {
    let data = classify_and_extract_at("will it rain in Amsterdam tomorrow", at(10))
        .expect("should classify");
    assert_eq!(data.intent, Intent::GetWeather);
    assert_eq!(data.location.as_deref(), Some("Amsterdam"));

    let context = data.time_context.expect("should carry a time context");
    assert_eq!((context.value, context.unit), (1, TimeUnit::Day));
    assert_eq!(context.tense, Tense::Future);
    assert_eq!(context.original_number_text, "tomorrow");
}

#[test]
fn weather_location_skips_articles() {
    let data = classify_and_extract_at("what is the weather in the Netherlands", at(10))
        .expect("should classify");
    assert_eq!(data.intent, Intent::GetWeather);
    assert_eq!(data.location.as_deref(), Some("Netherlands"));
}

#[test]
fn absolute_time_words_become_hour_offsets() {
    // "tonight" resolves to 21:00; from 10:00 that is 11 hours ahead.
    let data =
        classify_and_extract_at("what's the weather tonight", at(10)).expect("should classify");
    let context = data.time_context.expect("should carry a time context");
    assert_eq!((context.value, context.unit), (11, TimeUnit::Hour));
    assert_eq!(context.tense, Tense::Future);
}

#[test]
fn reminder_carries_task_and_absolute_time() {
    let data = classify_and_extract_at("remind me at noon to feed the cat", at(8))
        .expect("should classify");
    assert_eq!(data.intent, Intent::CreateReminder);

    let info = data.reminder_info.expect("should carry reminder info");
    assert_eq!(info.task, "Feed the cat");
    let ParsedTime::Absolute(absolute) = info.parsed_time else {
        panic!("expected absolute time");
    };
    assert_eq!(absolute.hour_of_day, 12);
    assert_eq!(absolute.day_of_month, 24);
}

#[test]
fn translation_extracts_quoted_phrase() {
    let data = classify_and_extract_at("what is 'thank you' in japanese", at(10))
        .expect("should classify");
    assert_eq!(data.intent, Intent::GetTranslation);
    let query = data.translation_query.expect("should carry a query");
    assert_eq!(query.phrase, "thank you");
    assert_eq!(query.target_language, "japanese");
}

#[test]
fn time_intent_carries_location() {
    let data =
        classify_and_extract_at("what time is it in Tokyo", at(10)).expect("should classify");
    assert_eq!(data.intent, Intent::GetTime);
    assert_eq!(data.location.as_deref(), Some("Tokyo"));
    assert_eq!(data.time_context, None);
}

#[test]
fn multiword_place_names_survive() {
    let data = classify_and_extract_at("is it sunny in Rio de Janeiro today", at(10))
        .expect("should classify");
    assert_eq!(data.intent, Intent::GetWeather);
    assert_eq!(data.location.as_deref(), Some("Rio de Janeiro"));
}
