//! Tests for the multi-strategy time parser through the public API.

use augur::time::{extract_time_context, parse_time, trigger_time};
use augur::types::{ParsedTime, Tense, TimeContext, TimeUnit};
use chrono::{DateTime, Datelike, Local, TimeZone};

fn at(hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 8, 24, hour, minute, 0)
        .single()
        .expect("fixed test instant should exist")
}

fn relative(parsed: Option<ParsedTime>) -> TimeContext {
    match parsed {
        Some(ParsedTime::Relative(context)) => context,
        other => panic!("expected relative time, got {other:?}"),
    }
}

#[test]
fn number_words_pair_with_units() {
    let context = relative(parse_time("call me in five minutes", at(10, 0)));
    assert_eq!((context.value, context.unit), (5, TimeUnit::Minute));
    assert_eq!(context.tense, Tense::Future);
    assert_eq!(context.original_number_text, "five");
}

#[test]
fn articles_count_as_one() {
    let context = relative(parse_time("in an hour", at(10, 0)));
    assert_eq!((context.value, context.unit), (1, TimeUnit::Hour));

    let context = relative(parse_time("a week from now", at(10, 0)));
    assert_eq!((context.value, context.unit), (1, TimeUnit::Week));
    assert_eq!(context.tense, Tense::Future);
}

#[test]
fn plural_units_are_normalized() {
    let context = relative(parse_time("2 weeks ago", at(10, 0)));
    assert_eq!((context.value, context.unit), (2, TimeUnit::Week));
    assert_eq!(context.tense, Tense::Past);
}

#[test]
fn meridiem_words_count_as_hours() {
    let context = relative(parse_time("at 5 pm", at(10, 0)));
    assert_eq!((context.value, context.unit), (5, TimeUnit::Hour));
}

#[test]
fn trailing_punctuation_does_not_break_units() {
    let context = relative(parse_time("can you wake me in 20 minutes?", at(10, 0)));
    assert_eq!((context.value, context.unit), (20, TimeUnit::Minute));
}

#[test]
fn first_pair_wins_left_to_right() {
    let context = relative(parse_time("in 2 hours or 3 days", at(10, 0)));
    assert_eq!((context.value, context.unit), (2, TimeUnit::Hour));
}

#[test]
fn time_of_day_is_absolute_and_rolls_forward() {
    let Some(ParsedTime::Absolute(morning)) = parse_time("tomorrow morning", at(22, 0)) else {
        panic!("expected absolute time");
    };
    // "morning" is an absolute keyword and outranks "tomorrow"; past
    // 09:00 it rolls to the next day on its own.
    assert_eq!(morning.hour_of_day, 9);
    assert_eq!(morning.day_of_month, 25);
}

#[test]
fn midnight_resolves_to_hour_zero() {
    let Some(ParsedTime::Absolute(midnight)) = parse_time("at midnight", at(10, 0)) else {
        panic!("expected absolute time");
    };
    assert_eq!(midnight.hour_of_day, 0);
    // 00:00 today already passed, so it lands tomorrow.
    assert_eq!(midnight.day_of_month, 25);
}

#[test]
fn context_from_absolute_is_clamped_forward() {
    // "noon" at 14:00 rolls to tomorrow noon: 22 hours ahead.
    let context = extract_time_context("lunch at noon", at(14, 0)).expect("should extract");
    assert_eq!((context.value, context.unit), (22, TimeUnit::Hour));
    assert_eq!(context.tense, Tense::Future);
}

#[test]
fn trigger_time_handles_month_units() {
    let parsed = ParsedTime::Relative(TimeContext {
        value: 2,
        unit: TimeUnit::Month,
        tense: Tense::Future,
        original_number_text: "2".to_owned(),
    });
    let fired = trigger_time(&parsed, at(10, 0)).expect("should resolve");
    assert_eq!((fired.month(), fired.day()), (10, 24));
}

#[test]
fn trigger_time_handles_year_units() {
    let parsed = ParsedTime::Relative(TimeContext {
        value: 1,
        unit: TimeUnit::Year,
        tense: Tense::Future,
        original_number_text: "1".to_owned(),
    });
    let fired = trigger_time(&parsed, at(10, 0)).expect("should resolve");
    assert_eq!(fired.year(), 2027);
}
