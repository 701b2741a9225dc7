//! Core data model for intent extraction.
//!
//! Every value here is constructed fresh per parse call and never
//! mutated afterwards. No identity, no lifecycle.

use serde::{Deserialize, Serialize};

/// The classified purpose of a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Current time, optionally for a named place.
    GetTime,
    /// Weather forecast or history.
    GetWeather,
    /// Top news headlines.
    GetNews,
    /// Where the device currently is.
    GetLocation,
    /// Arithmetic over the raw utterance.
    GetMathResult,
    /// Phrase translation into a supported language.
    GetTranslation,
    /// Schedule a reminder with a task and a time.
    CreateReminder,
}

/// Unit of a relative time expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Seconds.
    Second,
    /// Minutes.
    Minute,
    /// Hours (also covers trailing "am"/"pm").
    Hour,
    /// Days.
    Day,
    /// Weeks.
    Week,
    /// Months.
    Month,
    /// Years.
    Year,
}

/// Temporal direction of a time expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tense {
    /// Before now ("3 days ago").
    Past,
    /// Now ("today").
    Present,
    /// After now ("in 10 minutes").
    Future,
}

/// A relative time expression: value, unit and direction.
///
/// `original_number_text` is the literal substring that triggered the
/// numeric match (a digit string, a number word, or "next"/"last").
/// The reminder extractor needs it to re-locate the time span inside
/// the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeContext {
    /// Magnitude of the offset. Zero is legal ("today").
    pub value: u32,
    /// Unit of the offset.
    pub unit: TimeUnit,
    /// Direction relative to now.
    pub tense: Tense,
    /// Literal substring that produced `value`.
    pub original_number_text: String,
}

/// A fully resolved calendar point with no ambiguity remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsoluteTime {
    /// Calendar year.
    pub year: i32,
    /// Month, 1–12.
    pub month: u32,
    /// Day of month, 1-based.
    pub day_of_month: u32,
    /// Hour of day, 0–23.
    pub hour_of_day: u32,
    /// Minute, 0–59.
    pub minute: u32,
}

/// The two shapes a parsed time expression can take.
///
/// Downstream consumers match exhaustively: weather converts
/// `Absolute` into a relative hour offset, the reminder scheduler
/// resolves both into a trigger instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedTime {
    /// An offset from now ("in 5 minutes", "tomorrow").
    Relative(TimeContext),
    /// A concrete calendar time ("tonight" resolved to 21:00 today).
    Absolute(AbsoluteTime),
}

/// A phrase to translate and the target language (lowercase English
/// name, e.g. "french").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationQuery {
    /// The phrase to translate.
    pub phrase: String,
    /// Lowercase English language name.
    pub target_language: String,
}

/// A reminder task with its resolved time expression.
///
/// `task` is guaranteed non-blank by the extractor's contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderInfo {
    /// Human-readable task text, first character capitalized.
    pub task: String,
    /// When the reminder should fire.
    pub parsed_time: ParsedTime,
}

/// The single classification result for an utterance.
///
/// At most one of the optional payload fields is populated, depending
/// on `intent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIntent {
    /// The classified intent.
    pub intent: Intent,
    /// Extracted place name, if any (weather/news/time intents).
    pub location: Option<String>,
    /// Extracted relative time, if any (weather/news/time intents).
    pub time_context: Option<TimeContext>,
    /// Translation payload (`GetTranslation` only).
    pub translation_query: Option<TranslationQuery>,
    /// Reminder payload (`CreateReminder` only).
    pub reminder_info: Option<ReminderInfo>,
}

impl ExtractedIntent {
    /// An extraction carrying no payload beyond the intent itself.
    pub fn bare(intent: Intent) -> Self {
        Self {
            intent,
            location: None,
            time_context: None,
            translation_query: None,
            reminder_info: None,
        }
    }
}

/// A device position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
}

/// Forward-geocoding result for a place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoInfo {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// IANA timezone identifier (e.g. "Europe/Paris").
    pub timezone: String,
    /// Lowercase ISO 3166-1 alpha-2 country code.
    pub country_code: String,
}
