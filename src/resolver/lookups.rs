//! Collaborator interfaces the resolver dispatches into.
//!
//! Every network-backed lookup lives behind one of these traits; the
//! host wires in real clients (weather, news, geocoding, translation)
//! or stubs in tests. Lookups are expected to return a user-facing
//! apology sentence on failure rather than an error; the engine has
//! no retry policy and forwards whatever sentence comes back.

use async_trait::async_trait;

use crate::types::{Coordinates, GeoInfo, TimeContext};

/// Device position source (GPS or equivalent).
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Current device coordinates, or `None` when permission or signal
    /// is unavailable.
    async fn current_coordinates(&self) -> Option<Coordinates>;
}

/// Weather data source.
///
/// `place` is the human-readable label for the sentence ("New York",
/// or "your current location" for GPS-based queries).
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    /// Forecast sentence for a position, optionally shifted by a
    /// relative time context (present or future tense).
    async fn forecast(
        &self,
        lat: f64,
        lon: f64,
        place: &str,
        time: Option<&TimeContext>,
    ) -> String;

    /// Historical weather sentence for a position at a past offset.
    async fn historical(&self, lat: f64, lon: f64, place: &str, time: &TimeContext) -> String;
}

/// Headline source. Returns candidate headline texts for a country;
/// the resolver picks one via its rotation counter.
#[async_trait]
pub trait NewsLookup: Send + Sync {
    /// Top headline candidates for a lowercase ISO country code.
    /// Empty when nothing is available.
    async fn top_headlines(&self, country_code: &str) -> Vec<String>;
}

/// Place name ↔ coordinates resolution.
#[async_trait]
pub trait GeocodeLookup: Send + Sync {
    /// Resolve a place name to coordinates, timezone and country.
    async fn forward(&self, place: &str) -> Option<GeoInfo>;

    /// Resolve coordinates to a human-readable address string.
    async fn reverse(&self, lat: f64, lon: f64) -> Option<String>;
}

/// Phrase translation into a target language.
#[async_trait]
pub trait TranslationLookup: Send + Sync {
    /// Translate an English phrase into the language given by ISO
    /// 639-1 code. `None` when the service cannot translate it.
    async fn translate(&self, phrase: &str, language_code: &str) -> Option<String>;
}

/// Wall-clock sentences, optionally for a named place's timezone.
#[async_trait]
pub trait TimeLookup: Send + Sync {
    /// A sentence giving the current time; `location` of `None` means
    /// here and now.
    async fn local_time(&self, location: Option<&str>) -> String;
}

/// Arithmetic over the raw prompt text.
///
/// The expression is sanitized by the implementation itself, which is
/// why the resolver forwards the original prompt unmodified.
pub trait Calculator: Send + Sync {
    /// Evaluate free text into a sentence-formatted result (or a
    /// sentence-formatted apology).
    fn evaluate(&self, raw_expression: &str) -> String;
}

/// Reminder scheduling action.
#[async_trait]
pub trait ReminderScheduler: Send + Sync {
    /// Persist and schedule a reminder; returns the confirmation
    /// sentence shown to the user.
    async fn schedule(&self, task: &str, trigger_at_epoch_millis: i64) -> String;
}
