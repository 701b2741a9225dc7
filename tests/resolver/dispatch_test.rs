//! Tests for intent dispatch through the resolver, with recording
//! stubs standing in for the network-backed collaborators.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use augur::calculator::SentenceCalculator;
use augur::resolver::lookups::{
    GeocodeLookup, LocationService, NewsLookup, ReminderScheduler, TimeLookup, TranslationLookup,
    WeatherLookup,
};
use augur::resolver::{Collaborators, ContextResolver, NewsRotation};
use augur::types::{Coordinates, GeoInfo, TimeContext};
use chrono::{DateTime, Duration, Local, TimeZone};

fn noon() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 8, 24, 12, 0, 0)
        .single()
        .expect("fixed test instant should exist")
}

// ---------------------------------------------------------------------------
// Stub collaborators
// ---------------------------------------------------------------------------

/// Inert defaults: no position, no data, no translations.
struct Inert;

#[async_trait]
impl LocationService for Inert {
    async fn current_coordinates(&self) -> Option<Coordinates> {
        None
    }
}

#[async_trait]
impl WeatherLookup for Inert {
    async fn forecast(
        &self,
        _lat: f64,
        _lon: f64,
        place: &str,
        _time: Option<&TimeContext>,
    ) -> String {
        format!("forecast for {place}")
    }

    async fn historical(&self, _lat: f64, _lon: f64, place: &str, time: &TimeContext) -> String {
        format!("historical for {place}, {} {:?}s back", time.value, time.unit)
    }
}

#[async_trait]
impl NewsLookup for Inert {
    async fn top_headlines(&self, _country_code: &str) -> Vec<String> {
        Vec::new()
    }
}

#[async_trait]
impl GeocodeLookup for Inert {
    async fn forward(&self, _place: &str) -> Option<GeoInfo> {
        None
    }

    async fn reverse(&self, _lat: f64, _lon: f64) -> Option<String> {
        None
    }
}

#[async_trait]
impl TranslationLookup for Inert {
    async fn translate(&self, _phrase: &str, _language_code: &str) -> Option<String> {
        None
    }
}

#[async_trait]
impl TimeLookup for Inert {
    async fn local_time(&self, location: Option<&str>) -> String {
        match location {
            Some(place) => format!("time in {place}"),
            None => "time here".to_owned(),
        }
    }
}

#[async_trait]
impl ReminderScheduler for Inert {
    async fn schedule(&self, _task: &str, _trigger_at_epoch_millis: i64) -> String {
        "scheduled".to_owned()
    }
}

fn inert_collaborators() -> Collaborators {
    Collaborators {
        location: Arc::new(Inert),
        weather: Arc::new(Inert),
        news: Arc::new(Inert),
        geocode: Arc::new(Inert),
        translation: Arc::new(Inert),
        time: Arc::new(Inert),
        calculator: Arc::new(SentenceCalculator),
        scheduler: Arc::new(Inert),
    }
}

fn resolver_with(collaborators: Collaborators) -> ContextResolver {
    ContextResolver::new(collaborators, NewsRotation::default(), "us")
}

/// Geocoder that knows exactly one place.
struct OnePlaceGeocode {
    name: &'static str,
    info: GeoInfo,
}

#[async_trait]
impl GeocodeLookup for OnePlaceGeocode {
    async fn forward(&self, place: &str) -> Option<GeoInfo> {
        (place == self.name).then(|| self.info.clone())
    }

    async fn reverse(&self, _lat: f64, _lon: f64) -> Option<String> {
        Some("1 Example Street".to_owned())
    }
}

struct FixedHeadlines(Vec<&'static str>);

#[async_trait]
impl NewsLookup for FixedHeadlines {
    async fn top_headlines(&self, _country_code: &str) -> Vec<String> {
        self.0.iter().map(|h| (*h).to_owned()).collect()
    }
}

struct FixedTranslation(&'static str);

#[async_trait]
impl TranslationLookup for FixedTranslation {
    async fn translate(&self, _phrase: &str, language_code: &str) -> Option<String> {
        assert_eq!(language_code, "fr");
        Some(self.0.to_owned())
    }
}

#[derive(Default)]
struct RecordingScheduler {
    calls: Mutex<Vec<(String, i64)>>,
}

#[async_trait]
impl ReminderScheduler for RecordingScheduler {
    async fn schedule(&self, task: &str, trigger_at_epoch_millis: i64) -> String {
        self.calls
            .lock()
            .expect("scheduler mutex should not be poisoned")
            .push((task.to_owned(), trigger_at_epoch_millis));
        format!("Very well. I will remind you to: {task}.")
    }
}

// ---------------------------------------------------------------------------
// Dispatch tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn math_forwards_the_original_prompt() {
    let mut resolver = resolver_with(inert_collaborators());
    let sentence = resolver
        .context_for("how much is 2+2", noon())
        .await
        .expect("should resolve");
    assert_eq!(sentence, "The result of '2+2' is 4.");
}

#[tokio::test]
async fn past_tense_weather_takes_the_historical_path() {
    let mut collaborators = inert_collaborators();
    collaborators.geocode = Arc::new(OnePlaceGeocode {
        name: "Oslo",
        info: GeoInfo {
            lat: 59.91,
            lon: 10.75,
            timezone: "Europe/Oslo".to_owned(),
            country_code: "no".to_owned(),
        },
    });
    let mut resolver = resolver_with(collaborators);

    let sentence = resolver
        .context_for("what was the weather in Oslo 3 days ago", noon())
        .await
        .expect("should resolve");
    assert_eq!(sentence, "historical for Oslo, 3 Days back");
}

#[tokio::test]
async fn unknown_place_gets_an_apology() {
    let mut resolver = resolver_with(inert_collaborators());
    let sentence = resolver
        .context_for("what is the weather in Atlantis", noon())
        .await
        .expect("should resolve");
    assert_eq!(sentence, "I am unfamiliar with a place called 'Atlantis'.");
}

#[tokio::test]
async fn weather_without_position_apologizes() {
    let mut resolver = resolver_with(inert_collaborators());
    let sentence = resolver
        .context_for("is it sunny outside", noon())
        .await
        .expect("should resolve");
    assert_eq!(
        sentence,
        "I cannot see where you are, so I cannot tell you the weather."
    );
}

#[tokio::test]
async fn news_rotation_advances_between_requests() {
    let mut collaborators = inert_collaborators();
    collaborators.news = Arc::new(FixedHeadlines(vec!["bb", "a", "ccc"]));
    let mut resolver = resolver_with(collaborators);

    // Shortest headline first, then the rotation advances.
    let first = resolver
        .context_for("give me the news", noon())
        .await
        .expect("should resolve");
    let second = resolver
        .context_for("give me the news", noon())
        .await
        .expect("should resolve");
    assert_eq!(first, "a");
    assert_eq!(second, "bb");
}

#[tokio::test]
async fn empty_headlines_become_a_sentence() {
    let mut resolver = resolver_with(inert_collaborators());
    let sentence = resolver
        .context_for("any news today", noon())
        .await
        .expect("should resolve");
    assert_eq!(sentence, "There are no notable happenings to report.");
}

#[tokio::test]
async fn translation_is_phrased_as_a_sentence() {
    let mut collaborators = inert_collaborators();
    collaborators.translation = Arc::new(FixedTranslation("bonjour"));
    let mut resolver = resolver_with(collaborators);

    let sentence = resolver
        .context_for("how do you say hello in french", noon())
        .await
        .expect("should resolve");
    assert_eq!(sentence, "'hello' translated to french is 'bonjour'.");
}

#[tokio::test]
async fn reminder_schedules_at_the_parsed_offset() {
    let scheduler = Arc::new(RecordingScheduler::default());
    let mut collaborators = inert_collaborators();
    collaborators.scheduler = Arc::clone(&scheduler) as Arc<dyn ReminderScheduler>;
    let mut resolver = resolver_with(collaborators);

    let now = noon();
    let sentence = resolver
        .context_for("remind me to buy milk in 2 hours", now)
        .await
        .expect("should resolve");
    assert_eq!(sentence, "Very well. I will remind you to: Buy milk.");

    let expected = now
        .checked_add_signed(Duration::hours(2))
        .expect("offset should fit")
        .timestamp_millis();
    let calls = scheduler
        .calls
        .lock()
        .expect("scheduler mutex should not be poisoned");
    assert_eq!(calls.as_slice(), &[("Buy milk".to_owned(), expected)]);
}

#[tokio::test]
async fn time_intent_passes_the_location_through() {
    let mut resolver = resolver_with(inert_collaborators());
    let sentence = resolver
        .context_for("what time is it in Tokyo", noon())
        .await
        .expect("should resolve");
    assert_eq!(sentence, "time in Tokyo");
}

#[tokio::test]
async fn location_intent_reverse_geocodes_when_positioned() {
    struct Here;

    #[async_trait]
    impl LocationService for Here {
        async fn current_coordinates(&self) -> Option<Coordinates> {
            Some(Coordinates { lat: 1.0, lon: 2.0 })
        }
    }

    let mut collaborators = inert_collaborators();
    collaborators.location = Arc::new(Here);
    collaborators.geocode = Arc::new(OnePlaceGeocode {
        name: "unused",
        info: GeoInfo {
            lat: 0.0,
            lon: 0.0,
            timezone: String::new(),
            country_code: "us".to_owned(),
        },
    });
    let mut resolver = resolver_with(collaborators);

    let sentence = resolver
        .context_for("where am i", noon())
        .await
        .expect("should resolve");
    assert_eq!(sentence, "You are in or near: 1 Example Street");
}

#[tokio::test]
async fn unclassified_utterances_resolve_to_nothing() {
    let mut resolver = resolver_with(inert_collaborators());
    assert_eq!(resolver.context_for("hello there", noon()).await, None);
}
