//! Context resolution — dispatch a classified intent to the right
//! external lookup and produce the single context sentence injected
//! into the downstream model prompt.
//!
//! This module is argument marshalling and branch selection; number
//! and date formatting stay in the collaborators. The only state the
//! resolver owns is the news rotation counter, passed in explicitly by
//! the host rather than hidden in a static.

pub mod lookups;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::classifier::classify_and_extract_at;
use crate::lexicon;
use crate::time::trigger_time;
use crate::types::{ExtractedIntent, Intent, Tense};

use lookups::{
    Calculator, GeocodeLookup, LocationService, NewsLookup, ReminderScheduler, TimeLookup,
    TranslationLookup, WeatherLookup,
};

/// Label used for GPS-based weather sentences where no place name was
/// spoken.
const CURRENT_LOCATION_LABEL: &str = "your current location";

/// Rotation counter for headline selection, keyed by lowercase country
/// code. Owned by the host and handed to [`ContextResolver::new`] so
/// repeated news requests cycle through headlines instead of repeating
/// the first one.
#[derive(Debug, Default)]
pub struct NewsRotation {
    index_by_country: HashMap<String, usize>,
}

impl NewsRotation {
    /// Next headline index for `country` given `len` candidates, then
    /// advance the counter. `None` when there are no candidates.
    pub fn next_index(&mut self, country: &str, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let counter = self
            .index_by_country
            .entry(country.to_lowercase())
            .or_insert(0);
        let index = (*counter).checked_rem(len)?;
        *counter = counter.saturating_add(1);
        Some(index)
    }
}

/// The external lookups a resolver dispatches into.
pub struct Collaborators {
    /// Device position source.
    pub location: Arc<dyn LocationService>,
    /// Weather data source.
    pub weather: Arc<dyn WeatherLookup>,
    /// Headline source.
    pub news: Arc<dyn NewsLookup>,
    /// Place-name geocoding.
    pub geocode: Arc<dyn GeocodeLookup>,
    /// Phrase translation.
    pub translation: Arc<dyn TranslationLookup>,
    /// Wall-clock sentences.
    pub time: Arc<dyn TimeLookup>,
    /// Arithmetic over raw prompts.
    pub calculator: Arc<dyn Calculator>,
    /// Reminder scheduling.
    pub scheduler: Arc<dyn ReminderScheduler>,
}

/// Dispatches classified intents to collaborators and formats the
/// resulting context sentence.
pub struct ContextResolver {
    collaborators: Collaborators,
    news_rotation: NewsRotation,
    default_country: String,
}

impl ContextResolver {
    /// Build a resolver around a set of collaborators.
    ///
    /// `default_country` is the lowercase ISO country code used for
    /// news when no location is spoken and none can be geocoded.
    pub fn new(
        collaborators: Collaborators,
        news_rotation: NewsRotation,
        default_country: impl Into<String>,
    ) -> Self {
        Self {
            collaborators,
            news_rotation,
            default_country: default_country.into(),
        }
    }

    /// Classify an utterance and resolve it into a context sentence.
    ///
    /// `None` means no intent confirmed; the caller proceeds without
    /// context injection.
    pub async fn context_for(
        &mut self,
        utterance: &str,
        now: DateTime<Local>,
    ) -> Option<String> {
        let extracted = classify_and_extract_at(utterance, now)?;
        Some(self.resolve(&extracted, utterance, now).await)
    }

    /// Resolve an already-classified intent into a context sentence.
    ///
    /// `prompt` is the original utterance; the math branch forwards it
    /// unmodified because the calculator does its own sanitization.
    pub async fn resolve(
        &mut self,
        extracted: &ExtractedIntent,
        prompt: &str,
        now: DateTime<Local>,
    ) -> String {
        debug!(intent = ?extracted.intent, "resolving context");
        match extracted.intent {
            Intent::GetWeather => self.resolve_weather(extracted).await,
            Intent::GetTime => {
                self.collaborators
                    .time
                    .local_time(extracted.location.as_deref())
                    .await
            }
            Intent::GetNews => self.resolve_news(extracted).await,
            Intent::GetLocation => self.resolve_device_location().await,
            Intent::GetMathResult => self.collaborators.calculator.evaluate(prompt),
            Intent::GetTranslation => self.resolve_translation(extracted).await,
            Intent::CreateReminder => self.resolve_reminder(extracted, now).await,
        }
    }

    /// Weather: spoken location goes through forward geocoding, else
    /// fall back to device coordinates. Past tense selects the
    /// historical path.
    async fn resolve_weather(&self, extracted: &ExtractedIntent) -> String {
        let time = extracted.time_context.as_ref();
        let is_past = time.map(|t| t.tense) == Some(Tense::Past);

        if let Some(place) = extracted.location.as_deref() {
            let Some(geo) = self.collaborators.geocode.forward(place).await else {
                return format!("I am unfamiliar with a place called '{place}'.");
            };
            return match (is_past, time) {
                (true, Some(context)) => {
                    self.collaborators
                        .weather
                        .historical(geo.lat, geo.lon, place, context)
                        .await
                }
                _ => {
                    self.collaborators
                        .weather
                        .forecast(geo.lat, geo.lon, place, time)
                        .await
                }
            };
        }

        let Some(coords) = self.collaborators.location.current_coordinates().await else {
            return "I cannot see where you are, so I cannot tell you the weather.".to_owned();
        };
        match (is_past, time) {
            (true, Some(context)) => {
                self.collaborators
                    .weather
                    .historical(coords.lat, coords.lon, CURRENT_LOCATION_LABEL, context)
                    .await
            }
            _ => {
                self.collaborators
                    .weather
                    .forecast(coords.lat, coords.lon, CURRENT_LOCATION_LABEL, time)
                    .await
            }
        }
    }

    /// News: a spoken location is a country hint via geocoding;
    /// otherwise the configured default country. Headlines are sorted
    /// shortest-first and rotated per country.
    async fn resolve_news(&mut self, extracted: &ExtractedIntent) -> String {
        let mut country = self.default_country.clone();
        if let Some(place) = extracted.location.as_deref() {
            match self.collaborators.geocode.forward(place).await {
                Some(geo) => country = geo.country_code,
                None => debug!(place, "could not geocode news location, using default country"),
            }
        }

        let mut headlines = self.collaborators.news.top_headlines(&country).await;
        headlines.sort_by_key(String::len);

        match self.news_rotation.next_index(&country, headlines.len()) {
            Some(index) => headlines
                .get(index)
                .cloned()
                .unwrap_or_else(|| "There are no notable happenings to report.".to_owned()),
            None => "There are no notable happenings to report.".to_owned(),
        }
    }

    /// Where-am-I: device coordinates reverse-geocoded to an address.
    async fn resolve_device_location(&self) -> String {
        let Some(coords) = self.collaborators.location.current_coordinates().await else {
            return "I cannot determine your location.".to_owned();
        };
        match self
            .collaborators
            .geocode
            .reverse(coords.lat, coords.lon)
            .await
        {
            Some(address) => format!("You are in or near: {address}"),
            None => "I cannot determine your precise location.".to_owned(),
        }
    }

    async fn resolve_translation(&self, extracted: &ExtractedIntent) -> String {
        let Some(query) = extracted.translation_query.as_ref() else {
            return "Your request to translate is unclear. State the phrase and the language."
                .to_owned();
        };
        let Some(code) = lexicon::language_code(&query.target_language) else {
            return format!(
                "I cannot translate into '{}'; it is not a language I know.",
                query.target_language
            );
        };
        match self
            .collaborators
            .translation
            .translate(&query.phrase, code)
            .await
        {
            Some(translated) => format!(
                "'{}' translated to {} is '{}'.",
                query.phrase, query.target_language, translated
            ),
            None => "I am unable to translate that phrase.".to_owned(),
        }
    }

    /// Reminder: resolve the trigger instant and hand task + epoch to
    /// the scheduler; its confirmation sentence is forwarded verbatim.
    async fn resolve_reminder(&self, extracted: &ExtractedIntent, now: DateTime<Local>) -> String {
        let Some(info) = extracted.reminder_info.as_ref() else {
            return "Your reminder is unclear. Please state the task and the time.".to_owned();
        };
        let Some(trigger_at) = trigger_time(&info.parsed_time, now) else {
            warn!(task = %info.task, "could not resolve reminder trigger time");
            return "The time you specified for the reminder is invalid.".to_owned();
        };
        self.collaborators
            .scheduler
            .schedule(&info.task, trigger_at.timestamp_millis())
            .await
    }
}
