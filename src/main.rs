#![allow(missing_docs)]

//! Augur CLI — classify utterances, inspect time parsing, and resolve
//! intents with offline collaborators.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;

use augur::config::EngineConfig;
use augur::resolver::lookups::{
    GeocodeLookup, LocationService, NewsLookup, ReminderScheduler, TimeLookup, TranslationLookup,
    WeatherLookup,
};
use augur::resolver::{Collaborators, ContextResolver, NewsRotation};
use augur::types::{Coordinates, GeoInfo, TimeContext};
use augur::{calculator::SentenceCalculator, classify_and_extract_at, logging, time};

#[derive(Parser)]
#[command(name = "augur", version, about = "Rule-based intent extraction engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify an utterance and print the extracted intent as JSON.
    Classify {
        /// The utterance to classify.
        text: String,
    },
    /// Parse the time expression in an utterance and print it as JSON.
    Time {
        /// The utterance containing a time expression.
        text: String,
    },
    /// Classify an utterance and resolve it into a context sentence.
    ///
    /// Runs offline: math, time and reminders resolve locally; lookups
    /// needing the network answer with an apology sentence.
    Resolve {
        /// The utterance to resolve.
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = EngineConfig::load().context("failed to load configuration")?;
    logging::init_cli(&config.log_level);

    let cli = Cli::parse();
    let now = Local::now();
    debug!(%now, "evaluating against current wall clock");

    match cli.command {
        Command::Classify { text } => match classify_and_extract_at(&text, now) {
            Some(extracted) => {
                let json = serde_json::to_string_pretty(&extracted)
                    .context("failed to serialize extracted intent")?;
                println!("{json}");
            }
            None => println!("null"),
        },
        Command::Time { text } => match time::parse_time(&text.to_lowercase(), now) {
            Some(parsed) => {
                let json = serde_json::to_string_pretty(&parsed)
                    .context("failed to serialize parsed time")?;
                println!("{json}");
            }
            None => println!("null"),
        },
        Command::Resolve { text } => {
            let mut resolver = ContextResolver::new(
                offline_collaborators(),
                NewsRotation::default(),
                config.default_country,
            );
            match resolver.context_for(&text, now).await {
                Some(sentence) => println!("{sentence}"),
                None => println!("(no intent confirmed)"),
            }
        }
    }

    Ok(())
}

/// Collaborators that work without network access or device sensors.
fn offline_collaborators() -> Collaborators {
    Collaborators {
        location: Arc::new(Offline),
        weather: Arc::new(Offline),
        news: Arc::new(Offline),
        geocode: Arc::new(Offline),
        translation: Arc::new(Offline),
        time: Arc::new(LocalClock),
        calculator: Arc::new(SentenceCalculator),
        scheduler: Arc::new(EchoScheduler),
    }
}

struct Offline;

#[async_trait]
impl LocationService for Offline {
    async fn current_coordinates(&self) -> Option<Coordinates> {
        None
    }
}

#[async_trait]
impl WeatherLookup for Offline {
    async fn forecast(
        &self,
        _lat: f64,
        _lon: f64,
        place: &str,
        _time: Option<&TimeContext>,
    ) -> String {
        format!("I cannot reach the weather service to report on {place}.")
    }

    async fn historical(&self, _lat: f64, _lon: f64, place: &str, _time: &TimeContext) -> String {
        format!("I cannot reach the weather service to report on {place}.")
    }
}

#[async_trait]
impl NewsLookup for Offline {
    async fn top_headlines(&self, _country_code: &str) -> Vec<String> {
        Vec::new()
    }
}

#[async_trait]
impl GeocodeLookup for Offline {
    async fn forward(&self, _place: &str) -> Option<GeoInfo> {
        None
    }

    async fn reverse(&self, _lat: f64, _lon: f64) -> Option<String> {
        None
    }
}

#[async_trait]
impl TranslationLookup for Offline {
    async fn translate(&self, _phrase: &str, _language_code: &str) -> Option<String> {
        None
    }
}

struct LocalClock;

#[async_trait]
impl TimeLookup for LocalClock {
    async fn local_time(&self, location: Option<&str>) -> String {
        match location {
            Some(place) => format!("I cannot see the clocks of {place} from here."),
            None => format!("The time is {}.", Local::now().format("%H:%M")),
        }
    }
}

struct EchoScheduler;

#[async_trait]
impl ReminderScheduler for EchoScheduler {
    async fn schedule(&self, task: &str, trigger_at_epoch_millis: i64) -> String {
        debug!(trigger_at_epoch_millis, "reminder accepted (not persisted)");
        format!("Very well. I will remind you to: {task}.")
    }
}
