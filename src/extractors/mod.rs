//! Structured argument extractors — deterministic parsers that turn a
//! matched intent keyword into typed payloads.
//!
//! Each extractor is a pure function over the utterance:
//! - [`location`]:    preposition + capitalized-span place names
//! - [`translation`]: target language + phrase to translate
//! - [`reminder`]:    task isolation via time-block and trigger-keyword
//!   removal
//!
//! Extractors return `None` rather than guessing; the classifier falls
//! through to the next intent on a failed extraction.

pub mod location;
pub mod reminder;
pub mod translation;

pub use location::extract_location;
pub use reminder::extract_reminder_info;
pub use translation::extract_translation_query;
