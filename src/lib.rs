//! Augur — a rule-based intent engine for conversational assistants.
//!
//! Classifies an utterance into an intent with keyword matching,
//! extracts its structured arguments (time, location, translation,
//! reminder), and resolves the intent into a single context sentence
//! via pluggable lookups. No learned models; every decision is a rule
//! a reader can follow.
//!
//! See `DESIGN.md` for full architecture documentation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod types;

pub mod classifier;
pub mod extractors;
pub mod lexicon;
pub mod time;

pub mod calculator;
pub mod resolver;

pub use classifier::{classify_and_extract, classify_and_extract_at};
pub use types::{ExtractedIntent, Intent};
