//! Core library for docpulse.
//!
//! This crate implements the content-analysis engine: a pure, deterministic
//! transformation from a block of extracted document text into counts, a
//! readability score, an engagement score, and an ordered list of
//! improvement suggestions.
//!
//! # Modules
//!
//! - [`analysis`] - The `analyze` entry point composing the full pipeline
//! - [`text`] - Word / sentence / paragraph splitting and feature detection
//! - [`metrics`] - Derived counts, reading time, syllable approximation
//! - [`readability`] - 0–100 readability scoring
//! - [`suggestions`] - Threshold-rule suggestion engine
//! - [`engagement`] - 0–100 engagement scoring
//! - [`report`] - The immutable [`AnalysisReport`] value object
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use docpulse_core::analyze;
//!
//! let report = analyze("Short and sweet. Is it readable?");
//! assert!(report.readability_score <= 100);
//! assert!(!report.suggestions.is_empty());
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod config;

pub mod engagement;

pub mod error;

pub mod metrics;

pub mod readability;

pub mod report;

pub mod suggestions;

pub mod text;

pub use analysis::{analyze, analyze_bytes};

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};

pub use report::{AnalysisReport, Suggestion, SuggestionKind};

/// Default cap on input size, in bytes (10 MiB).
///
/// Matches the size guidance the upload transport gives callers. The engine
/// itself has no hard limit; this guards the CLI against oversized inputs.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;
