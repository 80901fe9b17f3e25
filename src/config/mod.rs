//! Configuration and settings management.
//!
//! This module provides application settings types. Defaults mirror the
//! deployed matching service; the CLI overrides individual fields.

mod settings;

pub use settings::{ApiSettings, EncoderSettings, MatchSettings, Settings};
