//! Application settings and configuration types.
//!
//! Settings are built from defaults and overridden per invocation by CLI
//! flags; there is no settings file.

use serde::{Deserialize, Serialize};

use crate::embedding::{DEFAULT_DIMENSION, DEFAULT_TOP_K};

/// Top-level application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Remote matching service configuration.
    pub api: ApiSettings,
    /// Ranking configuration.
    pub matching: MatchSettings,
    /// Local encoder configuration.
    pub encoder: EncoderSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            matching: MatchSettings::default(),
            encoder: EncoderSettings::default(),
        }
    }
}

/// Remote matching service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the matching service.
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            // Historical spelling; this is the deployed hostname.
            base_url: "https://condidate-test-be.onrender.com".to_string(),
        }
    }
}

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSettings {
    /// How many matches a ranking returns.
    pub top_k: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Local encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderSettings {
    /// Embedding dimension. Embeddings of different dimensions never
    /// compare, so changing this orphans any previously stored vectors.
    pub dimension: usize,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }
}
