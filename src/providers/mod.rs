//! External service integrations.
//!
//! This module contains provider traits and implementations for external services:
//!
//! - [`matching`] - The remote matching service (HTTP)

pub mod matching;
