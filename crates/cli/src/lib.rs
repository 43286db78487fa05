//! CLI utilities for astrorank tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Ranked result lines
//! - Score, count and duration formatting

#![warn(missing_docs)]

pub mod output;
