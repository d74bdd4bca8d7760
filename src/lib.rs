//! Titlescan - Disc scan report reader
//!
//! This library crate exposes the CLI's building blocks for integration testing.

pub mod config;
pub mod input;
pub mod report;
