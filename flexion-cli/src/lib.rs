//! Flexion CLI library
//!
//! This library provides the command-line interface for the flexion
//! pluralization and singularization engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod locale_source;
pub mod output;
pub mod session;

pub use error::CliError;
