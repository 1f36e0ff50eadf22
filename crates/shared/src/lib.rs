//! Shared types, errors, and configuration for fxdesk.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes extracted from display labels
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::CurrencyCode;
