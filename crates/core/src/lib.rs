//! Conversion logic for fxdesk.
//!
//! This crate contains pure logic with ZERO file or network dependencies.
//! The rate table, the conversion engine and the collaborators that sit
//! around it (input parsing, display formatting, remembered preferences)
//! live here.
//!
//! # Modules
//!
//! - `currency` - Rate table, conversion engine, search and display
//! - `input` - Parsing raw form text into conversion requests
//! - `preferences` - Last-used inputs remembered across sessions

pub mod currency;
pub mod input;
pub mod preferences;

pub use currency::{
    ConversionEngine, ConversionError, ConversionRequest, ConversionResult, Direction,
    ExchangeRateTable,
};
