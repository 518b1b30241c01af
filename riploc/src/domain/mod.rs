//! Domain model for riploc
//!
//! This module contains core domain types and errors that provide:
//! - Explicit presence/absence for optional facts (sizes, bases, offsets)
//! - Self-documenting function signatures
//! - Structured error handling

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use types::{parse_address, Symbol, SymbolSource};

pub use errors::{AddressParseError, LocatorError};
