//! Structured error types for riploc
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Kernel binary not found: {}", .0.display())]
    KernelNotFound(PathBuf),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("invalid address '{0}' (expected 0x-prefixed hex or decimal)")]
    Malformed(String),

    #[error("address '{0}' does not fit in 64 bits")]
    Overflow(String),
}
