//! Domain types shared by every stage of a lookup

use super::errors::AddressParseError;
use std::fmt;

/// Backend that produced a symbol record
///
/// `Nm` is the primary backend, `Objdump` the fallback. The tag is carried
/// through to the report and never influences symbol selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolSource {
    Nm,
    Objdump,
}

impl fmt::Display for SymbolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nm => f.write_str("nm"),
            Self::Objdump => f.write_str("objdump"),
        }
    }
}

/// One entry from a kernel's symbol table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub address: u64,
    /// Absent when the backend does not report a size
    pub size: Option<u64>,
    pub source: SymbolSource,
}

impl Symbol {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: u64,
        size: Option<u64>,
        source: SymbolSource,
    ) -> Self {
        Self { name: name.into(), address, size, source }
    }
}

/// Parse an address given as `0x`-prefixed hexadecimal or plain decimal
///
/// Surrounding whitespace is ignored and the prefix is case-insensitive,
/// so `0XFFFF800000001234` and ` 4096 ` are both accepted.
///
/// # Errors
/// Returns an error if the digits are not valid for the detected radix or the
/// value does not fit in 64 bits.
pub fn parse_address(input: &str) -> Result<u64, AddressParseError> {
    let trimmed = input.trim();
    let (digits, radix) = match trimmed.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => (&trimmed[2..], 16),
        _ => (trimmed, 10),
    };

    // from_str_radix tolerates a leading '+', which is not an address
    if digits.is_empty() || digits.starts_with('+') {
        return Err(AddressParseError::Malformed(input.to_string()));
    }

    u64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => AddressParseError::Overflow(input.to_string()),
        _ => AddressParseError::Malformed(input.to_string()),
    })
}
