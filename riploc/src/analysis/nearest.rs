//! Nearest-symbol selection
//!
//! The symbol table comes straight from a backend and is not assumed to be
//! sorted, so selection is a single O(n) pass rather than a binary search.
//! Kernel symbol tables are at most a few tens of thousands of entries.

use crate::domain::Symbol;

/// Symbols bracketing a target address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestSymbols<'a> {
    /// Greatest address <= target
    pub before: Option<&'a Symbol>,
    /// Smallest address > target
    pub after: Option<&'a Symbol>,
}

impl NearestSymbols<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.before.is_none() && self.after.is_none()
    }
}

/// Find the symbols immediately at-or-below and above `target`
///
/// When several symbols share the winning address (aliases), the first one
/// in scan order is kept: a later candidate only replaces the current pick
/// if its address is strictly closer.
#[must_use]
pub fn find_nearest(target: u64, symbols: &[Symbol]) -> NearestSymbols<'_> {
    let mut nearest = NearestSymbols::default();

    for sym in symbols {
        if sym.address <= target {
            if nearest.before.is_none_or(|b| sym.address > b.address) {
                nearest.before = Some(sym);
            }
        } else if nearest.after.is_none_or(|a| sym.address < a.address) {
            nearest.after = Some(sym);
        }
    }

    nearest
}
