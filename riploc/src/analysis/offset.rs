//! Address arithmetic derived from the crash RIP

/// Byte offset of `target` from the kernel's link base
///
/// Absent when no base is known or the target lies below it.
#[must_use]
pub fn file_offset(base: Option<u64>, target: u64) -> Option<u64> {
    base.and_then(|base| target.checked_sub(base))
}

/// Address range for a suggested disassembly around the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisasmWindow {
    pub start: u64,
    pub stop: u64,
}

impl DisasmWindow {
    /// `radius` bytes either side of `target`, clamped to the address space
    #[must_use]
    pub fn around(target: u64, radius: u64) -> Self {
        Self { start: target.saturating_sub(radius), stop: target.saturating_add(radius) }
    }
}
