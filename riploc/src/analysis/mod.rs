//! Analysis of a crash address against the kernel image
//!
//! Pure logic with no I/O: symbol selection and offset arithmetic.

pub mod nearest;
pub mod offset;

pub use nearest::{find_nearest, NearestSymbols};
pub use offset::{file_offset, DisasmWindow};
