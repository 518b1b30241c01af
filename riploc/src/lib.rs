//! # riploc - HimuOS BSOD RIP Locator
//!
//! When the HimuOS kernel hits a fatal error its BSOD screen prints the
//! faulting instruction pointer and little else. `riploc` maps that number
//! back to the kernel image: the enclosing symbol, the offset into it, the
//! next symbol, and the byte offset from the kernel's link base.
//!
//! ## Pipeline
//!
//! ```text
//!   RIP ──▶ preflight ──▶ linker_script ──▶ symbolization ──▶ analysis ──▶ report
//!           (kernel?)     (KERNEL_BASE)     (nm → objdump)    (nearest,
//!                                                               offset)
//! ```
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line argument parsing
//! - [`domain`]: Symbols, address parsing and error types
//! - [`preflight`]: Kernel existence check and stripped-image warning
//! - [`linker_script`]: `KERNEL_BASE` extraction
//! - [`symbolization`]: Symbol tables from external dumpers, with fallback
//! - [`analysis`]: Nearest-symbol selection and offset arithmetic
//! - [`lookup`]: Wires the stages together
//! - [`report`]: Text output and suggested follow-up commands
//!
//! ## Typical Usage
//!
//! ```bash
//! # From the HimuOS source tree, after a BSOD showing RIP=0xFFFF800000001234
//! riploc 0xFFFF800000001234
//!
//! # Out-of-tree kernel and LLVM tools
//! riploc 0xFFFF800000001234 --kernel out/kernel.bin --nm llvm-nm --objdump llvm-objdump
//! ```

pub mod analysis;
pub mod cli;
pub mod domain;
pub mod linker_script;
pub mod lookup;
pub mod preflight;
pub mod report;
pub mod symbolization;
