//! # Symbol Table Acquisition
//!
//! A kernel crash report only gives us a raw RIP such as
//! `0xFFFF800000001234`. To name the function it belongs to we need the
//! kernel's symbol table, which we never parse ourselves: an external dumper
//! prints it as text and we parse that text.
//!
//! ## Backends
//!
//! - **`nm`** (primary): `nm -n --print-size --defined-only kernel.bin`
//!   ```text
//!   ffff800000001000 000000000000004a T kmain
//!   ```
//! - **`objdump`** (fallback): `objdump -t -w kernel.bin`
//!   ```text
//!   ffff800000001000 g     F .text  000000000000004a kmain
//!   ```
//!
//! `objdump` is only consulted when `nm` fails or prints nothing usable.
//!
//! ## Module Structure
//!
//! - **`runner`**: runs a tool and captures status/stdout/stderr
//! - **`providers`**: per-backend command lines and output parsers
//! - **`chain`**: the ordered fallback between providers

pub mod chain;
pub mod providers;
pub mod runner;

pub use chain::ProviderChain;
pub use providers::{
    parse_nm_output, parse_objdump_output, NmProvider, ObjdumpProvider, SymbolProvider,
};
pub use runner::{ProcessRunner, ToolOutput, ToolRunner};
