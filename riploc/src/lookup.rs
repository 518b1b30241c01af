//! One complete RIP lookup
//!
//! ```text
//! check kernel ──▶ KERNEL_BASE ──▶ nm / objdump ──▶ nearest symbols
//!                      │                                  │
//!                      └────────▶ file offset ◀───────────┘
//! ```

use crate::analysis::{file_offset, find_nearest, DisasmWindow, NearestSymbols};
use crate::domain::{LocatorError, Symbol};
use crate::linker_script::{find_kernel_base, KernelBase};
use crate::preflight::{check_kernel_exists, check_symbol_table};
use crate::symbolization::{ProviderChain, ToolRunner};
use log::info;
use std::path::PathBuf;

/// Default kernel image, relative to the HimuOS source tree
pub const DEFAULT_KERNEL: &str = "build/kernel/bin/kernel.bin";

/// Default linker script holding `KERNEL_BASE`
pub const DEFAULT_LD: &str = "himuos.ld";

/// Default radius of the suggested disassembly window, in bytes
pub const DEFAULT_AROUND: u64 = 0x40;

/// Everything a lookup needs, independent of how it was configured
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub rip: u64,
    pub kernel: PathBuf,
    pub ld: PathBuf,
    pub nm: String,
    pub objdump: String,
    pub around: u64,
    pub demangle: bool,
}

impl LookupConfig {
    /// Configuration with the stock paths and tools for `rip`
    #[must_use]
    pub fn new(rip: u64) -> Self {
        Self {
            rip,
            kernel: PathBuf::from(DEFAULT_KERNEL),
            ld: PathBuf::from(DEFAULT_LD),
            nm: "nm".to_string(),
            objdump: "objdump".to_string(),
            around: DEFAULT_AROUND,
            demangle: false,
        }
    }
}

/// Result of a lookup; owns the symbol table the selection borrows from
#[derive(Debug, Clone)]
pub struct Lookup {
    pub rip: u64,
    pub kernel: PathBuf,
    pub kernel_base: Option<KernelBase>,
    pub file_offset: Option<u64>,
    pub symbols: Vec<Symbol>,
    pub window: DisasmWindow,
}

impl Lookup {
    /// Symbols bracketing the RIP
    #[must_use]
    pub fn nearest(&self) -> NearestSymbols<'_> {
        find_nearest(self.rip, &self.symbols)
    }
}

/// Run the lookup pipeline
///
/// # Errors
/// Fails only when the kernel binary does not exist; in that case no backend
/// is invoked. Every other problem degrades to an absent value in the result.
pub fn run_lookup(config: &LookupConfig, runner: &dyn ToolRunner) -> Result<Lookup, LocatorError> {
    check_kernel_exists(&config.kernel)?;
    check_symbol_table(&config.kernel);

    let kernel_base = find_kernel_base(&config.ld);
    let file_offset = file_offset(kernel_base.as_ref().map(|b| b.value), config.rip);

    let chain = ProviderChain::nm_then_objdump(&config.nm, &config.objdump);
    let symbols = chain.load(runner, &config.kernel);
    info!("Resolving 0x{:x} against {} symbols", config.rip, symbols.len());

    Ok(Lookup {
        rip: config.rip,
        kernel: config.kernel.clone(),
        kernel_base,
        file_offset,
        symbols,
        window: DisasmWindow::around(config.rip, config.around),
    })
}
