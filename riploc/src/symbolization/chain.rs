//! Ordered fallback over symbol providers

use super::providers::{NmProvider, ObjdumpProvider, SymbolProvider};
use super::runner::ToolRunner;
use crate::domain::Symbol;
use log::{debug, info};
use std::path::Path;

/// Symbol providers tried in order until one yields records
pub struct ProviderChain {
    providers: Vec<Box<dyn SymbolProvider>>,
}

impl ProviderChain {
    #[must_use]
    pub fn new(providers: Vec<Box<dyn SymbolProvider>>) -> Self {
        Self { providers }
    }

    /// `nm` first, `objdump` as the fallback
    #[must_use]
    pub fn nm_then_objdump(nm: &str, objdump: &str) -> Self {
        Self::new(vec![Box::new(NmProvider::new(nm)), Box::new(ObjdumpProvider::new(objdump))])
    }

    /// Acquire the symbol table of `kernel`
    ///
    /// A provider is skipped when its tool exits non-zero (reported on
    /// stderr) or when it parses to zero records. If every provider is
    /// skipped the table is empty, which the report presents as "no symbols
    /// found" rather than an error.
    #[must_use]
    pub fn load(&self, runner: &dyn ToolRunner, kernel: &Path) -> Vec<Symbol> {
        for provider in &self.providers {
            let output = runner.run(provider.program(), &provider.args(kernel));
            if !output.success() {
                eprintln!(
                    "warning: {} failed ({}): {}",
                    provider.source(),
                    output.status,
                    output.stderr.trim()
                );
                continue;
            }

            let symbols = provider.parse(&output.stdout);
            if symbols.is_empty() {
                debug!("{} produced no usable symbols", provider.source());
                continue;
            }

            info!("Loaded {} symbols via {}", symbols.len(), provider.source());
            return symbols;
        }

        Vec::new()
    }
}
