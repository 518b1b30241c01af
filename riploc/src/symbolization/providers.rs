//! Symbol table backends
//!
//! Each backend knows how to invoke one external dumper and how to turn its
//! text output into [`Symbol`] records. Malformed lines are dropped one at a
//! time; a bad line never aborts the rest of the parse.

use crate::domain::{Symbol, SymbolSource};
use std::ffi::OsString;
use std::path::Path;

/// A source of symbols for a kernel binary
pub trait SymbolProvider {
    /// Backend tag attached to every record this provider yields
    fn source(&self) -> SymbolSource;

    /// Program to execute (a bare name is resolved through `PATH`)
    fn program(&self) -> &str;

    /// Arguments that make the program dump the symbol table of `kernel`
    fn args(&self, kernel: &Path) -> Vec<OsString>;

    /// Parse the program's standard output
    fn parse(&self, output: &str) -> Vec<Symbol>;
}

/// Primary backend: `nm -n --print-size --defined-only`
#[derive(Debug, Clone)]
pub struct NmProvider {
    program: String,
}

impl NmProvider {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl SymbolProvider for NmProvider {
    fn source(&self) -> SymbolSource {
        SymbolSource::Nm
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn args(&self, kernel: &Path) -> Vec<OsString> {
        vec!["-n".into(), "--print-size".into(), "--defined-only".into(), kernel.into()]
    }

    fn parse(&self, output: &str) -> Vec<Symbol> {
        parse_nm_output(output)
    }
}

/// Fallback backend: `objdump -t -w`
#[derive(Debug, Clone)]
pub struct ObjdumpProvider {
    program: String,
}

impl ObjdumpProvider {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl SymbolProvider for ObjdumpProvider {
    fn source(&self) -> SymbolSource {
        SymbolSource::Objdump
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn args(&self, kernel: &Path) -> Vec<OsString> {
        vec!["-t".into(), "-w".into(), kernel.into()]
    }

    fn parse(&self, output: &str) -> Vec<Symbol> {
        parse_objdump_output(output)
    }
}

/// Parse `nm --print-size` output
///
/// Lines look like `ADDRESS SIZE TYPE NAME`. Symbols without a size are
/// printed with three fields by nm and are skipped here.
#[must_use]
pub fn parse_nm_output(output: &str) -> Vec<Symbol> {
    output
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 4 {
                return None;
            }
            let address = parse_hex(parts[0])?;
            let size = parse_hex(parts[1])?;
            Some(Symbol::new(parts[3], address, Some(size), SymbolSource::Nm))
        })
        .collect()
}

/// Parse `objdump -t -w` output
///
/// A typical line is
/// `ffff800000000230 g     F .text  000000000000005d MyFunc`; the first six
/// whitespace-separated fields are taken as address, two flag columns,
/// section, size and name. Undefined and absolute symbols are excluded. An
/// unparsable size keeps the record with no size.
#[must_use]
pub fn parse_objdump_output(output: &str) -> Vec<Symbol> {
    output
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            let &[addr_str, _, _, section, size_str, name, ..] = parts.as_slice() else {
                return None;
            };
            if section == "*UND*" || section == "*ABS*" {
                return None;
            }
            let address = parse_hex(addr_str)?;
            Some(Symbol::new(name, address, parse_hex(size_str), SymbolSource::Objdump))
        })
        .collect()
}

/// Parse a bare hex field, rejecting signs and prefixes `from_str_radix` allows
fn parse_hex(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(field, 16).ok()
}
