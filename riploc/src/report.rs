//! Human-readable lookup report
//!
//! ```text
//! === HimuOS BSOD RIP Locator ===
//! RIP          : 0xffff800000001234 (18446603336221200948)
//! KERNEL_BASE  : 0xffff800000000000 (from himuos.ld)
//! File offset  : 0x1234 bytes from kernel base
//! Symbol       : kmain @ 0xffff800000001200 (+0x34) size=0x80 [nm]
//! Next symbol  : panic @ 0xffff800000001280 (gap 0x4c) [nm]
//!
//! Suggested follow-ups:
//!   objdump -d -w --start-address=... --stop-address=... kernel.bin
//!   addr2line -e kernel.bin -a 0xffff800000001234
//! ```
//!
//! The follow-up commands are only printed, never run.

use crate::domain::Symbol;
use crate::lookup::Lookup;
use rustc_demangle::demangle;
use std::io::{self, Write};

/// Render `lookup` to `out`
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    lookup: &Lookup,
    demangle_names: bool,
) -> io::Result<()> {
    let rip = lookup.rip;
    let name = |sym: &Symbol| display_name(&sym.name, demangle_names);

    writeln!(out, "=== HimuOS BSOD RIP Locator ===")?;
    writeln!(out, "RIP          : {} ({rip})", hex16(rip))?;

    match &lookup.kernel_base {
        Some(base) => {
            writeln!(out, "KERNEL_BASE  : {} (from {})", hex16(base.value), base.path.display())?;
            if let Some(offset) = lookup.file_offset {
                writeln!(out, "File offset  : 0x{offset:x} bytes from kernel base")?;
            }
        }
        None => writeln!(out, "KERNEL_BASE  : <not found in linker script>")?,
    }

    let nearest = lookup.nearest();
    match nearest.before {
        Some(before) => {
            let delta = rip - before.address;
            let size = match before.size {
                Some(size) if size != 0 => format!(" size=0x{size:x}"),
                _ => String::new(),
            };
            writeln!(
                out,
                "Symbol       : {} @ {} (+0x{delta:x}){size} [{}]",
                name(before),
                hex16(before.address),
                before.source
            )?;
        }
        None => writeln!(out, "Symbol       : <not found>")?,
    }

    if let Some(after) = nearest.after {
        let gap = after.address - rip;
        writeln!(
            out,
            "Next symbol  : {} @ {} (gap 0x{gap:x}) [{}]",
            name(after),
            hex16(after.address),
            after.source
        )?;
    }

    if nearest.is_empty() {
        writeln!(out, "No symbols found; ensure nm/objdump is available.")?;
    }

    let kernel = lookup.kernel.display();
    writeln!(out, "\nSuggested follow-ups:")?;
    writeln!(
        out,
        "  objdump -d -w --start-address={} --stop-address={} {kernel}",
        hex16(lookup.window.start),
        hex16(lookup.window.stop)
    )?;
    writeln!(out, "  addr2line -e {kernel} -a {}", hex16(rip))?;

    Ok(())
}

/// Render `lookup` into a string
#[must_use]
pub fn render_report(lookup: &Lookup, demangle_names: bool) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    let _ = write_report(&mut buf, lookup, demangle_names);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Zero-padded 64-bit hex, the width of a RIP on the BSOD screen
fn hex16(value: u64) -> String {
    format!("0x{value:016x}")
}

fn display_name(name: &str, demangle_names: bool) -> String {
    if demangle_names {
        format!("{:#}", demangle(name))
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DisasmWindow;
    use crate::domain::SymbolSource;
    use crate::linker_script::KernelBase;
    use std::path::PathBuf;

    fn lookup(rip: u64, symbols: Vec<Symbol>) -> Lookup {
        Lookup {
            rip,
            kernel: PathBuf::from("build/kernel/bin/kernel.bin"),
            kernel_base: Some(KernelBase { value: 0x10_0000, path: PathBuf::from("himuos.ld") }),
            file_offset: rip.checked_sub(0x10_0000),
            symbols,
            window: DisasmWindow::around(rip, 0x40),
        }
    }

    #[test]
    fn test_full_report() {
        let symbols = vec![
            Symbol::new("kmain", 0x10_0000, Some(0x40), SymbolSource::Nm),
            Symbol::new("panic", 0x10_0080, Some(0x20), SymbolSource::Nm),
        ];
        let report = render_report(&lookup(0x10_0050, symbols), false);

        let expected = "\
=== HimuOS BSOD RIP Locator ===
RIP          : 0x0000000000100050 (1048656)
KERNEL_BASE  : 0x0000000000100000 (from himuos.ld)
File offset  : 0x50 bytes from kernel base
Symbol       : kmain @ 0x0000000000100000 (+0x50) size=0x40 [nm]
Next symbol  : panic @ 0x0000000000100080 (gap 0x30) [nm]

Suggested follow-ups:
  objdump -d -w --start-address=0x0000000000100010 --stop-address=0x0000000000100090 build/kernel/bin/kernel.bin
  addr2line -e build/kernel/bin/kernel.bin -a 0x0000000000100050
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_without_symbols() {
        let report = render_report(&lookup(0x10_0050, Vec::new()), false);
        assert!(report.contains("Symbol       : <not found>\n"));
        assert!(report.contains("No symbols found; ensure nm/objdump is available."));
        assert!(!report.contains("Next symbol"));
    }

    #[test]
    fn test_report_without_base() {
        let mut l = lookup(0x20, Vec::new());
        l.kernel_base = None;
        l.file_offset = None;

        let report = render_report(&l, false);
        assert!(report.contains("KERNEL_BASE  : <not found in linker script>\n"));
        assert!(!report.contains("File offset"));
        assert!(report.contains("--start-address=0x0000000000000000 "));
        assert!(report.contains("--stop-address=0x0000000000000060 "));
    }

    #[test]
    fn test_report_omits_zero_and_missing_size() {
        let symbols = vec![Symbol::new("_start", 0x10_0000, Some(0), SymbolSource::Objdump)];
        let report = render_report(&lookup(0x10_0004, symbols), false);
        assert!(report.contains("(+0x4) [objdump]\n"));

        let symbols = vec![Symbol::new("_start", 0x10_0000, None, SymbolSource::Objdump)];
        let report = render_report(&lookup(0x10_0004, symbols), false);
        assert!(report.contains("(+0x4) [objdump]\n"));
    }

    #[test]
    fn test_report_below_first_symbol() {
        let symbols = vec![Symbol::new("kmain", 0x10_0000, Some(0x40), SymbolSource::Nm)];
        let report = render_report(&lookup(0x8_0000, symbols), false);
        assert!(report.contains("Symbol       : <not found>\n"));
        assert!(report.contains("Next symbol  : kmain @ 0x0000000000100000 (gap 0x80000) [nm]"));
        assert!(!report.contains("No symbols found"));
    }

    #[test]
    fn test_report_demangles_rust_names() {
        let mangled = "_ZN6kernel5panic17h0123456789abcdefE";
        let symbols = vec![Symbol::new(mangled, 0x10_0000, None, SymbolSource::Nm)];

        let plain = render_report(&lookup(0x10_0001, symbols.clone()), false);
        assert!(plain.contains(mangled));

        let demangled = render_report(&lookup(0x10_0001, symbols), true);
        assert!(demangled.contains("Symbol       : kernel::panic @"));
    }
}
