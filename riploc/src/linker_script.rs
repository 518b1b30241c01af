//! Kernel base discovery from the linker script
//!
//! The kernel is linked to run at a fixed virtual address which the linker
//! script binds to a constant, e.g. `KERNEL_BASE = 0xFFFF800000000000;`.
//! Knowing it lets us turn a crash RIP into a byte offset inside the image.
//!
//! Every failure here (missing file, unreadable file, no assignment) is an
//! absent base, never an error: the base only feeds a display-only offset.

use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Constant the kernel linker script binds the link address to
pub const DEFAULT_BASE_SYMBOL: &str = "KERNEL_BASE";

/// Base address found in a linker script, with the file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelBase {
    pub value: u64,
    pub path: PathBuf,
}

/// Read `ld_path` and extract the `KERNEL_BASE` assignment
#[must_use]
pub fn find_kernel_base(ld_path: &Path) -> Option<KernelBase> {
    find_base_constant(ld_path, DEFAULT_BASE_SYMBOL)
}

/// Read `ld_path` and extract the value assigned to `name`
///
/// Invalid UTF-8 is replaced rather than rejected, so binary junk in the
/// script does not hide a valid assignment.
#[must_use]
pub fn find_base_constant(ld_path: &Path, name: &str) -> Option<KernelBase> {
    let bytes = match fs::read(ld_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Linker script {} not readable: {e}", ld_path.display());
            return None;
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    let value = extract_constant(&text, name)?;
    debug!("{name} = 0x{value:x} (from {})", ld_path.display());

    Some(KernelBase { value, path: ld_path.to_path_buf() })
}

/// Find the first `NAME = 0xHEX` assignment in linker script text
#[must_use]
pub fn extract_constant(text: &str, name: &str) -> Option<u64> {
    let pattern = format!(r"{}\s*=\s*0x([0-9a-fA-F]+)", regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    let digits = re.captures(text)?.get(1)?.as_str();

    // A value wider than 64 bits cannot be a link address
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCRIPT: &str = "\
ENTRY(kmain)
KERNEL_BASE = 0xFFFF800000000000;

SECTIONS
{
    . = KERNEL_BASE;
    .text : { *(.text*) }
}
";

    #[test]
    fn test_extract_constant() {
        assert_eq!(extract_constant(SCRIPT, "KERNEL_BASE"), Some(0xFFFF_8000_0000_0000));
    }

    #[test]
    fn test_extract_constant_tolerates_spacing() {
        assert_eq!(extract_constant("KERNEL_BASE=0x100000;", "KERNEL_BASE"), Some(0x10_0000));
        assert_eq!(extract_constant("KERNEL_BASE \t=\n 0x1000", "KERNEL_BASE"), Some(0x1000));
    }

    #[test]
    fn test_extract_constant_first_match_wins() {
        let text = "KERNEL_BASE = 0x1000;\nKERNEL_BASE = 0x2000;";
        assert_eq!(extract_constant(text, "KERNEL_BASE"), Some(0x1000));
    }

    #[test]
    fn test_extract_constant_missing() {
        assert_eq!(extract_constant("PHYS_BASE = 0x1000;", "KERNEL_BASE"), None);
        // Only hex assignments are recognised
        assert_eq!(extract_constant("KERNEL_BASE = 4096;", "KERNEL_BASE"), None);
    }

    #[test]
    fn test_extract_constant_overflow_is_absent() {
        assert_eq!(extract_constant("KERNEL_BASE = 0x1FFFFFFFFFFFFFFFF;", "KERNEL_BASE"), None);
    }

    #[test]
    fn test_find_kernel_base_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCRIPT.as_bytes()).unwrap();

        let base = find_kernel_base(file.path()).expect("base should be found");
        assert_eq!(base.value, 0xFFFF_8000_0000_0000);
        assert_eq!(base.path, file.path());
    }

    #[test]
    fn test_find_kernel_base_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"/* \xff\xfe garbage */\nKERNEL_BASE = 0x200000;\n").unwrap();

        assert_eq!(find_kernel_base(file.path()).map(|b| b.value), Some(0x20_0000));
    }

    #[test]
    fn test_find_kernel_base_missing_file() {
        assert_eq!(find_kernel_base(Path::new("/nonexistent/himuos.ld")), None);
    }
}
