//! Pre-flight checks for riploc
//!
//! The kernel image is the one hard precondition: without it there is nothing
//! to look up, so its absence stops the run before any backend is invoked.
//! Everything else here is advisory.

use crate::domain::LocatorError;
use object::{Object, ObjectSection};
use std::path::Path;

/// Fail if the kernel binary does not exist
///
/// # Errors
/// Returns [`LocatorError::KernelNotFound`] naming the missing path.
pub fn check_kernel_exists(kernel: &Path) -> Result<(), LocatorError> {
    if !kernel.exists() {
        return Err(LocatorError::KernelNotFound(kernel.to_path_buf()));
    }
    Ok(())
}

/// Warn when the kernel looks stripped, since no backend will find symbols
///
/// Only section headers are inspected. Images `object` cannot parse (flat
/// binaries, unreadable files) are left for the backends to report on.
pub fn check_symbol_table(kernel: &Path) {
    let Ok(data) = std::fs::read(kernel) else {
        return;
    };
    let Ok(obj) = object::File::parse(&*data) else {
        return;
    };

    let has_symtab = obj.section_by_name(".symtab").is_some_and(|s| s.size() > 0);
    if !has_symtab {
        eprintln!("warning: {} has no .symtab, symbol lookup will likely fail", kernel.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_not_found() {
        let result = check_kernel_exists(Path::new("/nonexistent/path/to/kernel.bin"));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Kernel binary not found"));
        assert!(err.contains("/nonexistent/path/to/kernel.bin"));
    }

    #[test]
    fn test_kernel_exists() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(check_kernel_exists(file.path()).is_ok());
    }

    #[test]
    fn test_symbol_table_check_ignores_flat_binaries() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), [0x90u8; 64]).unwrap();
        // Not an object file; must neither panic nor error
        check_symbol_table(file.path());
    }
}
