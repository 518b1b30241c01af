//! CLI argument definitions

use crate::domain::parse_address;
use crate::lookup::{LookupConfig, DEFAULT_KERNEL, DEFAULT_LD};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "riploc",
    about = "Locate the kernel symbol for a RIP printed on a HimuOS BSOD",
    after_help = "\
EXAMPLES:
    riploc 0xFFFF800000001234                          Use build/kernel/bin/kernel.bin and himuos.ld
    riploc 0xFFFF800000001234 --objdump llvm-objdump   Use the LLVM fallback dumper
    riploc 18446603336221200948 --around 0x100         Decimal RIP, wider disassembly window"
)]
pub struct Args {
    /// RIP address (hex like 0xFFFF..., or decimal)
    #[arg(value_name = "RIP", value_parser = parse_address)]
    pub rip: u64,

    /// Kernel binary path
    #[arg(long, default_value = DEFAULT_KERNEL)]
    pub kernel: PathBuf,

    /// Linker script path (for KERNEL_BASE)
    #[arg(long, default_value = DEFAULT_LD)]
    pub ld: PathBuf,

    /// nm tool path (used first)
    #[arg(long, default_value = "nm")]
    pub nm: String,

    /// objdump tool path (fallback)
    #[arg(long, default_value = "objdump")]
    pub objdump: String,

    /// Byte window for the suggested disassembly (hex or decimal)
    #[arg(long, default_value = "0x40", value_parser = parse_address)]
    pub around: u64,

    /// Demangle Rust symbol names in the report
    #[arg(long)]
    pub demangle: bool,
}

impl From<Args> for LookupConfig {
    fn from(args: Args) -> Self {
        Self {
            rip: args.rip,
            kernel: args.kernel,
            ld: args.ld,
            nm: args.nm,
            objdump: args.objdump,
            around: args.around,
            demangle: args.demangle,
        }
    }
}
