//! External tool invocation
//!
//! Backends are plain processes whose text output we parse. Running them sits
//! behind [`ToolRunner`] so the parsers and the fallback chain can be driven
//! from canned output in tests.

use log::debug;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::process::Command;

/// Status reported when a tool cannot be spawned at all (shell convention)
pub const STATUS_NOT_FOUND: i32 = 127;

/// Status reported when the tool was found but could not be executed
pub const STATUS_NOT_EXECUTABLE: i32 = 126;

/// Status reported when the tool was terminated by a signal
pub const STATUS_SIGNALED: i32 = -1;

/// Captured result of one tool invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Runs a program to completion and captures its output
pub trait ToolRunner {
    /// Run `program` with `args`, blocking until it exits
    ///
    /// Never fails: a program that cannot be started is reported through a
    /// non-zero status with the reason in `stderr`.
    fn run(&self, program: &str, args: &[OsString]) -> ToolOutput;
}

/// [`ToolRunner`] backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[OsString]) -> ToolOutput {
        debug!("Running {program} {args:?}");

        match Command::new(program).args(args).output() {
            Ok(output) => ToolOutput {
                status: output.status.code().unwrap_or(STATUS_SIGNALED),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => {
                let status = if e.kind() == ErrorKind::PermissionDenied {
                    STATUS_NOT_EXECUTABLE
                } else {
                    STATUS_NOT_FOUND
                };
                ToolOutput { status, stdout: String::new(), stderr: format!("{program}: {e}") }
            }
        }
    }
}
