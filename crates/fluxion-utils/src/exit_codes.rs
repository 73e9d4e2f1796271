//! Exit code constants for fluxion.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Operation completed successfully |
//! | 1 | `INTERNAL` | General/internal failure |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments or configuration |
//! | 66 | `INPUT` | Empty or missing required input |
//! | 70 | `PROVIDER_FAILURE` | Completion provider call failed |
//! | 74 | `IO` | File read/write failure |

/// Type-safe exit code handling for fluxion operations.
///
/// Use the named constants for common exit codes, or
/// [`as_i32()`](Self::as_i32) to get the numeric value for
/// `std::process::exit()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - operation completed successfully
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal error - general failure
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid or missing command-line arguments
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Input error - empty or missing required user input
    pub const INPUT: ExitCode = ExitCode(66);

    /// Provider failure - the completion provider call failed
    pub const PROVIDER_FAILURE: ExitCode = ExitCode(70);

    /// IO error - file read/write failure
    pub const IO: ExitCode = ExitCode(74);

    /// Get the numeric exit code value.
    ///
    /// Use this with `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an ExitCode from a raw i32 value.
    ///
    /// Prefer using the named constants when possible.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}
