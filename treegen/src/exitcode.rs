//! Process exit codes
//!
//! Argument errors exit with 1; the remaining codes follow BSD sysexits.h.

/// Successful termination
pub const OK: i32 = 0;

/// Missing or malformed command line arguments
pub const USAGE: i32 = 1;

/// Can't create output file
pub const CANTCREAT: i32 = 73;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
