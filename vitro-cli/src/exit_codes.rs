//! Process exit codes

/// The command completed
pub const EXIT_SUCCESS: i32 = 0;

/// The command failed
pub const EXIT_ERROR: i32 = 1;
