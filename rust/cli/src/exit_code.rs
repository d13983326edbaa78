//! Process exit codes.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Usage error or failed command.
pub const ERROR: i32 = 2;
