//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

/// Success - operation completed without errors
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// Validation error - invalid release name or selector
pub const VALIDATION_ERROR: i32 = 2;

/// IO error - output could not be written
pub const IO_ERROR: i32 = 5;

/// Release error - the release could not be retrieved from storage
pub const RELEASE_ERROR: i32 = 6;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
