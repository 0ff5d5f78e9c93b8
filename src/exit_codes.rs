//! Exit code constants for the hummingbird CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid file name, rejected edit)
//! - 2: Not found (recipe directory, config file)
//! - 3: Write failure (config file could not be persisted)
//! - 4: Server failure (bind, runtime)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid input, or an edit the document rejects.
pub const USER_ERROR: i32 = 1;

/// A required directory or file does not exist.
pub const NOT_FOUND: i32 = 2;

/// A configuration file could not be written.
pub const WRITE_FAILURE: i32 = 3;

/// The HTTP server could not start or stopped with an error.
pub const SERVER_FAILURE: i32 = 4;
