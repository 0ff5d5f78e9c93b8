//! Filesystem utilities for hummingbird.
//!
//! Configuration files are replaced atomically so a crash or a full disk never
//! leaves a half-written `.conf` behind.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
