//! Logging setup.
//!
//! The library itself only emits through the `log` facade: `debug` for gate
//! changes and dropped geometry, `trace` for per-frame summaries and skipped
//! degenerate shapes. Binaries install a backend with [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
