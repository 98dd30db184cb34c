//! Logging bootstrap.
//!
//! One place to initialize the `log`/`env_logger` pair; the viewer binaries
//! call [`init_logging`] before anything else so runtime and renderer
//! diagnostics have somewhere to go.

mod init;

pub use init::{init_logging, LoggingConfig};
