//! Logging setup.
//!
//! Library code only uses the `log` facade; binaries call [`init_logging`]
//! early in `main` to install `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
