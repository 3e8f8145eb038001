//! Logging setup built on `tracing-subscriber`.
//!
//! The library only emits `tracing` events. A host that wants to see them
//! calls [`init_tracing`] once at startup; the CLI does this before rendering.
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` option in [`Config`](crate::Config)
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
