//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Log config → Start metrics (optional) → Bind listener → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → graceful shutdown of the serve loop
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

pub mod signals;
pub mod startup;

pub use startup::{start, StartupError};
