#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! studiobot — bulk actions for YouTube Studio that the UI only offers one item at a time.
//!
//! The bot attaches to a signed-in browser tab and drives the page the way a user would:
//! it polls for the element each step expects, clicks it, and polls for the next one.
//! Two workflows are available:
//! - publish every draft through the upload wizard (audience, visibility, save)
//! - sort a playlist by name using each item's "move to bottom" menu entry
//!
//! Modules:
//! - `config`: Configuration models, loader, and schema helpers.
//! - `dom`: The `Document` abstraction and its DevTools backend.
//! - `executor`: Poller, page actions, and the runtime that dispatches a workflow.
//! - `steps`: Typed wizard and menu stages, plus the selector table.
//! - `workflows`: The two drivers.
//! - `utils`: Natural name ordering.
//!
//! Use `studiobot::prelude::*` to bring commonly used items into scope quickly.

/// Public module: configuration (models, loader, schema helpers).
pub mod config;
/// Public module: document access (trait, regions, DevTools backend).
pub mod dom;
/// Public module: error types for the navigation engine.
pub mod error;
/// Public module: execution engine (poller, actions and runtime).
pub mod executor;
/// Public module: wizard and menu step wrappers.
pub mod steps;
/// Public module: utilities (natural ordering).
pub mod utils;
/// Public module: workflow drivers.
pub mod workflows;

/// Crate-level constants for consumers that want to inspect package metadata at runtime.
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version (e.g., "0.1.0").
#[inline]
pub const fn version() -> &'static str {
    PKG_VERSION
}

/// Parse a simple level name (trace|debug|info|warn|error).
pub fn parse_level(s: &str) -> Option<tracing::Level> {
    use tracing::Level;
    match s.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Initialize tracing (logging) with a reasonable default.
/// - Honors the `RUST_LOG` environment variable if set.
/// - Otherwise `debug` selects the `debug` level, and `info` is used when it is off.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init_tracing(debug: bool) {
    use tracing::Level;
    use tracing_subscriber::fmt;

    let fallback = if debug { Level::DEBUG } else { Level::INFO };
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(fallback);

    // Ignore the error if the global subscriber was already set.
    let _ = fmt().with_max_level(level).try_init();
}

/// A convenient set of exports for most consumers.
///
/// Bring this into scope with:
/// `use studiobot::prelude::*;`
pub mod prelude {
    // Common result/error handling
    pub use anyhow::{Context, Result, anyhow, bail, ensure};

    // Tracing macros
    pub use tracing::{debug, error, info, instrument, trace, warn};

    // Timing helpers
    pub use std::time::Duration;
    pub use tokio::time::sleep;

    pub use crate as studiobot;
    pub use crate::config::{Config, Mode, SortOrder, Visibility};
    pub use crate::dom::{CdpDocument, Document, Region};
    pub use crate::error::{BotError, StepKind};
    pub use crate::executor::{ActionExecutor, Runtime};
    pub use crate::workflows::RunReport;
}
