#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/*!
Executor module for studiobot.

This module wires together:
- `poller`: deadline-bounded polling for an element under a region
- `actions`: page operations shared by every step (lookups, simulated clicks, pauses)
- `runtime`: picks the configured workflow and runs it once

Typical usage:
- Attach a `Document` (e.g. `dom::CdpDocument`).
- Construct a `Runtime` with a loaded `Config` and call `Runtime::run`.

Example:
```no_run
use std::sync::Arc;
use studiobot::config::Config;
use studiobot::dom::CdpDocument;
use studiobot::executor::Runtime;

# async fn demo() -> anyhow::Result<()> {
let cfg = Config::default();
let doc = CdpDocument::connect(&cfg.browser).await?;
let rt = Runtime::new(cfg, Arc::new(doc), true); // dry-run mode
let report = rt.run().await?;
# Ok(())
# }
```

Public re-exports:
- `ActionExecutor`: performs page-level actions.
- `Runtime`: dispatches to the workflow drivers.
*/

pub mod actions;
pub mod poller;
pub mod runtime;

// Re-exports for convenient access from `studiobot::executor::*`
pub use actions::ActionExecutor;
pub use runtime::Runtime;
