/*!
Workflow drivers.

- `publish.rs` -> publish every draft on the Studio content page
- `sort.rs`    -> reorder a playlist by name

Drivers process items strictly one at a time. The first unrecovered error stops
the run; items already handled stay handled.
*/

use serde::Serialize;

use crate::config::Mode;

pub mod publish;
pub mod sort;

pub use publish::publish_drafts;
pub use sort::sort_playlist;

/// Outcome of one driver run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunReport {
    pub mode: Mode,
    /// Items found on the page.
    pub discovered: usize,
    /// Items the workflow applies to.
    pub eligible: usize,
    /// Items fully processed (zero in dry-run mode).
    pub processed: usize,
    /// Item names in processing order, where the page exposes them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    pub dry_run: bool,
}
