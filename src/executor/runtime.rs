use std::sync::Arc;

use tracing::info;

use crate::config::{Config, Mode};
use crate::dom::Document;
use crate::error::Result;
use crate::executor::actions::ActionExecutor;
use crate::workflows::{self, RunReport};

/// Runtime is responsible for:
/// - holding the immutable run configuration
/// - pacing page access through one `ActionExecutor`
/// - running the configured workflow exactly once per `run`
pub struct Runtime<D: Document> {
    config: Config,
    executor: ActionExecutor<D>,
    dry_run: bool,
}

impl<D: Document> Runtime<D> {
    /// Create a new runtime over `doc` with the given config and dry-run mode.
    pub fn new(config: Config, doc: Arc<D>, dry_run: bool) -> Self {
        let executor = ActionExecutor::new(doc, config.timing.clone());
        Self {
            config,
            executor,
            dry_run,
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Enable or disable dry-run mode.
    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    /// Is dry-run currently enabled?
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run the configured workflow to completion or to its first unrecovered error.
    pub async fn run(&self) -> Result<RunReport> {
        let mode = self.config.mode;
        info!(target: "studiobot::runtime", ?mode, dry_run = self.dry_run, "Starting workflow");

        let report = match mode {
            Mode::PublishDrafts => {
                workflows::publish_drafts(&self.executor, &self.config.publish, self.dry_run).await?
            }
            Mode::SortPlaylist => {
                let compare = self.config.sort.order.comparator();
                workflows::sort_playlist(&self.executor, compare, self.dry_run).await?
            }
        };

        info!(
            target: "studiobot::runtime",
            ?mode, processed = report.processed, eligible = report.eligible,
            "Workflow completed"
        );
        Ok(report)
    }
}
