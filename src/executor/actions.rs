use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, trace};

use crate::config::Timing;
use crate::dom::{Document, Region, refreshed};
use crate::error::{BotError, Result, StepKind};
use crate::executor::poller;

/// Low-level page operations shared by every step wrapper: polling lookups,
/// simulated clicks and fixed pauses, all paced by the configured [`Timing`].
///
/// Interactions are fire-and-forget. A click only tells the caller that the events
/// were dispatched; whether the application reacted is learned by polling for the
/// next expected element.
pub struct ActionExecutor<D: Document> {
    doc: Arc<D>,
    timing: Timing,
}

impl<D: Document> Clone for ActionExecutor<D> {
    fn clone(&self) -> Self {
        Self {
            doc: Arc::clone(&self.doc),
            timing: self.timing.clone(),
        }
    }
}

impl<D: Document> ActionExecutor<D> {
    pub fn new(doc: Arc<D>, timing: Timing) -> Self {
        Self { doc, timing }
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Poll for `selector` under `region` with an explicit deadline.
    pub async fn find(
        &self,
        selector: &str,
        region: &Region<D::Node>,
        timeout: Duration,
    ) -> Result<Option<D::Node>> {
        Ok(poller::find(
            self.doc.as_ref(),
            selector,
            region,
            timeout,
            self.timing.poll_interval(),
        )
        .await?)
    }

    /// Poll for an element the current step cannot proceed without.
    pub async fn require(
        &self,
        step: StepKind,
        selector: &str,
        region: &Region<D::Node>,
    ) -> Result<D::Node> {
        self.find(selector, region, self.timing.element_timeout())
            .await?
            .ok_or_else(|| BotError::not_found(step, selector))
    }

    /// Short existence check used for classification; a miss is a plain `None`.
    pub async fn probe(&self, selector: &str, region: &Region<D::Node>) -> Result<Option<D::Node>> {
        self.find(selector, region, self.timing.probe_timeout()).await
    }

    /// Single lookup without polling.
    pub async fn query(&self, selector: &str, region: &Region<D::Node>) -> Result<Option<D::Node>> {
        let scope = refreshed(self.doc.as_ref(), region).await?;
        Ok(self.doc.query(&scope, selector).await?)
    }

    /// All current matches, without polling.
    pub async fn query_all(&self, selector: &str, region: &Region<D::Node>) -> Result<Vec<D::Node>> {
        let scope = refreshed(self.doc.as_ref(), region).await?;
        Ok(self.doc.query_all(&scope, selector).await?)
    }

    /// The `index`-th current match of `selector` under `region`.
    pub async fn nth(
        &self,
        step: StepKind,
        selector: &str,
        region: &Region<D::Node>,
        index: usize,
    ) -> Result<D::Node> {
        let mut all = self.query_all(selector, region).await?;
        if index >= all.len() {
            debug!(
                target: "studiobot::actions",
                %selector, index, available = all.len(),
                "Positional lookup out of range"
            );
            return Err(BotError::not_found(step, format!("{selector}[{index}]")));
        }
        Ok(all.swap_remove(index))
    }

    /// Trimmed text content of an element.
    pub async fn text(&self, node: &D::Node) -> Result<String> {
        Ok(self.doc.text_content(node).await?.trim().to_string())
    }

    /// Simulate a user click: a `mousedown` event followed by a native `click()`.
    /// Some of the application's custom controls only register the pair.
    pub async fn activate(&self, node: &D::Node) -> Result<()> {
        self.doc.mouse_down(node).await?;
        self.doc.click(node).await?;
        trace!(target: "studiobot::actions", ?node, "clicked");
        Ok(())
    }

    /// Fixed debounce after an interaction whose outcome cannot be observed.
    pub async fn settle(&self) {
        self.pause(self.timing.settle()).await;
    }

    pub async fn pause(&self, duration: Duration) {
        trace!(target: "studiobot::actions", ms = duration.as_millis() as u64, "pause");
        sleep(duration).await;
    }
}
