use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::{debug, trace};

use crate::dom::{Document, DomError, Region, refreshed};

/// Poll `region` for a descendant matching `selector` until it appears or `timeout` elapses.
///
/// The region is checked immediately, then every `interval`, and one last time at
/// the deadline. A miss is not an error here: it returns `Ok(None)` after logging
/// the selector and region, and the caller decides whether that matters. Only a
/// backend failure is an `Err`.
///
/// The scope is refreshed before every check, since other lookups may run between
/// two checks.
pub async fn find<D: Document + ?Sized>(
    doc: &D,
    selector: &str,
    region: &Region<D::Node>,
    timeout: Duration,
    interval: Duration,
) -> Result<Option<D::Node>, DomError> {
    let deadline = Instant::now() + timeout;

    loop {
        let scope = refreshed(doc, region).await?;
        if let Some(node) = doc.query(&scope, selector).await? {
            trace!(target: "studiobot::poller", %selector, ?node, "Element found");
            return Ok(Some(node));
        }

        let now = Instant::now();
        if now >= deadline {
            debug!(
                target: "studiobot::poller",
                %selector, ?region, timeout_ms = timeout.as_millis() as u64,
                "Could not find element before deadline"
            );
            return Ok(None);
        }
        sleep(interval.min(deadline - now)).await;
    }
}
