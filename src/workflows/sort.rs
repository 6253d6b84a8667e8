use std::cmp::Ordering;

use tracing::{debug, info};

use super::RunReport;
use crate::config::Mode;
use crate::dom::Document;
use crate::error::Result;
use crate::executor::ActionExecutor;
use crate::steps::PlaylistItem;

/// Reorder the playlist so its items follow `compare` on their names.
///
/// Items are sorted in memory (stable), then each one in turn is moved to the
/// bottom of the list. Once every item has been moved, the page order equals the
/// sorted order, provided nothing else edits the playlist during the run.
pub async fn sort_playlist<D, F>(
    exec: &ActionExecutor<D>,
    compare: F,
    dry_run: bool,
) -> Result<RunReport>
where
    D: Document,
    F: Fn(&str, &str) -> Ordering,
{
    info!(target: "studiobot::sort", dry_run, "Sorting playlist");
    let mut items = PlaylistItem::all(exec).await?;
    info!(target: "studiobot::sort", count = items.len(), "Found playlist videos");

    items.sort_by(|a, b| compare(a.name(), b.name()));

    let mut report = RunReport {
        mode: Mode::SortPlaylist,
        discovered: items.len(),
        eligible: items.len(),
        processed: 0,
        names: items.iter().map(|item| item.name().to_string()).collect(),
        dry_run,
    };
    if dry_run {
        return Ok(report);
    }

    for (index, item) in items.iter().enumerate() {
        debug!(target: "studiobot::sort", index, name = %item.name(), "Moving to bottom");
        item.open_menu().await?.move_to_bottom().await?;
        exec.pause(exec.timing().sort_pause()).await;
        report.processed += 1;
    }

    info!(target: "studiobot::sort", processed = report.processed, "Playlist sorted");
    Ok(report)
}
