use futures::future::join_all;
use tracing::info;

use super::RunReport;
use crate::config::{Mode, PublishConfig};
use crate::dom::Document;
use crate::error::Result;
use crate::executor::ActionExecutor;
use crate::steps::VideoRow;

/// Rows that currently show an edit-draft button, in page order.
///
/// All probes run at once so classification costs one probe timeout, not one per row.
pub async fn editable_rows<D: Document>(
    exec: &ActionExecutor<D>,
) -> Result<(usize, Vec<VideoRow<'_, D>>)> {
    let rows = VideoRow::all(exec).await?;
    let discovered = rows.len();
    let checks = join_all(rows.iter().map(|row| row.is_editable())).await;

    let mut eligible = Vec::new();
    for (row, editable) in rows.into_iter().zip(checks) {
        if editable? {
            eligible.push(row);
        }
    }
    Ok((discovered, eligible))
}

/// Publish every draft with the configured audience and visibility.
///
/// The wizard is a single modal, so each row's walk finishes (dialog closed)
/// before the next row is opened.
pub async fn publish_drafts<D: Document>(
    exec: &ActionExecutor<D>,
    cfg: &PublishConfig,
    dry_run: bool,
) -> Result<RunReport> {
    let (discovered, rows) = editable_rows(exec).await?;
    info!(
        target: "studiobot::publish",
        discovered, eligible = rows.len(), dry_run,
        "Found draft videos"
    );

    let mut report = RunReport {
        mode: Mode::PublishDrafts,
        discovered,
        eligible: rows.len(),
        processed: 0,
        names: Vec::new(),
        dry_run,
    };
    if dry_run {
        return Ok(report);
    }

    exec.pause(exec.timing().classify_pause()).await;

    let total = rows.len();
    for (index, row) in rows.into_iter().enumerate() {
        let editor = row.open_editor().await?;
        let rating = editor.set_audience(cfg.made_for_kids).await?;
        let visibility = rating.go_to_visibility().await?;
        visibility.set_visibility(cfg.visibility).await?;
        let dialog = visibility.save().await?;
        dialog.close().await?;
        exec.settle().await;

        report.processed += 1;
        info!(
            target: "studiobot::publish",
            item = index + 1, total, visibility = ?cfg.visibility,
            "Draft published"
        );
    }

    Ok(report)
}
