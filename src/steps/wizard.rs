//! Draft publishing wizard.
//!
//! Each wizard step is its own type and advancing consumes the current step, so
//! the only reachable order is
//! `VideoRow -> DraftEditor -> RatingStep -> VisibilityStep -> ConfirmationDialog`.
//! The editor modal stays the same element for the whole wizard; only the
//! active panel inside it changes.
//!
//! The audience radios are looked up inside `#made-for-kids-group`, which must be
//! present, not anywhere in the modal. The visibility radios share the element
//! name, and an editor that renders without the group fails at the audience step
//! instead of clicking whatever radio comes first.

use tracing::debug;

use super::selectors as sel;
use crate::config::Visibility;
use crate::dom::{Document, Region};
use crate::error::{BotError, Result, StepKind};
use crate::executor::ActionExecutor;

/// One row of the Studio content list.
pub struct VideoRow<'a, D: Document> {
    exec: &'a ActionExecutor<D>,
    region: Region<D::Node>,
}

impl<'a, D: Document> VideoRow<'a, D> {
    pub fn new(exec: &'a ActionExecutor<D>, node: D::Node) -> Self {
        Self {
            exec,
            region: Region::Element(node),
        }
    }

    /// Every row currently on the page, in page order.
    pub async fn all(exec: &'a ActionExecutor<D>) -> Result<Vec<Self>> {
        let nodes = exec.query_all(sel::VIDEO_ROW, &Region::Document).await?;
        Ok(nodes.into_iter().map(|node| Self::new(exec, node)).collect())
    }

    /// Short probe for the edit-draft button; rows without one are not drafts.
    pub async fn is_editable(&self) -> Result<bool> {
        Ok(self.exec.probe(sel::DRAFT_BUTTON, &self.region).await?.is_some())
    }

    /// Open the draft in the upload wizard.
    pub async fn open_editor(self) -> Result<DraftEditor<'a, D>> {
        debug!(target: "studiobot::wizard", "Opening draft");
        let button = self
            .exec
            .probe(sel::DRAFT_BUTTON, &self.region)
            .await?
            .ok_or_else(|| BotError::not_found(StepKind::Row, sel::DRAFT_BUTTON))?;
        self.exec.activate(&button).await?;

        let modal = self
            .exec
            .require(StepKind::Row, sel::DRAFT_MODAL, &Region::Document)
            .await?;
        Ok(DraftEditor {
            exec: self.exec,
            modal: Region::Element(modal),
        })
    }
}

/// The wizard modal showing its first (details) panel.
pub struct DraftEditor<'a, D: Document> {
    exec: &'a ActionExecutor<D>,
    modal: Region<D::Node>,
}

impl<'a, D: Document> DraftEditor<'a, D> {
    /// Answer the "made for kids" question. The first radio means yes, the second no.
    pub async fn set_audience(self, made_for_kids: bool) -> Result<RatingStep<'a, D>> {
        let group = self
            .exec
            .require(StepKind::DraftEditor, sel::MADE_FOR_KIDS_GROUP, &self.modal)
            .await?;
        let radio = self
            .exec
            .require(
                StepKind::DraftEditor,
                sel::audience_radio(made_for_kids),
                &Region::Element(group),
            )
            .await?;
        self.exec.activate(&radio).await?;
        self.exec.settle().await;
        debug!(target: "studiobot::wizard", made_for_kids, "Audience set");

        Ok(RatingStep {
            exec: self.exec,
            modal: self.modal,
        })
    }
}

/// The details panel once the audience answer is committed.
pub struct RatingStep<'a, D: Document> {
    exec: &'a ActionExecutor<D>,
    modal: Region<D::Node>,
}

impl<'a, D: Document> RatingStep<'a, D> {
    /// Jump to the visibility panel through its step badge.
    pub async fn go_to_visibility(self) -> Result<VisibilityStep<'a, D>> {
        debug!(target: "studiobot::wizard", "Navigating to visibility step");
        let stepper = self
            .exec
            .require(StepKind::RatingStep, sel::VISIBILITY_STEPPER, &self.modal)
            .await?;
        self.exec.activate(&stepper).await?;
        self.exec.settle().await;

        Ok(VisibilityStep {
            exec: self.exec,
            modal: self.modal,
        })
    }
}

/// The visibility panel of the wizard.
pub struct VisibilityStep<'a, D: Document> {
    exec: &'a ActionExecutor<D>,
    modal: Region<D::Node>,
}

impl<'a, D: Document> VisibilityStep<'a, D> {
    /// Select the radio for `level` (Private, Unlisted, Public by position).
    pub async fn set_visibility(&self, level: Visibility) -> Result<()> {
        let group = self
            .exec
            .require(StepKind::VisibilityStep, sel::VISIBILITY_RADIO_GROUP, &self.modal)
            .await?;
        let radio = self
            .exec
            .nth(
                StepKind::VisibilityStep,
                sel::RADIO_BUTTON,
                &Region::Element(group),
                sel::visibility_radio_index(level),
            )
            .await?;
        self.exec.activate(&radio).await?;
        debug!(target: "studiobot::wizard", ?level, "Visibility set");
        self.exec.settle().await;
        Ok(())
    }

    /// Save the draft and wait for the share dialog.
    ///
    /// Does not return before the success marker shows up. A rejected save has no
    /// signal of its own; it surfaces as that marker never appearing.
    pub async fn save(self) -> Result<ConfirmationDialog<'a, D>> {
        let button = self
            .exec
            .require(StepKind::VisibilityStep, sel::SAVE_BUTTON, &self.modal)
            .await?;
        self.exec.activate(&button).await?;

        self.exec
            .require(StepKind::VisibilityStep, sel::SAVE_SUCCESS, &Region::Document)
            .await?;
        debug!(target: "studiobot::wizard", "Changes saved");

        let dialog = self
            .exec
            .require(StepKind::VisibilityStep, sel::SHARE_DIALOG, &Region::Document)
            .await?;
        Ok(ConfirmationDialog {
            exec: self.exec,
            region: Region::Element(dialog),
        })
    }
}

/// Share dialog shown after a successful save. Closing it ends the wizard.
pub struct ConfirmationDialog<'a, D: Document> {
    exec: &'a ActionExecutor<D>,
    region: Region<D::Node>,
}

impl<D: Document> ConfirmationDialog<'_, D> {
    pub async fn close(self) -> Result<()> {
        let button = self
            .exec
            .require(
                StepKind::ConfirmationDialog,
                sel::DIALOG_CLOSE_BUTTON,
                &self.region,
            )
            .await?;
        self.exec.activate(&button).await?;
        self.exec.settle().await;
        debug!(target: "studiobot::wizard", "Dialog closed");
        Ok(())
    }
}
