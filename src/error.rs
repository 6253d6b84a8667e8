//! Error types shared by the navigation engine.
//!
//! Polling timeouts on required protocol steps become [`BotError::ElementNotFound`];
//! a context menu that never lists an entry becomes [`BotError::MenuEmpty`].
//! Neither is recovered anywhere inside the crate.

use std::fmt;

use thiserror::Error;

use crate::dom::DomError;

/// The step (or menu stage) a failure happened in. Used for diagnostics only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StepKind {
    Row,
    DraftEditor,
    RatingStep,
    VisibilityStep,
    ConfirmationDialog,
    ListItem,
    ContextMenu,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Row => "row",
            StepKind::DraftEditor => "draft editor",
            StepKind::RatingStep => "rating step",
            StepKind::VisibilityStep => "visibility step",
            StepKind::ConfirmationDialog => "confirmation dialog",
            StepKind::ListItem => "list item",
            StepKind::ContextMenu => "context menu",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum BotError {
    /// A required element did not appear before its deadline.
    #[error("{step}: element `{selector}` not found")]
    ElementNotFound { step: StepKind, selector: String },

    /// The context menu opened but never listed an actionable entry.
    #[error("context menu for `{item}` has no entries")]
    MenuEmpty { item: String },

    /// The document backend itself failed (transport, protocol).
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl BotError {
    pub(crate) fn not_found(step: StepKind, selector: impl Into<String>) -> Self {
        BotError::ElementNotFound {
            step,
            selector: selector.into(),
        }
    }

    /// Whether this failure came from a polling deadline.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BotError::ElementNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
