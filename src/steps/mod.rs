//! Typed wrappers for each stage of the two UI protocols.
//!
//! A wrapper only exposes what is legal at its stage, and moving to the next
//! stage hands back the next wrapper.

pub mod menu;
pub mod selectors;
pub mod wizard;

pub use menu::{ContextMenu, PlaylistItem};
pub use wizard::{ConfirmationDialog, DraftEditor, RatingStep, VideoRow, VisibilityStep};
