//! Selectors and positional ordinals for the YouTube UI.
//!
//! Several controls are only addressable by position among their siblings. Those
//! positions mirror the application's current layout exactly and live here so a
//! layout change is a one-file edit.

use crate::config::Visibility;

// Studio content page and upload wizard.
pub const VIDEO_ROW: &str = "ytcp-video-row";
pub const DRAFT_BUTTON: &str = ".edit-draft-button";
pub const DRAFT_MODAL: &str = ".style-scope.ytcp-uploads-dialog";
pub const MADE_FOR_KIDS_GROUP: &str = "#made-for-kids-group";
pub const RADIO_BUTTON: &str = "tp-yt-paper-radio-button";
pub const MADE_FOR_KIDS_RADIO: &str = "tp-yt-paper-radio-button:nth-child(1)";
pub const NOT_MADE_FOR_KIDS_RADIO: &str = "tp-yt-paper-radio-button:nth-child(2)";
pub const VISIBILITY_STEPPER: &str = "#step-badge-3";
pub const VISIBILITY_RADIO_GROUP: &str = "tp-yt-paper-radio-group";
pub const SAVE_BUTTON: &str = "#done-button";
pub const SAVE_SUCCESS: &str = "ytcp-video-thumbnail-with-info";
pub const SHARE_DIALOG: &str = "ytcp-dialog.ytcp-video-share-dialog > tp-yt-paper-dialog:nth-child(1)";
pub const DIALOG_CLOSE_BUTTON: &str = "tp-yt-iron-icon";

// Playlist page.
pub const PLAYLIST_ITEM: &str = "ytd-playlist-video-renderer";
pub const ITEM_TITLE: &str = "#video-title";
pub const MENU_BUTTON: &str = "button";
pub const ITEM_MENU: &str = "tp-yt-paper-listbox#items";
pub const MENU_ENTRY: &str = "ytd-menu-service-item-renderer";

/// Position of "Move to top" among the context menu entries.
pub const MOVE_TO_TOP_INDEX: usize = 4;
/// Position of "Move to bottom" among the context menu entries.
pub const MOVE_TO_BOTTOM_INDEX: usize = 5;

/// Audience radio for the "made for kids" answer.
pub const fn audience_radio(made_for_kids: bool) -> &'static str {
    if made_for_kids {
        MADE_FOR_KIDS_RADIO
    } else {
        NOT_MADE_FOR_KIDS_RADIO
    }
}

/// Position of the radio button for `level` inside the visibility group.
pub const fn visibility_radio_index(level: Visibility) -> usize {
    match level {
        Visibility::Private => 0,
        Visibility::Unlisted => 1,
        Visibility::Public => 2,
    }
}
