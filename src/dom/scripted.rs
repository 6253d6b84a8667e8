//! Scripted stand-ins for the two YouTube pages, built on [`FakeDocument`].
//!
//! They react to clicks the way the real pages do (wizard panels appear late,
//! saving swaps the wizard for a share dialog, menu entries reorder the list) and
//! record what the bot did for the assertions.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::sleep;

use super::fake::{FakeDocument, NodeId};
use crate::steps::selectors as sel;

const MODAL_DELAY: Duration = Duration::from_millis(30);
const SAVE_DELAY: Duration = Duration::from_millis(40);
const MENU_DELAY: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Published {
    pub row: usize,
    pub made_for_kids: Option<bool>,
    pub visibility_index: Option<usize>,
}

#[derive(Debug, Default)]
pub(crate) struct StudioState {
    pub open_wizards: usize,
    pub max_open_wizards: usize,
    pub current: Option<Published>,
    pub published: Vec<Published>,
    pub reject_saves: bool,
}

/// The Studio content page with one row per draft.
pub(crate) struct FakeStudio {
    pub doc: FakeDocument,
    pub rows: Vec<NodeId>,
    pub state: Arc<Mutex<StudioState>>,
}

impl FakeStudio {
    /// One row per entry; `true` rows carry an edit-draft button.
    pub fn new(editable: &[bool]) -> Self {
        Self::on(FakeDocument::new(), editable)
    }

    /// Same page, with handles that go stale after document-wide lookups.
    pub fn with_volatile_ids(editable: &[bool]) -> Self {
        Self::on(FakeDocument::with_volatile_ids(), editable)
    }

    fn on(doc: FakeDocument, editable: &[bool]) -> Self {
        let state = Arc::new(Mutex::new(StudioState::default()));
        let mut rows = Vec::new();

        for (index, &has_button) in editable.iter().enumerate() {
            let row = doc.add(None, &[sel::VIDEO_ROW]);
            rows.push(row);
            if has_button {
                let button = doc.add(Some(row), &[sel::DRAFT_BUTTON]);
                let state = Arc::clone(&state);
                doc.on_click(button, move |doc, _| open_wizard(doc, &state, index));
            }
        }

        Self { doc, rows, state }
    }

    pub fn rejecting_saves(self) -> Self {
        self.state.lock().unwrap().reject_saves = true;
        self
    }

    pub fn published(&self) -> Vec<Published> {
        self.state.lock().unwrap().published.clone()
    }

    pub fn max_open_wizards(&self) -> usize {
        self.state.lock().unwrap().max_open_wizards
    }
}

fn open_wizard(doc: &FakeDocument, state: &Arc<Mutex<StudioState>>, row: usize) {
    {
        let mut st = state.lock().unwrap();
        st.open_wizards += 1;
        st.max_open_wizards = st.max_open_wizards.max(st.open_wizards);
        st.current = Some(Published {
            row,
            ..Published::default()
        });
    }

    let doc = doc.clone();
    let state = Arc::clone(state);
    tokio::spawn(async move {
        sleep(MODAL_DELAY).await;
        build_modal(&doc, &state);
    });
}

fn build_modal(doc: &FakeDocument, state: &Arc<Mutex<StudioState>>) {
    let modal = doc.add(None, &[sel::DRAFT_MODAL]);
    let group = doc.add(Some(modal), &[sel::MADE_FOR_KIDS_GROUP]);
    for (selector, answer) in [
        (sel::MADE_FOR_KIDS_RADIO, true),
        (sel::NOT_MADE_FOR_KIDS_RADIO, false),
    ] {
        let radio = doc.add(Some(group), &[sel::RADIO_BUTTON, selector]);
        let state = Arc::clone(state);
        doc.on_click(radio, move |_, _| {
            if let Some(current) = state.lock().unwrap().current.as_mut() {
                current.made_for_kids = Some(answer);
            }
        });
    }

    let stepper = doc.add(Some(modal), &[sel::VISIBILITY_STEPPER]);
    let state = Arc::clone(state);
    doc.on_click(stepper, move |doc, _| build_visibility_panel(doc, &state, modal));
}

fn build_visibility_panel(doc: &FakeDocument, state: &Arc<Mutex<StudioState>>, modal: NodeId) {
    let group = doc.add(Some(modal), &[sel::VISIBILITY_RADIO_GROUP]);
    for index in 0..3 {
        let radio = doc.add(Some(group), &[sel::RADIO_BUTTON]);
        let state = Arc::clone(state);
        doc.on_click(radio, move |_, _| {
            if let Some(current) = state.lock().unwrap().current.as_mut() {
                current.visibility_index = Some(index);
            }
        });
    }

    let save = doc.add(Some(modal), &[sel::SAVE_BUTTON]);
    let state = Arc::clone(state);
    doc.on_click(save, move |doc, _| {
        if state.lock().unwrap().reject_saves {
            return;
        }
        let doc = doc.clone();
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            sleep(SAVE_DELAY).await;
            finish_save(&doc, &state, modal);
        });
    });
}

fn finish_save(doc: &FakeDocument, state: &Arc<Mutex<StudioState>>, modal: NodeId) {
    doc.remove(modal);
    {
        let mut st = state.lock().unwrap();
        if let Some(done) = st.current.take() {
            st.published.push(done);
        }
    }

    let marker = doc.add(None, &[sel::SAVE_SUCCESS]);
    let dialog = doc.add(None, &[sel::SHARE_DIALOG]);
    let close = doc.add(Some(dialog), &[sel::DIALOG_CLOSE_BUTTON]);
    let state = Arc::clone(state);
    doc.on_click(close, move |doc, _| {
        doc.remove(dialog);
        doc.remove(marker);
        state.lock().unwrap().open_wizards -= 1;
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuCall {
    Open(String),
    MoveToTop(String),
    MoveToBottom(String),
}

#[derive(Debug, Default)]
pub(crate) struct PlaylistState {
    pub order: Vec<String>,
    pub calls: Vec<MenuCall>,
    pub menu_open: bool,
    pub overlapped: bool,
}

/// A playlist page whose items reorder themselves on "move to top/bottom".
pub(crate) struct FakePlaylist {
    pub doc: FakeDocument,
    pub state: Arc<Mutex<PlaylistState>>,
}

impl FakePlaylist {
    /// Items in their initial page order; each menu lists `menu_entries` entries.
    pub fn new(names: &[&str], menu_entries: usize) -> Self {
        Self::on(FakeDocument::new(), names, menu_entries)
    }

    /// Same page, with handles that go stale after document-wide lookups.
    pub fn with_volatile_ids(names: &[&str], menu_entries: usize) -> Self {
        Self::on(FakeDocument::with_volatile_ids(), names, menu_entries)
    }

    fn on(doc: FakeDocument, names: &[&str], menu_entries: usize) -> Self {
        let state = Arc::new(Mutex::new(PlaylistState {
            order: names.iter().map(|n| n.to_string()).collect(),
            ..PlaylistState::default()
        }));

        for name in names {
            let item = doc.add(None, &[sel::PLAYLIST_ITEM]);
            let title = doc.add(Some(item), &[sel::ITEM_TITLE]);
            doc.set_text(title, &format!("\n      {name}\n    "));

            let button = doc.add(Some(item), &[sel::MENU_BUTTON]);
            let state = Arc::clone(&state);
            let name = name.to_string();
            doc.on_click(button, move |doc, _| {
                open_menu(doc, &state, &name, menu_entries);
            });
        }

        Self { doc, state }
    }

    pub fn order(&self) -> Vec<String> {
        self.state.lock().unwrap().order.clone()
    }

    pub fn calls(&self) -> Vec<MenuCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn overlapped(&self) -> bool {
        self.state.lock().unwrap().overlapped
    }
}

fn open_menu(doc: &FakeDocument, state: &Arc<Mutex<PlaylistState>>, name: &str, entries: usize) {
    {
        let mut st = state.lock().unwrap();
        if st.menu_open {
            st.overlapped = true;
        }
        st.menu_open = true;
        st.calls.push(MenuCall::Open(name.to_string()));
    }

    let doc = doc.clone();
    let state = Arc::clone(state);
    let name = name.to_string();
    tokio::spawn(async move {
        sleep(MENU_DELAY).await;
        let listbox = doc.add(None, &[sel::ITEM_MENU]);
        for index in 0..entries {
            let entry = doc.add(Some(listbox), &[sel::MENU_ENTRY]);
            let state = Arc::clone(&state);
            let name = name.clone();
            doc.on_click(entry, move |doc, _| {
                let mut st = state.lock().unwrap();
                let Some(pos) = st.order.iter().position(|n| *n == name) else {
                    return;
                };
                match index {
                    sel::MOVE_TO_TOP_INDEX => {
                        let moved = st.order.remove(pos);
                        st.order.insert(0, moved);
                        st.calls.push(MenuCall::MoveToTop(name.clone()));
                    }
                    sel::MOVE_TO_BOTTOM_INDEX => {
                        let moved = st.order.remove(pos);
                        st.order.push(moved);
                        st.calls.push(MenuCall::MoveToBottom(name.clone()));
                    }
                    _ => {}
                }
                st.menu_open = false;
                doc.remove(listbox);
            });
        }
    });
}
