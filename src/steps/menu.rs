//! Playlist item context menu.

use tracing::debug;

use super::selectors as sel;
use crate::dom::{Document, Region};
use crate::error::{BotError, Result, StepKind};
use crate::executor::ActionExecutor;

/// One entry of a playlist page.
pub struct PlaylistItem<'a, D: Document> {
    exec: &'a ActionExecutor<D>,
    region: Region<D::Node>,
    name: String,
}

impl<'a, D: Document> PlaylistItem<'a, D> {
    /// Wrap an item node, reading its title once.
    ///
    /// An item without a title element is an error rather than an empty name, which
    /// would sort first and get moved.
    pub async fn new(exec: &'a ActionExecutor<D>, node: D::Node) -> Result<Self> {
        let region = Region::Element(node);
        let title = exec
            .query(sel::ITEM_TITLE, &region)
            .await?
            .ok_or_else(|| BotError::not_found(StepKind::ListItem, sel::ITEM_TITLE))?;
        let name = exec.text(&title).await?;
        Ok(Self { exec, region, name })
    }

    /// Every item currently on the page, in page order.
    pub async fn all(exec: &'a ActionExecutor<D>) -> Result<Vec<Self>> {
        let nodes = exec.query_all(sel::PLAYLIST_ITEM, &Region::Document).await?;
        let mut items = Vec::with_capacity(nodes.len());
        for node in nodes {
            items.push(Self::new(exec, node).await?);
        }
        Ok(items)
    }

    /// Trimmed title text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Open the item's action menu.
    ///
    /// Fails with [`BotError::MenuEmpty`] when the menu never lists an entry, so no
    /// positional action is attempted against a menu that is not there.
    pub async fn open_menu(&self) -> Result<ContextMenu<'a, D>> {
        let trigger = self
            .exec
            .query(sel::MENU_BUTTON, &self.region)
            .await?
            .ok_or_else(|| BotError::not_found(StepKind::ListItem, sel::MENU_BUTTON))?;
        self.exec.activate(&trigger).await?;

        let listbox = self
            .exec
            .require(StepKind::ListItem, sel::ITEM_MENU, &Region::Document)
            .await?;
        let region = Region::Element(listbox);

        let entry = self
            .exec
            .find(sel::MENU_ENTRY, &region, self.exec.timing().element_timeout())
            .await?;
        if entry.is_none() {
            return Err(BotError::MenuEmpty {
                item: self.name.clone(),
            });
        }

        debug!(target: "studiobot::menu", name = %self.name, "Menu opened");
        Ok(ContextMenu {
            exec: self.exec,
            region,
        })
    }
}

/// An open context menu. Its entries are only addressable by position.
pub struct ContextMenu<'a, D: Document> {
    exec: &'a ActionExecutor<D>,
    region: Region<D::Node>,
}

impl<D: Document> ContextMenu<'_, D> {
    pub async fn move_to_top(self) -> Result<()> {
        self.pick(sel::MOVE_TO_TOP_INDEX).await
    }

    pub async fn move_to_bottom(self) -> Result<()> {
        self.pick(sel::MOVE_TO_BOTTOM_INDEX).await
    }

    async fn pick(self, index: usize) -> Result<()> {
        let entry = self
            .exec
            .nth(StepKind::ContextMenu, sel::MENU_ENTRY, &self.region, index)
            .await?;
        self.exec.activate(&entry).await?;
        debug!(target: "studiobot::menu", index, "Menu entry activated");
        Ok(())
    }
}
