//! Scripted in-memory document used by the unit tests.
//!
//! Nodes carry the exact selector strings they answer to instead of real
//! tag/class/id attributes, so a test states "this node matches
//! `#done-button`" directly. Click handlers run after the tree lock is
//! released and may mutate the tree or spawn delayed mutations.
//!
//! [`FakeDocument::with_volatile_ids`] reproduces how DevTools node ids behave: a
//! document-wide lookup retires every handle issued before it, and a retired
//! handle can no longer scope a lookup until it is refreshed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::{Document, DomError, Region};

pub(crate) type NodeId = usize;
pub(crate) type ClickHandler = Arc<dyn Fn(&FakeDocument, NodeId) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Interaction {
    MouseDown(NodeId),
    Click(NodeId),
}

struct FakeNode {
    parent: Option<NodeId>,
    selectors: Vec<String>,
    text: String,
    removed: bool,
    on_click: Option<ClickHandler>,
}

#[derive(Default)]
struct Tree {
    nodes: Vec<FakeNode>,
    log: Vec<Interaction>,
    volatile: bool,
    generation: u64,
    issued: HashMap<NodeId, u64>,
}

impl Tree {
    /// Run a lookup, enforcing handle freshness in volatile mode.
    fn lookup(&mut self, region: &Region<NodeId>, selector: &str) -> Result<Vec<NodeId>, DomError> {
        if self.volatile {
            match region {
                Region::Document => self.generation += 1,
                Region::Element(scope) => {
                    if self.issued.get(scope) != Some(&self.generation) {
                        return Err(DomError::Backend(format!("stale node id {scope}")));
                    }
                }
            }
        }
        let found = self.matches(region, selector);
        for &id in &found {
            self.issued.insert(id, self.generation);
        }
        Ok(found)
    }

    fn attached(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current];
            if node.removed {
                return false;
            }
            cursor = node.parent;
        }
        true
    }

    fn within(&self, id: NodeId, scope: NodeId) -> bool {
        let mut cursor = self.nodes[id].parent;
        while let Some(current) = cursor {
            if current == scope {
                return true;
            }
            cursor = self.nodes[current].parent;
        }
        false
    }

    fn matches(&self, region: &Region<NodeId>, selector: &str) -> Vec<NodeId> {
        (0..self.nodes.len())
            .filter(|&id| self.attached(id))
            .filter(|&id| self.nodes[id].selectors.iter().any(|s| s == selector))
            .filter(|&id| match region {
                Region::Document => true,
                Region::Element(scope) => self.attached(*scope) && self.within(id, *scope),
            })
            .collect()
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeDocument {
    tree: Arc<Mutex<Tree>>,
}

impl FakeDocument {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A document whose handles go stale after every document-wide lookup.
    pub(crate) fn with_volatile_ids() -> Self {
        let doc = Self::default();
        doc.lock().volatile = true;
        doc
    }

    fn lock(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock().unwrap()
    }

    /// Append a node under `parent` (or at the document root) answering to `selectors`.
    pub(crate) fn add(&self, parent: Option<NodeId>, selectors: &[&str]) -> NodeId {
        let mut tree = self.lock();
        tree.nodes.push(FakeNode {
            parent,
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            text: String::new(),
            removed: false,
            on_click: None,
        });
        tree.nodes.len() - 1
    }

    pub(crate) fn set_text(&self, id: NodeId, text: &str) {
        self.lock().nodes[id].text = text.to_string();
    }

    pub(crate) fn on_click(
        &self,
        id: NodeId,
        handler: impl Fn(&FakeDocument, NodeId) + Send + Sync + 'static,
    ) {
        self.lock().nodes[id].on_click = Some(Arc::new(handler));
    }

    /// Detach a node and its subtree.
    pub(crate) fn remove(&self, id: NodeId) {
        self.lock().nodes[id].removed = true;
    }

    pub(crate) fn interactions(&self) -> Vec<Interaction> {
        self.lock().log.clone()
    }

    pub(crate) fn clicks(&self) -> Vec<NodeId> {
        self.interactions()
            .into_iter()
            .filter_map(|i| match i {
                Interaction::Click(id) => Some(id),
                Interaction::MouseDown(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl Document for FakeDocument {
    type Node = NodeId;

    async fn query(
        &self,
        region: &Region<NodeId>,
        selector: &str,
    ) -> Result<Option<NodeId>, DomError> {
        Ok(self.lock().lookup(region, selector)?.into_iter().next())
    }

    async fn query_all(
        &self,
        region: &Region<NodeId>,
        selector: &str,
    ) -> Result<Vec<NodeId>, DomError> {
        self.lock().lookup(region, selector)
    }

    async fn text_content(&self, node: &NodeId) -> Result<String, DomError> {
        Ok(self.lock().nodes[*node].text.clone())
    }

    async fn mouse_down(&self, node: &NodeId) -> Result<(), DomError> {
        self.lock().log.push(Interaction::MouseDown(*node));
        Ok(())
    }

    async fn click(&self, node: &NodeId) -> Result<(), DomError> {
        let handler = {
            let mut tree = self.lock();
            tree.log.push(Interaction::Click(*node));
            tree.nodes[*node].on_click.clone()
        };
        if let Some(handler) = handler {
            handler(self, *node);
        }
        Ok(())
    }

    async fn refresh(&self, node: &NodeId) -> Result<NodeId, DomError> {
        let mut tree = self.lock();
        let generation = tree.generation;
        tree.issued.insert(*node, generation);
        Ok(*node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scoped_queries_skip_removed_subtrees() {
        let doc = FakeDocument::new();
        let a = doc.add(None, &["row"]);
        let b = doc.add(None, &["row"]);
        let a_btn = doc.add(Some(a), &["button"]);
        let _b_btn = doc.add(Some(b), &["button"]);

        let found = doc.query(&Region::Element(a), "button").await.unwrap();
        assert_eq!(found, Some(a_btn));
        assert_eq!(doc.query_all(&Region::Document, "button").await.unwrap().len(), 2);

        doc.remove(a);
        assert!(doc.query(&Region::Element(a), "button").await.unwrap().is_none());
        assert_eq!(doc.query_all(&Region::Document, "row").await.unwrap(), vec![b]);
    }

    #[tokio::test]
    async fn volatile_handles_expire_on_document_lookups() {
        let doc = FakeDocument::with_volatile_ids();
        let row = doc.add(None, &["row"]);
        let button = doc.add(Some(row), &["button"]);
        doc.add(None, &["dialog"]);

        let rows = doc.query_all(&Region::Document, "row").await.unwrap();
        assert_eq!(rows, vec![row]);
        let scope = Region::Element(row);
        assert_eq!(doc.query(&scope, "button").await.unwrap(), Some(button));

        doc.query(&Region::Document, "dialog").await.unwrap();
        let err = doc.query(&scope, "button").await.unwrap_err();
        assert_eq!(err.to_string(), format!("document backend failed: stale node id {row}"));

        let fresh = doc.refresh(&row).await.unwrap();
        assert_eq!(doc.query(&Region::Element(fresh), "button").await.unwrap(), Some(button));
    }
}
