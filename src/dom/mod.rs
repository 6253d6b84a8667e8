/*!
Document access layer.

The bot never owns the page it drives. Everything it knows about the UI comes
through the [`Document`] trait: scoped selector lookups, reading an element's
text, and the two halves of a simulated click. Implementations:

- `cdp.rs`  -> `CdpDocument` (a live Chrome tab over the DevTools Protocol)
- `fake.rs` -> `FakeDocument` (in-memory tree, tests only)
- `scripted.rs` -> `FakeStudio` / `FakePlaylist` (page behavior on top of it, tests only)

Node handles are opaque. A handle whose subtree has been replaced by the
application is not detected as stale; lookups under it simply find nothing.
*/

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

pub mod cdp;
#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
pub(crate) mod scripted;

pub use cdp::CdpDocument;

/// Failure of the document backend itself (as opposed to an element being absent).
#[derive(Debug, Error)]
pub enum DomError {
    #[error("document backend failed: {0}")]
    Backend(String),
}

/// Search scope for lookups: the whole document or the subtree under one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region<N> {
    Document,
    Element(N),
}

impl<N> Region<N> {
    pub fn element(&self) -> Option<&N> {
        match self {
            Region::Document => None,
            Region::Element(node) => Some(node),
        }
    }
}

/// Read and click access to an externally owned, mutable document tree.
#[async_trait]
pub trait Document: Send + Sync {
    /// Opaque handle to one element.
    type Node: Clone + Debug + Send + Sync;

    /// First descendant of `region` matching `selector`, if any (`querySelector`).
    async fn query(
        &self,
        region: &Region<Self::Node>,
        selector: &str,
    ) -> Result<Option<Self::Node>, DomError>;

    /// All descendants of `region` matching `selector`, in document order (`querySelectorAll`).
    async fn query_all(
        &self,
        region: &Region<Self::Node>,
        selector: &str,
    ) -> Result<Vec<Self::Node>, DomError>;

    /// The element's `textContent`, untrimmed.
    async fn text_content(&self, node: &Self::Node) -> Result<String, DomError>;

    /// Dispatch a `mousedown` MouseEvent (bubbles, not cancelable) at the element.
    async fn mouse_down(&self, node: &Self::Node) -> Result<(), DomError>;

    /// Invoke the element's native `click()`.
    async fn click(&self, node: &Self::Node) -> Result<(), DomError>;

    /// Re-establish a handle before it scopes another lookup.
    ///
    /// A handle kept across a document-wide lookup may no longer be usable as a
    /// scope on some backends. Handles that survive such lookups are returned as is.
    async fn refresh(&self, node: &Self::Node) -> Result<Self::Node, DomError> {
        Ok(node.clone())
    }
}

/// `region` with its scope element refreshed; see [`Document::refresh`].
pub async fn refreshed<D: Document + ?Sized>(
    doc: &D,
    region: &Region<D::Node>,
) -> Result<Region<D::Node>, DomError> {
    Ok(match region {
        Region::Document => Region::Document,
        Region::Element(node) => Region::Element(doc.refresh(node).await?),
    })
}
