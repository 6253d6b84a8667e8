//! Chrome DevTools Protocol backend.
//!
//! Attaches to an already running browser (started with `--remote-debugging-port`)
//! and drives the first tab whose URL contains the configured substring. The user
//! is expected to be signed in and to have the target page open before the run.
//!
//! Element handles are Runtime remote objects, never DOM node ids. `DOM.getDocument`
//! discards every node id handed out before it, so a row or playlist item saved at
//! the start of a run would stop answering scoped lookups after the first
//! document-wide poll. Remote objects stay valid until released or until the page
//! navigates, so every lookup here is a `querySelectorAll` run in page JavaScript.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::js_protocol::runtime::{
    CallArgument, CallFunctionOnParams, EvaluateParams, GetPropertiesParams, PropertyDescriptor,
    ReleaseObjectParams, RemoteObject, RemoteObjectId,
};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use super::{Document, DomError, Region};
use crate::config::BrowserConfig;

const MOUSE_DOWN_JS: &str = "function() { \
    this.dispatchEvent(new MouseEvent('mousedown', { bubbles: true, cancelable: false, view: window })); \
}";
const CLICK_JS: &str = "function() { this.click(); }";
const TEXT_CONTENT_JS: &str = "function() { return this.textContent; }";
const SELECT_JS: &str = "function(selector) { return Array.from(this.querySelectorAll(selector)); }";

/// Tab discovery attempts after connecting; targets attach asynchronously.
const PAGE_LOOKUP_ATTEMPTS: usize = 10;
const PAGE_LOOKUP_DELAY: Duration = Duration::from_millis(200);

/// Handle to one DOM element inside the attached tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdpNode(RemoteObjectId);

/// A live browser tab seen as a [`Document`].
pub struct CdpDocument {
    // Dropping the browser closes the connection, so it lives as long as the page.
    _browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl CdpDocument {
    /// Connect to the DevTools endpoint and pick the matching tab.
    pub async fn connect(cfg: &BrowserConfig) -> Result<Self> {
        info!(target: "studiobot::cdp", endpoint = %cfg.endpoint, "Connecting to browser");
        let (mut browser, mut handler) = Browser::connect(cfg.endpoint.clone())
            .await
            .with_context(|| format!("Failed to connect to DevTools endpoint {}", cfg.endpoint))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!(target: "studiobot::cdp", error = %e, "DevTools handler error");
                }
            }
            debug!(target: "studiobot::cdp", "DevTools handler finished");
        });

        browser
            .fetch_targets()
            .await
            .context("Failed to list browser targets")?;

        for attempt in 0..PAGE_LOOKUP_ATTEMPTS {
            let pages = browser.pages().await.context("Failed to list pages")?;
            for page in pages {
                let url = page.url().await.ok().flatten().unwrap_or_default();
                trace!(target: "studiobot::cdp", %url, attempt, "Inspecting tab");
                if url.contains(&cfg.page_url_contains) {
                    info!(target: "studiobot::cdp", %url, "Attached to tab");
                    return Ok(Self {
                        _browser: browser,
                        page,
                        handler,
                    });
                }
            }
            tokio::time::sleep(PAGE_LOOKUP_DELAY).await;
        }

        handler.abort();
        bail!(
            "No open tab with a URL containing '{}'",
            cfg.page_url_contains
        )
    }

    async fn call(&self, node: &CdpNode, function: &str) -> Result<Option<serde_json::Value>, DomError> {
        let params = CallFunctionOnParams::builder()
            .function_declaration(function)
            .object_id(node.0.clone())
            .return_by_value(true)
            .build()
            .map_err(backend)?;
        let ret = self.page.execute(params).await.map_err(backend)?.result;
        if let Some(ex) = ret.exception_details {
            return Err(DomError::Backend(ex.text));
        }
        Ok(ret.result.value)
    }

    /// Split a JS array of elements into one handle per element, then drop the array.
    async fn elements(&self, array: RemoteObject) -> Result<Vec<CdpNode>, DomError> {
        let Some(array) = array.object_id else {
            return Ok(Vec::new());
        };
        let mut params = GetPropertiesParams::new(array.clone());
        params.own_properties = Some(true);
        let props = self.page.execute(params).await.map_err(backend);

        if let Err(e) = self.page.execute(ReleaseObjectParams::new(array)).await {
            trace!(target: "studiobot::cdp", error = %e, "Failed to release result array");
        }
        Ok(element_handles(props?.result.result))
    }
}

fn select_in_document(selector: &str) -> Result<EvaluateParams, DomError> {
    let literal = serde_json::to_string(selector).map_err(backend)?;
    Ok(EvaluateParams::new(format!(
        "Array.from(document.querySelectorAll({literal}))"
    )))
}

fn select_in_element(scope: &CdpNode, selector: &str) -> Result<CallFunctionOnParams, DomError> {
    CallFunctionOnParams::builder()
        .function_declaration(SELECT_JS)
        .object_id(scope.0.clone())
        .argument(CallArgument::builder().value(selector).build())
        .build()
        .map_err(backend)
}

/// Array index properties carry the elements; `length` and friends are skipped.
fn element_handles(props: Vec<PropertyDescriptor>) -> Vec<CdpNode> {
    let mut indexed: Vec<(usize, RemoteObjectId)> = props
        .into_iter()
        .filter_map(|p| {
            let index = p.name.parse::<usize>().ok()?;
            Some((index, p.value?.object_id?))
        })
        .collect();
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, id)| CdpNode(id)).collect()
}

impl Drop for CdpDocument {
    fn drop(&mut self) {
        self.handler.abort();
    }
}

fn backend(e: impl fmt::Display) -> DomError {
    DomError::Backend(e.to_string())
}

#[async_trait]
impl Document for CdpDocument {
    type Node = CdpNode;

    async fn query(
        &self,
        region: &Region<CdpNode>,
        selector: &str,
    ) -> Result<Option<CdpNode>, DomError> {
        Ok(self.query_all(region, selector).await?.into_iter().next())
    }

    async fn query_all(
        &self,
        region: &Region<CdpNode>,
        selector: &str,
    ) -> Result<Vec<CdpNode>, DomError> {
        let (array, exception) = match region {
            Region::Document => {
                let ret = self.page.execute(select_in_document(selector)?).await;
                let ret = ret.map_err(backend)?.result;
                (ret.result, ret.exception_details)
            }
            Region::Element(scope) => {
                let ret = self.page.execute(select_in_element(scope, selector)?).await;
                let ret = ret.map_err(backend)?.result;
                (ret.result, ret.exception_details)
            }
        };
        // An invalid selector throws in the page.
        if let Some(ex) = exception {
            return Err(DomError::Backend(ex.text));
        }
        self.elements(array).await
    }

    async fn text_content(&self, node: &CdpNode) -> Result<String, DomError> {
        let value = self.call(node, TEXT_CONTENT_JS).await?;
        Ok(value
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default())
    }

    async fn mouse_down(&self, node: &CdpNode) -> Result<(), DomError> {
        self.call(node, MOUSE_DOWN_JS).await.map(|_| ())
    }

    async fn click(&self, node: &CdpNode) -> Result<(), DomError> {
        self.call(node, CLICK_JS).await.map(|_| ())
    }
}
