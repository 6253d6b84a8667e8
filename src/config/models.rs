use std::cmp::Ordering;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use crate::utils::natural;

/// Root configuration for studiobot.
///
/// Deserialized from a JSON file, validated once, then passed by reference into
/// the runtime and the workflow drivers. Nothing reads it as ambient state.
/// Every section is optional and falls back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate, Default)]
pub struct Config {
    /// Which workflow a run performs.
    #[serde(default)]
    pub mode: Mode,

    /// Raise diagnostic tracing to `debug`. Has no behavioral effect.
    #[serde(default)]
    pub debug: bool,

    /// Settings for the draft publishing wizard.
    #[serde(default)]
    #[validate]
    pub publish: PublishConfig,

    /// Settings for playlist sorting.
    #[serde(default)]
    #[validate]
    pub sort: SortConfig,

    /// Polling cadence, deadlines and settle delays.
    #[serde(default)]
    #[validate]
    pub timing: Timing,

    /// Where to find the browser tab to drive.
    #[serde(default)]
    #[validate]
    pub browser: BrowserConfig,
}

/// Workflow selection.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Walk every draft on the content page through the publish wizard.
    #[default]
    PublishDrafts,
    /// Reorder a playlist by name.
    SortPlaylist,
}

/// Target visibility. Ordered from most to least restricted.
#[derive(
    Debug, Copy, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[serde(alias = "Private")]
    Private,
    #[default]
    #[serde(alias = "Unlisted")]
    Unlisted,
    #[serde(alias = "Public")]
    Public,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate, Default)]
pub struct PublishConfig {
    /// Answer to the "made for kids" audience question.
    #[serde(default)]
    pub made_for_kids: bool,

    /// Visibility to publish each draft with.
    #[serde(default)]
    pub visibility: Visibility,
}

/// Built-in playlist orderings.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Natural name order: case-insensitive, digit runs compared numerically.
    #[default]
    NameAscending,
    /// Reverse of `name_ascending`.
    NameDescending,
}

impl SortOrder {
    /// Comparator over item names for this ordering.
    pub fn comparator(self) -> fn(&str, &str) -> Ordering {
        match self {
            SortOrder::NameAscending => natural::compare,
            SortOrder::NameDescending => natural::compare_descending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate, Default)]
pub struct SortConfig {
    #[serde(default)]
    pub order: SortOrder,
}

/// Timing table. Settle delays are fixed debounces against the application's own
/// re-rendering; they were tuned empirically and are the first thing to raise when
/// a run flakes on a slow machine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(default)]
pub struct Timing {
    /// Interval between two lookups while polling.
    #[validate(minimum = 1)]
    pub poll_interval_ms: u64,

    /// Deadline for elements a step requires.
    #[validate(minimum = 1)]
    pub element_timeout_ms: u64,

    /// Deadline for existence probes used to classify rows.
    #[validate(minimum = 1)]
    pub probe_timeout_ms: u64,

    /// Pause after each wizard interaction and after each published draft.
    pub settle_ms: u64,

    /// Pause between classifying rows and opening the first wizard.
    pub classify_pause_ms: u64,

    /// Pause after each playlist item is moved.
    pub sort_pause_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            poll_interval_ms: 10,
            element_timeout_ms: 5000,
            probe_timeout_ms: 20,
            settle_ms: 50,
            classify_pause_ms: 1000,
            sort_pause_ms: 500,
        }
    }
}

impl Timing {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn element_timeout(&self) -> Duration {
        Duration::from_millis(self.element_timeout_ms)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn classify_pause(&self) -> Duration {
        Duration::from_millis(self.classify_pause_ms)
    }

    pub fn sort_pause(&self) -> Duration {
        Duration::from_millis(self.sort_pause_ms)
    }
}

/// DevTools connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(default)]
pub struct BrowserConfig {
    /// DevTools endpoint of a browser started with `--remote-debugging-port`
    /// (`http://host:port` or a `ws://` debugger URL).
    #[validate(min_length = 1)]
    pub endpoint: String,

    /// The first tab whose URL contains this substring is driven.
    #[validate(min_length = 1)]
    pub page_url_contains: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:9222".to_string(),
            page_url_contains: "youtube.com".to_string(),
        }
    }
}
