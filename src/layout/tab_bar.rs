//! Tabbed containers.
//!
//! Every child of a tab bar cluster becomes one tab and needs a [`TabConfig`]; children without
//! one are dropped. The cluster itself may carry a [`TabBarConfig`] to pick the initially
//! selected tab.
//!
//! Weakly-typed metadata uses these keys:
//!
//! | shape          | key              | type    | required |
//! |----------------|------------------|---------|----------|
//! | `TabConfig`    | `title`          | string  | yes      |
//! | `TabConfig`    | `icon_name`      | string  | yes      |
//! | `TabBarConfig` | `selected_index` | integer | no       |

use super::{cluster_config, configure, Candidate, LayoutId, LayoutStrategy, ResolvedChild};
use crate::backend::TabBarBackend;
use crate::meta::{DecodeError, FromMeta, Meta};
use crate::resource::{Icon, ResourceBundle};
use serde::Deserialize;
use std::convert::TryFrom;
use std::sync::Arc;

/// Configuration of a single tab.
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfig {
    pub title: String,
    pub icon_name: String,

    /// The resource scope for the icon; the layout’s default bundle is used if `None`.
    ///
    /// Can only be set on typed metadata.
    #[serde(skip)]
    pub bundle: Option<Arc<dyn ResourceBundle>>,
}

impl TabConfig {
    pub fn new<T: Into<String>, I: Into<String>>(title: T, icon_name: I) -> TabConfig {
        TabConfig {
            title: title.into(),
            icon_name: icon_name.into(),
            bundle: None,
        }
    }

    pub fn with_bundle(mut self, bundle: Arc<dyn ResourceBundle>) -> TabConfig {
        self.bundle = Some(bundle);
        self
    }
}

impl FromMeta for TabConfig {}

/// Configuration of a tab bar cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TabBarConfig {
    /// The tab to select initially.
    ///
    /// Ignored unless it is a valid index into the tabs that survived filtering.
    #[serde(default)]
    pub selected_index: Option<i64>,
}

impl TabBarConfig {
    pub fn selecting(index: i64) -> TabBarConfig {
        TabBarConfig {
            selected_index: Some(index),
        }
    }

    /// Returns the index to select among `count` tabs.
    ///
    /// Falls back to the first tab if no index was requested or it is out of bounds.
    pub fn selection(&self, count: usize) -> usize {
        let requested = match self.selected_index {
            Some(index) => index,
            None => return 0,
        };
        match usize::try_from(requested) {
            Ok(index) if index < count => index,
            _ => {
                log::debug!(
                    "ignoring selected index {} for {} tab(s)",
                    requested,
                    count
                );
                0
            }
        }
    }
}

impl FromMeta for TabBarConfig {
    fn absent() -> Result<Self, DecodeError> {
        Ok(TabBarConfig::default())
    }
}

/// A configured tab, as handed to the backend.
#[derive(Debug, Clone)]
pub struct Tab<V> {
    pub title: String,
    /// `None` if the icon could not be found in its bundle.
    pub icon: Option<Icon>,
    pub view: V,
}

/// Lays out children as tabs.
#[derive(Debug, Clone)]
pub struct TabBarLayout {
    bundle: Arc<dyn ResourceBundle>,
}

impl TabBarLayout {
    pub const ID: LayoutId = LayoutId::from_static("tab_bar");

    /// Creates a tab bar layout that looks up icons in `bundle` by default.
    pub fn new(bundle: Arc<dyn ResourceBundle>) -> TabBarLayout {
        TabBarLayout { bundle }
    }

    fn tab<V>(&self, child: ResolvedChild<V, TabConfig>) -> Tab<V> {
        let ResolvedChild { view, config } = child;
        let bundle = config.bundle.as_ref().unwrap_or(&self.bundle);
        let icon = bundle.icon(&config.icon_name);
        if icon.is_none() {
            log::debug!("tab {:?} has no icon {:?}", config.title, config.icon_name);
        }
        Tab {
            title: config.title,
            icon,
            view,
        }
    }
}

impl<B: TabBarBackend> LayoutStrategy<B> for TabBarLayout {
    fn layout(
        &self,
        backend: &B,
        children: Vec<Candidate<B::View>>,
        meta: Option<&Meta>,
    ) -> Option<B::View> {
        let children = configure::<TabConfig, _>(children);
        if children.is_empty() {
            log::debug!("tab bar has no usable children");
            return None;
        }

        let config: TabBarConfig = cluster_config(meta);
        let selected = config.selection(children.len());
        let tabs = children.into_iter().map(|child| self.tab(child)).collect();
        Some(backend.tab_bar(tabs, selected))
    }
}

#[cfg(test)]
#[path = "../tests/tab_bar_tests.rs"]
mod tests;
