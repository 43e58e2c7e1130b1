//! Stacked containers.

use super::{cluster_config, present, Candidate, LayoutId, LayoutStrategy};
use crate::backend::StackBackend;
use crate::meta::{DecodeError, FromMeta, Meta};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Default for Axis {
    fn default() -> Self {
        Axis::Vertical
    }
}

/// How arranged views share the stack’s length along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    Fill,
    FillEqually,
    FillProportionally,
    EqualSpacing,
    EqualCentering,
}

impl Default for Distribution {
    fn default() -> Self {
        Distribution::Fill
    }
}

/// How arranged views are placed across the stack’s axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Fill,
    Leading,
    Center,
    Trailing,
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Fill
    }
}

/// Configuration of a stack cluster. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub axis: Axis,
    pub spacing: f64,
    pub distribution: Distribution,
    pub alignment: Alignment,
}

impl FromMeta for StackConfig {
    fn absent() -> Result<Self, DecodeError> {
        Ok(StackConfig::default())
    }
}

/// Arranges children along one axis. Children need no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackLayout;

impl StackLayout {
    pub const ID: LayoutId = LayoutId::from_static("stack");
}

impl<B: StackBackend> LayoutStrategy<B> for StackLayout {
    fn layout(
        &self,
        backend: &B,
        children: Vec<Candidate<B::View>>,
        meta: Option<&Meta>,
    ) -> Option<B::View> {
        let views = present(children);
        if views.is_empty() {
            log::debug!("stack has no usable children");
            return None;
        }

        let config: StackConfig = cluster_config(meta);
        Some(backend.stack(views, &config))
    }
}
