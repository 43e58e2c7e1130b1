//! Layout strategies.
//!
//! A layout strategy turns the resolved children of a cluster into one container view. It gets
//! to see every child, including the ones that did not produce a view, and is responsible for
//! filtering them (see [`configure`] and [`present`]); what survives keeps its relative order.

use crate::backend::{Backend, StackBackend, TabBarBackend};
use crate::meta::{decode, FromMeta, Meta};
use crate::resource::ResourceBundle;
use core::fmt;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

pub mod stack;
pub mod tab_bar;

/// Identifies a layout strategy in a [`LayoutRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutId(Cow<'static, str>);

impl LayoutId {
    pub const fn from_static(name: &'static str) -> LayoutId {
        LayoutId(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for LayoutId {
    fn from(name: &'static str) -> LayoutId {
        LayoutId::from_static(name)
    }
}

impl From<String> for LayoutId {
    fn from(name: String) -> LayoutId {
        LayoutId(Cow::Owned(name))
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved cluster child, before any filtering.
#[derive(Debug)]
pub struct Candidate<V> {
    pub view: Option<V>,
    pub meta: Option<Meta>,
}

/// A cluster child that produced a view and whose configuration decoded.
#[derive(Debug)]
pub struct ResolvedChild<V, C> {
    pub view: V,
    pub config: C,
}

/// Drops children without a view.
pub fn present<V>(candidates: Vec<Candidate<V>>) -> Vec<V> {
    candidates
        .into_iter()
        .enumerate()
        .filter_map(|(position, candidate)| {
            if candidate.view.is_none() {
                log::trace!("dropping child {}: no view", position);
            }
            candidate.view
        })
        .collect()
}

/// Drops children without a view, then children whose metadata does not decode into `C`.
///
/// Children without a view never get their metadata decoded.
pub fn configure<C: FromMeta, V>(candidates: Vec<Candidate<V>>) -> Vec<ResolvedChild<V, C>> {
    candidates
        .into_iter()
        .enumerate()
        .filter_map(|(position, candidate)| {
            let view = match candidate.view {
                Some(view) => view,
                None => {
                    log::trace!("dropping child {}: no view", position);
                    return None;
                }
            };
            match decode::<C>(candidate.meta.as_ref()) {
                Ok(config) => Some(ResolvedChild { view, config }),
                Err(err) => {
                    log::debug!("dropping child {}: {}", position, err);
                    None
                }
            }
        })
        .collect()
}

/// Decodes cluster-level configuration, falling back to the default if it doesn’t decode.
pub fn cluster_config<C: FromMeta + Default>(meta: Option<&Meta>) -> C {
    decode(meta).unwrap_or_else(|err| {
        log::debug!("using default cluster configuration: {}", err);
        C::default()
    })
}

/// A layout algorithm for clusters.
pub trait LayoutStrategy<B: Backend>: Send + Sync {
    /// Creates a container from the cluster’s children (in order) and the cluster’s metadata.
    ///
    /// Returns `None` if no child is usable.
    fn layout(
        &self,
        backend: &B,
        children: Vec<Candidate<B::View>>,
        meta: Option<&Meta>,
    ) -> Option<B::View>;
}

impl<B, F> LayoutStrategy<B> for F
where
    B: Backend,
    F: Fn(&B, Vec<Candidate<B::View>>, Option<&Meta>) -> Option<B::View> + Send + Sync,
{
    fn layout(
        &self,
        backend: &B,
        children: Vec<Candidate<B::View>>,
        meta: Option<&Meta>,
    ) -> Option<B::View> {
        (self)(backend, children, meta)
    }
}

/// Maps layout identifiers to strategies.
pub struct LayoutRegistry<B: Backend> {
    strategies: HashMap<LayoutId, Box<dyn LayoutStrategy<B>>>,
}

impl<B: Backend> LayoutRegistry<B> {
    /// Creates an empty registry.
    pub fn new() -> LayoutRegistry<B> {
        LayoutRegistry {
            strategies: HashMap::new(),
        }
    }

    /// Registers a strategy, returning the one it replaces.
    pub fn register<L, S>(&mut self, id: L, strategy: S) -> Option<Box<dyn LayoutStrategy<B>>>
    where
        L: Into<LayoutId>,
        S: LayoutStrategy<B> + 'static,
    {
        self.strategies.insert(id.into(), Box::new(strategy))
    }

    pub fn get(&self, id: &LayoutId) -> Option<&dyn LayoutStrategy<B>> {
        self.strategies.get(id).map(|strategy| &**strategy)
    }

    pub fn contains(&self, id: &LayoutId) -> bool {
        self.strategies.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &LayoutId> {
        self.strategies.keys()
    }
}

impl<B: TabBarBackend + StackBackend> LayoutRegistry<B> {
    /// A registry with the tab bar and stack strategies.
    ///
    /// `bundle` is the default resource scope for tab icons.
    pub fn standard(bundle: Arc<dyn ResourceBundle>) -> LayoutRegistry<B> {
        let mut registry = LayoutRegistry::new();
        registry.register(tab_bar::TabBarLayout::ID, tab_bar::TabBarLayout::new(bundle));
        registry.register(stack::StackLayout::ID, stack::StackLayout);
        registry
    }
}

impl<B: Backend> Default for LayoutRegistry<B> {
    fn default() -> Self {
        LayoutRegistry::new()
    }
}

impl<B: Backend> fmt::Debug for LayoutRegistry<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.strategies.keys()).finish()
    }
}

#[cfg(test)]
#[path = "../tests/layout_tests.rs"]
mod tests;
