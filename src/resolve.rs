//! The resolution engine.
//!
//! Resolution is a depth-first walk over a [`Node`] tree: leaves run their builders, clusters
//! resolve all of their children first and then hand them to their layout strategy, whose
//! container becomes the cluster’s own view. Anything that produces no view simply contributes
//! nothing to its parent; the only hard failure is a cluster naming a layout that isn’t
//! registered.

use crate::backend::{Backend, StackBackend, TabBarBackend};
use crate::layout::{Candidate, LayoutId, LayoutRegistry, LayoutStrategy};
use crate::node::Node;
use crate::resource::ResourceBundle;
use std::panic;
use std::sync::Arc;
use thiserror::Error;

/// Errors that may occur when resolving a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no layout strategy registered as `{0}`")]
    UnknownLayout(LayoutId),
}

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Resolves the children of a cluster, in order.
type ChildResolver<B> =
    fn(&Resolver<B>, &[Node<<B as Backend>::View>]) -> Result<Vec<Option<<B as Backend>::View>>>;

/// Turns node trees into native views.
pub struct Resolver<B: Backend> {
    backend: B,
    layouts: LayoutRegistry<B>,
}

impl<B: Backend> Resolver<B> {
    /// Creates a resolver without any layout strategies.
    pub fn new(backend: B) -> Resolver<B> {
        Resolver::with_registry(backend, LayoutRegistry::new())
    }

    pub fn with_registry(backend: B, layouts: LayoutRegistry<B>) -> Resolver<B> {
        Resolver { backend, layouts }
    }

    /// Registers a layout strategy, replacing any strategy with the same id.
    pub fn with_layout<L, S>(mut self, id: L, strategy: S) -> Resolver<B>
    where
        L: Into<LayoutId>,
        S: LayoutStrategy<B> + 'static,
    {
        self.layouts.register(id, strategy);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn layouts(&self) -> &LayoutRegistry<B> {
        &self.layouts
    }

    pub fn layouts_mut(&mut self) -> &mut LayoutRegistry<B> {
        &mut self.layouts
    }

    /// Resolves a tree into a view.
    ///
    /// Returns `Ok(None)` if the tree produced nothing usable.
    ///
    /// # Errors
    /// Fails as soon as a cluster with an unregistered layout is reached; none of that cluster’s
    /// children are resolved in that case.
    pub fn resolve(&self, node: &Node<B::View>) -> Result<Option<B::View>> {
        self.resolve_node(node, Resolver::sequential)
    }

    /// Checks that every cluster in the tree names a registered layout, without running any
    /// builders.
    pub fn validate(&self, node: &Node<B::View>) -> Result<()> {
        match node {
            Node::Leaf { .. } => Ok(()),
            Node::Cluster {
                layout, children, ..
            } => {
                self.strategy(layout)?;
                children.iter().try_for_each(|child| self.validate(child))
            }
            Node::Wrapper { child, .. } | Node::Rule { child, .. } => self.validate(child),
        }
    }

    fn strategy(&self, id: &LayoutId) -> Result<&dyn LayoutStrategy<B>> {
        self.layouts
            .get(id)
            .ok_or_else(|| ResolveError::UnknownLayout(id.clone()))
    }

    fn resolve_node(
        &self,
        node: &Node<B::View>,
        resolve_children: ChildResolver<B>,
    ) -> Result<Option<B::View>> {
        match node {
            Node::Leaf { builder, meta } => {
                let view = builder(meta.as_ref());
                if view.is_none() {
                    log::trace!("leaf produced no view");
                }
                Ok(view)
            }
            Node::Cluster {
                layout,
                children,
                meta,
            } => {
                let strategy = self.strategy(layout)?;
                let views = resolve_children(self, children)?;
                let candidates: Vec<_> = views
                    .into_iter()
                    .zip(children)
                    .map(|(view, child)| Candidate {
                        view,
                        meta: child.meta().cloned(),
                    })
                    .collect();

                let total = candidates.len();
                let container = strategy.layout(&self.backend, candidates, meta.as_ref());
                if container.is_none() {
                    log::debug!("{} cluster with {} children resolved to nothing", layout, total);
                }
                Ok(container)
            }
            Node::Wrapper {
                builder,
                child,
                meta,
            } => {
                let view = self.resolve_node(child, resolve_children)?;
                Ok(builder(view, meta.as_ref()))
            }
            Node::Rule { rule, child } => {
                if rule.evaluate() {
                    self.resolve_node(child, resolve_children)
                } else {
                    log::trace!("rule does not hold; skipping {:?}", child);
                    Ok(None)
                }
            }
        }
    }

    fn sequential(&self, children: &[Node<B::View>]) -> Result<Vec<Option<B::View>>> {
        children
            .iter()
            .map(|child| self.resolve_node(child, Resolver::sequential))
            .collect()
    }
}

impl<B: TabBarBackend + StackBackend> Resolver<B> {
    /// Creates a resolver with the standard layouts (see [`LayoutRegistry::standard`]).
    pub fn standard(backend: B, bundle: Arc<dyn ResourceBundle>) -> Resolver<B> {
        Resolver::with_registry(backend, LayoutRegistry::standard(bundle))
    }
}

impl<B> Resolver<B>
where
    B: Backend + Sync,
    B::View: Send,
{
    /// Like [`resolve`](Resolver::resolve), but resolves the children of every cluster on
    /// separate threads.
    ///
    /// Children are put back into their original order before the layout strategy sees them,
    /// so the result is the same as with sequential resolution given deterministic builders.
    /// Builders run concurrently with their siblings.
    ///
    /// # Panics
    /// If a builder panics, the panic is resumed on the calling thread.
    pub fn resolve_parallel(&self, node: &Node<B::View>) -> Result<Option<B::View>> {
        self.resolve_node(node, Resolver::fan_out)
    }

    fn fan_out(&self, children: &[Node<B::View>]) -> Result<Vec<Option<B::View>>> {
        let joined = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = children
                .iter()
                .map(|child| scope.spawn(move |_| self.resolve_node(child, Resolver::fan_out)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        })
        .unwrap_or_else(|payload| panic::resume_unwind(payload));

        joined
            .into_iter()
            .map(|result| result.unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    }
}
