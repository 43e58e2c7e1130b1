//! Component nodes.

use crate::layout::LayoutId;
use crate::meta::Meta;
use crate::rule::Rule;
use core::fmt;
use std::sync::Arc;

/// Builds a leaf view from the leaf’s metadata.
///
/// Returning `None` is not an error; the leaf simply contributes nothing.
pub type ViewBuilder<V> = Arc<dyn Fn(Option<&Meta>) -> Option<V> + Send + Sync>;

/// Builds a wrapper view around the (possibly absent) view of its child.
pub type WrapperBuilder<V> = Arc<dyn Fn(Option<V>, Option<&Meta>) -> Option<V> + Send + Sync>;

/// A declarative description of (part of) a view hierarchy.
///
/// Nodes are cheap to create and do nothing on their own; they are turned into native views by a
/// [`Resolver`](crate::Resolver). Resolving the same tree twice runs every builder again.
pub enum Node<V> {
    /// Produces a single view.
    Leaf {
        builder: ViewBuilder<V>,
        meta: Option<Meta>,
    },
    /// Composes its children with a layout strategy. Child order is display order.
    Cluster {
        layout: LayoutId,
        children: Vec<Node<V>>,
        meta: Option<Meta>,
    },
    /// Wraps the view of exactly one child.
    Wrapper {
        builder: WrapperBuilder<V>,
        child: Box<Node<V>>,
        meta: Option<Meta>,
    },
    /// Shows its child only while the rule holds.
    Rule { rule: Rule, child: Box<Node<V>> },
}

impl<V> Node<V> {
    pub fn leaf<F>(builder: F, meta: Option<Meta>) -> Node<V>
    where
        F: Fn(Option<&Meta>) -> Option<V> + Send + Sync + 'static,
    {
        Node::Leaf {
            builder: Arc::new(builder),
            meta,
        }
    }

    pub fn cluster<L: Into<LayoutId>>(
        layout: L,
        children: Vec<Node<V>>,
        meta: Option<Meta>,
    ) -> Node<V> {
        Node::Cluster {
            layout: layout.into(),
            children,
            meta,
        }
    }

    pub fn wrapper<F>(builder: F, child: Node<V>, meta: Option<Meta>) -> Node<V>
    where
        F: Fn(Option<V>, Option<&Meta>) -> Option<V> + Send + Sync + 'static,
    {
        Node::Wrapper {
            builder: Arc::new(builder),
            child: Box::new(child),
            meta,
        }
    }

    pub fn rule(rule: Rule, child: Node<V>) -> Node<V> {
        Node::Rule {
            rule,
            child: Box::new(child),
        }
    }

    /// The metadata this node presents to an enclosing cluster.
    ///
    /// Rule nodes are transparent and present their child’s metadata.
    pub fn meta(&self) -> Option<&Meta> {
        match self {
            Node::Leaf { meta, .. } | Node::Cluster { meta, .. } | Node::Wrapper { meta, .. } => {
                meta.as_ref()
            }
            Node::Rule { child, .. } => child.meta(),
        }
    }
}

// builders are reference counted, so cloning a tree is cheap
impl<V> Clone for Node<V> {
    fn clone(&self) -> Self {
        match self {
            Node::Leaf { builder, meta } => Node::Leaf {
                builder: Arc::clone(builder),
                meta: meta.clone(),
            },
            Node::Cluster {
                layout,
                children,
                meta,
            } => Node::Cluster {
                layout: layout.clone(),
                children: children.clone(),
                meta: meta.clone(),
            },
            Node::Wrapper {
                builder,
                child,
                meta,
            } => Node::Wrapper {
                builder: Arc::clone(builder),
                child: child.clone(),
                meta: meta.clone(),
            },
            Node::Rule { rule, child } => Node::Rule {
                rule: rule.clone(),
                child: child.clone(),
            },
        }
    }
}

impl<V> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Leaf { meta, .. } => f
                .debug_struct("Leaf")
                .field("builder", &"..")
                .field("meta", meta)
                .finish(),
            Node::Cluster {
                layout,
                children,
                meta,
            } => f
                .debug_struct("Cluster")
                .field("layout", layout)
                .field("children", children)
                .field("meta", meta)
                .finish(),
            Node::Wrapper { child, meta, .. } => f
                .debug_struct("Wrapper")
                .field("builder", &"..")
                .field("child", child)
                .field("meta", meta)
                .finish(),
            Node::Rule { rule, child } => f
                .debug_struct("Rule")
                .field("rule", rule)
                .field("child", child)
                .finish(),
        }
    }
}
