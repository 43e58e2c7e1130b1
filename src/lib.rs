//! Declarative component composition.
//!
//! # Conceptual overview
//! Clusterkit builds native view hierarchies from trees of component descriptions.
//!
//! ## Nodes
//! A [`Node`] describes a piece of UI without creating anything. Leaves hold a builder that
//! creates a single native view on demand; clusters hold an ordered list of child nodes and the
//! id of a layout strategy that composes them into one container. Wrappers put a view around a
//! single child, and rule nodes show their child only while a [`Rule`] holds. Since a cluster
//! resolves to a view like any other node, clusters nest freely.
//!
//! ## Metadata
//! Every node may carry [`Meta`]: either a strongly-typed configuration value, or a weakly-typed
//! string-keyed map (e.g. from JSON) that is decoded into a configuration shape when it is needed.
//! Layout strategies decode per-child configuration (such as a tab title) from the metadata of
//! each child, and cluster configuration (such as the initially selected tab) from the cluster’s
//! own metadata.
//!
//! ## Resolution
//! A [`Resolver`] walks a tree depth-first. Clusters resolve their children first; children that
//! produce no view are dropped, and so are children whose configuration doesn’t decode for the
//! cluster’s layout. The survivors keep their relative order. A cluster whose children are all
//! dropped resolves to nothing and is in turn dropped by its own parent cluster. Cluster-level
//! settings are checked against the surviving children: an out-of-range selection falls back to
//! the first tab rather than failing.
//!
//! None of this is an error. The only error is a cluster naming a layout strategy that isn’t
//! registered, which is a programming mistake rather than bad data.
//!
//! ## Layouts and Backends
//! Layout strategies live in a [`LayoutRegistry`] and can be added without touching the
//! resolver. Each container kind is a capability trait on the [`Backend`] (the UI toolkit), so a
//! backend only implements the containers it can display. [`HeadlessBackend`] builds an
//! in-memory view tree and supports every container.
//!
//! ```
//! use clusterkit::{HeadlessBackend, Meta, NativeView, Node, Resolver, StaticBundle, TabBarLayout};
//! use std::sync::Arc;
//!
//! let resolver = Resolver::standard(HeadlessBackend, Arc::new(StaticBundle::new(vec!["star"])));
//! let tab = |title: &'static str| {
//!     Node::leaf(
//!         move |_| Some(NativeView::plain(title)),
//!         Some(Meta::map(vec![("title", title), ("icon_name", "star")])),
//!     )
//! };
//! let tree = Node::cluster(
//!     TabBarLayout::ID,
//!     vec![tab("Home"), tab("Search")],
//!     Some(Meta::map(vec![("selected_index", 1)])),
//! );
//!
//! let tab_bar = resolver.resolve(&tree).unwrap().unwrap();
//! assert_eq!(tab_bar.tab_count(), Some(2));
//! assert_eq!(tab_bar.selected_index(), Some(1));
//! ```

pub mod backend;
pub mod layout;
pub mod meta;
pub mod native;
mod node;
pub mod resource;
mod resolve;
mod rule;

pub use backend::{Backend, StackBackend, TabBarBackend};
pub use layout::stack::{StackConfig, StackLayout};
pub use layout::tab_bar::{Tab, TabBarConfig, TabBarLayout, TabConfig};
pub use layout::{Candidate, LayoutId, LayoutRegistry, LayoutStrategy, ResolvedChild};
pub use meta::{decode, DecodeError, FromMeta, Meta, MetaMap};
pub use native::{HeadlessBackend, NativeView, ViewId};
pub use node::{Node, ViewBuilder, WrapperBuilder};
pub use resolve::{ResolveError, Resolver};
pub use resource::{DirBundle, Icon, ResourceBundle, StaticBundle};
pub use rule::{Predicate, Rule};
