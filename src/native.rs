//! A headless native-view tree.
//!
//! [`HeadlessBackend`] builds plain in-memory view objects instead of talking to a UI toolkit.
//! It is what the engine is tested against, and it is useful on its own to inspect what a tree
//! resolves to.

use crate::backend::{Backend, StackBackend, TabBarBackend};
use crate::layout::stack::StackConfig;
use crate::layout::tab_bar::Tab;
use crate::resource::Icon;
use uuid::Uuid;

/// A unique identifier for a view.
///
/// (this is just a UUID)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(u32, u16, u16, [u8; 8]);

impl ViewId {
    pub(crate) fn new() -> ViewId {
        let uuid = Uuid::new_v4();
        let (a, b, c, d) = uuid.as_fields();
        ViewId(a, b, c, *d)
    }
}

/// An item of a tab bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub title: String,
    pub icon: Option<Icon>,
    pub view: NativeView,
}

/// A headless native view.
///
/// Every constructor call creates a new view with a fresh id.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeView {
    /// A content view without subviews.
    Plain { id: ViewId, name: String },
    /// A view controller that hosts at most one other view, e.g. a navigation container.
    Container {
        id: ViewId,
        name: String,
        content: Option<Box<NativeView>>,
    },
    TabBar {
        id: ViewId,
        items: Vec<TabItem>,
        selected: usize,
    },
    Stack {
        id: ViewId,
        config: StackConfig,
        arranged: Vec<NativeView>,
    },
}

impl NativeView {
    pub fn plain<S: Into<String>>(name: S) -> NativeView {
        NativeView::Plain {
            id: ViewId::new(),
            name: name.into(),
        }
    }

    pub fn container<S: Into<String>>(name: S, content: Option<NativeView>) -> NativeView {
        NativeView::Container {
            id: ViewId::new(),
            name: name.into(),
            content: content.map(Box::new),
        }
    }

    pub fn id(&self) -> ViewId {
        match self {
            NativeView::Plain { id, .. }
            | NativeView::Container { id, .. }
            | NativeView::TabBar { id, .. }
            | NativeView::Stack { id, .. } => *id,
        }
    }

    /// The name of a plain view or container.
    pub fn name(&self) -> Option<&str> {
        match self {
            NativeView::Plain { name, .. } | NativeView::Container { name, .. } => {
                Some(name.as_str())
            }
            NativeView::TabBar { .. } | NativeView::Stack { .. } => None,
        }
    }

    /// Direct subviews, in display order.
    pub fn subviews(&self) -> Vec<&NativeView> {
        match self {
            NativeView::Plain { .. } => Vec::new(),
            NativeView::Container { content, .. } => content.iter().map(|v| &**v).collect(),
            NativeView::TabBar { items, .. } => items.iter().map(|item| &item.view).collect(),
            NativeView::Stack { arranged, .. } => arranged.iter().collect(),
        }
    }

    /// Tab bar items; `None` if this is not a tab bar.
    pub fn tab_items(&self) -> Option<&[TabItem]> {
        match self {
            NativeView::TabBar { items, .. } => Some(items.as_slice()),
            _ => None,
        }
    }

    /// The number of tabs; `None` if this is not a tab bar.
    pub fn tab_count(&self) -> Option<usize> {
        self.tab_items().map(<[TabItem]>::len)
    }

    /// The selected tab index; `None` if this is not a tab bar.
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            NativeView::TabBar { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    /// The selected tab item; `None` if this is not a tab bar.
    pub fn selected_item(&self) -> Option<&TabItem> {
        match self {
            NativeView::TabBar { items, selected, .. } => items.get(*selected),
            _ => None,
        }
    }
}

/// A backend that builds [`NativeView`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessBackend;

impl Backend for HeadlessBackend {
    type View = NativeView;
}

impl TabBarBackend for HeadlessBackend {
    fn tab_bar(&self, tabs: Vec<Tab<NativeView>>, selected: usize) -> NativeView {
        NativeView::TabBar {
            id: ViewId::new(),
            items: tabs
                .into_iter()
                .map(|tab| TabItem {
                    title: tab.title,
                    icon: tab.icon,
                    view: tab.view,
                })
                .collect(),
            selected,
        }
    }
}

impl StackBackend for HeadlessBackend {
    fn stack(&self, views: Vec<NativeView>, config: &StackConfig) -> NativeView {
        NativeView::Stack {
            id: ViewId::new(),
            config: config.clone(),
            arranged: views,
        }
    }
}
