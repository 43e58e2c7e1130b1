//! Traits for backends.
//!
//! A backend is the UI toolkit that resolved trees end up in. The engine itself only moves views
//! around; every container kind a layout strategy produces is a separate capability trait, so a
//! backend implements exactly the containers it can display.

use crate::layout::stack::StackConfig;
use crate::layout::tab_bar::Tab;

/// A backend implementation.
pub trait Backend {
    /// A native view (or view controller) in the backend.
    type View;
}

/// A backend that can display tabbed containers.
pub trait TabBarBackend: Backend {
    /// Creates a tabbed container.
    ///
    /// `tabs` is never empty and `selected` is always a valid index into it.
    fn tab_bar(&self, tabs: Vec<Tab<Self::View>>, selected: usize) -> Self::View;
}

/// A backend that can display stacked containers.
pub trait StackBackend: Backend {
    /// Creates a container that arranges `views` along one axis.
    ///
    /// `views` is never empty.
    fn stack(&self, views: Vec<Self::View>, config: &StackConfig) -> Self::View;
}
