//! Resource lookup.
//!
//! Layout strategies look up images by name in a bundle. Bundles are shared read-only between
//! everything that resolves against them, so any caching happens behind interior locks.

use core::fmt;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// A handle to an icon image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon {
    name: String,
    path: Option<PathBuf>,
}

impl Icon {
    /// An icon that is known by name only.
    pub fn named<S: Into<String>>(name: S) -> Icon {
        Icon {
            name: name.into(),
            path: None,
        }
    }

    /// An icon backed by a file.
    pub fn at_path<S: Into<String>>(name: S, path: PathBuf) -> Icon {
        Icon {
            name: name.into(),
            path: Some(path),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref().map(PathBuf::as_path)
    }
}

/// A resource scope that icons are resolved in.
pub trait ResourceBundle: fmt::Debug + Send + Sync {
    /// Returns the icon with the given name, if the bundle has one.
    fn icon(&self, name: &str) -> Option<Icon>;
}

/// A bundle that contains a fixed set of icon names.
#[derive(Debug, Clone, Default)]
pub struct StaticBundle {
    icons: HashSet<String>,
}

impl StaticBundle {
    pub fn new<I, S>(icons: I) -> StaticBundle
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticBundle {
            icons: icons.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty bundle; every lookup misses.
    pub fn empty() -> StaticBundle {
        StaticBundle::default()
    }
}

impl ResourceBundle for StaticBundle {
    fn icon(&self, name: &str) -> Option<Icon> {
        if self.icons.contains(name) {
            Some(Icon::named(name))
        } else {
            None
        }
    }
}

/// File extensions a [`DirBundle`] tries, in order.
pub const ICON_EXTENSIONS: &[&str] = &["pdf", "png", "svg"];

/// A bundle backed by a directory of image files.
///
/// The icon `name` resolves to the first existing `<root>/<name>.<ext>`. Lookups (including
/// misses) are cached for the lifetime of the bundle.
#[derive(Debug)]
pub struct DirBundle {
    root: PathBuf,
    cache: Mutex<HashMap<String, Option<Icon>>>,
}

impl DirBundle {
    pub fn new<P: Into<PathBuf>>(root: P) -> DirBundle {
        DirBundle {
            root: root.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn find(&self, name: &str) -> Option<Icon> {
        // names are plain file stems; anything that could leave the root misses
        let is_path = name.contains(|c: char| c == '/' || c == '\\');
        if name.is_empty() || is_path || name.starts_with('.') {
            return None;
        }

        ICON_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
            .map(|path| Icon::at_path(name, path))
    }
}

impl ResourceBundle for DirBundle {
    fn icon(&self, name: &str) -> Option<Icon> {
        let mut cache = self.cache.lock();
        if let Some(icon) = cache.get(name) {
            return icon.clone();
        }
        let icon = self.find(name);
        if icon.is_none() {
            log::trace!("no icon named {:?} in {}", name, self.root.display());
        }
        cache.insert(name.to_string(), icon.clone());
        icon
    }
}

#[cfg(test)]
#[path = "tests/resource_tests.rs"]
mod tests;
