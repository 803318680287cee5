//! Output paths. Every page lives at a path derived only from its subject,
//! relative to the output root and always `/`-separated.

use std::fmt;

/// Fixed page names.
pub mod pages {
    pub const INDEX: &str = "index.html";
    pub const OVERVIEW_SUMMARY: &str = "overview-summary.html";
    pub const OVERVIEW_TREE: &str = "overview-tree.html";
    pub const OVERVIEW_FRAME: &str = "overview-frame.html";
    pub const ALLCLASSES_FRAME: &str = "allclasses-frame.html";
    pub const ALLCLASSES_INDEX: &str = "allclasses-index.html";
    pub const ALLPACKAGES_INDEX: &str = "allpackages-index.html";
    pub const INDEX_ALL: &str = "index-all.html";
    pub const INDEX_FILES: &str = "index-files";
    pub const DEPRECATED_LIST: &str = "deprecated-list.html";
    pub const PREVIEW_LIST: &str = "preview-list.html";
    pub const RESTRICTED_LIST: &str = "restricted-list.html";
    pub const NEW_LIST: &str = "new-list.html";
    pub const SYSTEM_PROPERTIES: &str = "system-properties.html";
    pub const STYLESHEET: &str = "stylesheet.css";
    pub const PACKAGE_SUMMARY: &str = "package-summary.html";
    pub const PACKAGE_TREE: &str = "package-tree.html";
    pub const PACKAGE_FRAME: &str = "package-frame.html";
    pub const MODULE_SUMMARY: &str = "module-summary.html";
}

/// A path relative to the output root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocPath(String);

impl DocPath {
    /// Wrap a relative path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The empty path, denoting the output root itself.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// The path as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a component.
    pub fn resolve(&self, component: impl AsRef<str>) -> Self {
        let component = component.as_ref();
        if self.0.is_empty() {
            Self(component.to_string())
        } else if component.is_empty() {
            self.clone()
        } else {
            Self(format!("{}/{}", self.0, component))
        }
    }

    /// Number of directories between the root and this page.
    pub fn depth(&self) -> usize {
        self.0.matches('/').count()
    }

    /// Relative path from this page back to the root: `""`, `"../"`, ...
    pub fn to_root(&self) -> String {
        "../".repeat(self.depth())
    }

    /// Relative link from this page to `target`.
    pub fn relative_link(&self, target: &Self) -> String {
        format!("{}{}", self.to_root(), target.0)
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directory holding a package's pages. `module` is given when module
/// directories are in use.
pub fn package_dir(package: &str, module: Option<&str>) -> DocPath {
    let base = module.map(DocPath::new).unwrap_or_default();
    if package.is_empty() {
        base
    } else {
        base.resolve(package.replace('.', "/"))
    }
}

/// Page of a module.
pub fn module_summary(module: &str, module_directories: bool) -> DocPath {
    if module_directories {
        DocPath::new(module).resolve(pages::MODULE_SUMMARY)
    } else {
        DocPath::new(format!("{module}-summary.html"))
    }
}

/// Page of a single letter when the index is split.
pub fn split_index_page(position: usize) -> DocPath {
    DocPath::new(pages::INDEX_FILES).resolve(format!("index-{}.html", position + 1))
}

/// Turn arbitrary text into a value usable as an HTML id.
pub fn anchor(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' ' | '\t' | '\n' => '-',
            '<' | '>' | '"' | '\'' | '&' => '_',
            c => c,
        })
        .collect()
}
