//! Generation options.

use regex::Regex;

use crate::error::{DocletError, Result};

/// Label of the group that collects packages matching no configured group.
pub const OTHER_PACKAGES: &str = "Other Packages";

/// A named set of packages, shown as one tab in the overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Tab label.
    pub title: String,
    /// Package names or prefixes ending in `*`.
    pub patterns: Vec<String>,
}

impl Group {
    /// Create a group from a title and a list of patterns.
    pub fn new(
        title: impl Into<String>,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse `Title=pattern:pattern`.
    pub fn parse(spec: &str) -> Result<Self> {
        let (title, patterns) = spec
            .split_once('=')
            .ok_or_else(|| DocletError::InvalidGroup(spec.to_string()))?;
        let title = title.trim();
        let patterns: Vec<&str> = patterns
            .split(':')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if title.is_empty() || patterns.is_empty() {
            return Err(DocletError::InvalidGroup(spec.to_string()));
        }
        Ok(Self::new(title, patterns))
    }
}

/// Options for one generation run. Built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Leave deprecated elements out of all pages.
    pub no_deprecated: bool,
    /// Skip the deprecated list page.
    pub no_deprecated_list: bool,
    /// Document modules and place packages in per-module directories.
    pub show_modules: bool,
    /// Package groups, in display order.
    pub groups: Vec<Group>,
    /// Character set declared in every page.
    pub charset: String,
    /// Generate the legacy two-pane frame layout.
    pub frames: bool,
    /// Suffix appended to every window title.
    pub window_title: Option<String>,
    /// Title shown at the top of the overview.
    pub doc_title: Option<String>,
    /// HTML placed in the navigation bar.
    pub header: Option<String>,
    /// HTML placed after the content; falls back to the header.
    pub footer: Option<String>,
    /// HTML placed at the very top of every page.
    pub top: Option<String>,
    /// HTML placed at the very bottom of every page.
    pub bottom: Option<String>,
    /// Write one index page per letter instead of a single page.
    pub split_index: bool,
    /// Write the alphabetic index and the search index.
    pub create_index: bool,
    /// Write the class hierarchy pages.
    pub create_tree: bool,
    /// Releases covered by the new API list, in tab order. Empty means
    /// every release seen in the model.
    pub since: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    /// Creates a configuration with every optional page enabled.
    pub fn new() -> Self {
        Self {
            no_deprecated: false,
            no_deprecated_list: false,
            show_modules: false,
            groups: Vec::new(),
            charset: "utf-8".to_string(),
            frames: false,
            window_title: None,
            doc_title: None,
            header: None,
            footer: None,
            top: None,
            bottom: None,
            split_index: false,
            create_index: true,
            create_tree: true,
            since: Vec::new(),
        }
    }

    /// Leave deprecated elements out of all pages.
    pub fn with_no_deprecated(mut self, no_deprecated: bool) -> Self {
        self.no_deprecated = no_deprecated;
        self
    }

    /// Skip the deprecated list page.
    pub fn with_no_deprecated_list(mut self, no_deprecated_list: bool) -> Self {
        self.no_deprecated_list = no_deprecated_list;
        self
    }

    /// Document modules.
    pub fn with_show_modules(mut self, show_modules: bool) -> Self {
        self.show_modules = show_modules;
        self
    }

    /// Add a package group.
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Set the declared character set.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Generate the frame layout.
    pub fn with_frames(mut self, frames: bool) -> Self {
        self.frames = frames;
        self
    }

    /// Set the window title suffix.
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = Some(title.into());
        self
    }

    /// Set the overview title.
    pub fn with_doc_title(mut self, title: impl Into<String>) -> Self {
        self.doc_title = Some(title.into());
        self
    }

    /// Set the navigation bar HTML.
    pub fn with_header(mut self, html: impl Into<String>) -> Self {
        self.header = Some(html.into());
        self
    }

    /// Set the footer HTML.
    pub fn with_footer(mut self, html: impl Into<String>) -> Self {
        self.footer = Some(html.into());
        self
    }

    /// Set the top-of-page HTML.
    pub fn with_top(mut self, html: impl Into<String>) -> Self {
        self.top = Some(html.into());
        self
    }

    /// Set the bottom-of-page HTML.
    pub fn with_bottom(mut self, html: impl Into<String>) -> Self {
        self.bottom = Some(html.into());
        self
    }

    /// Split the alphabetic index by letter.
    pub fn with_split_index(mut self, split_index: bool) -> Self {
        self.split_index = split_index;
        self
    }

    /// Enable or disable the alphabetic and search indexes.
    pub fn with_index(mut self, create_index: bool) -> Self {
        self.create_index = create_index;
        self
    }

    /// Enable or disable the hierarchy pages.
    pub fn with_tree(mut self, create_tree: bool) -> Self {
        self.create_tree = create_tree;
        self
    }

    /// Restrict the new API list to these releases.
    pub fn with_since(mut self, releases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.since = releases.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the deprecated list page is written.
    pub fn deprecated_list_enabled(&self) -> bool {
        !self.no_deprecated && !self.no_deprecated_list
    }
}

/// Compiled package groups.
#[derive(Debug, Clone, Default)]
pub struct GroupMatcher {
    /// Group titles with their patterns, in configuration order.
    groups: Vec<(String, Vec<Pattern>)>,
}

/// One package pattern of a group.
#[derive(Debug, Clone)]
enum Pattern {
    /// Matches one package name.
    Exact(String),
    /// Matches through `*`; `literal_len` ranks overlapping patterns.
    Wildcard { regex: Regex, literal_len: usize },
}

impl GroupMatcher {
    /// Compile the configured groups.
    pub fn new(groups: &[Group]) -> Result<Self> {
        let groups = groups
            .iter()
            .map(|group| {
                let patterns = group
                    .patterns
                    .iter()
                    .map(|p| compile(p))
                    .collect::<Result<Vec<_>>>()?;
                Ok((group.title.clone(), patterns))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { groups })
    }

    /// Whether any group is configured.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Titles of the configured groups, in configuration order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(title, _)| title.as_str())
    }

    /// The group a package belongs to. An exact name match wins; otherwise
    /// the wildcard pattern with the longest literal prefix wins, earlier
    /// groups winning ties. Packages matching nothing belong to
    /// [`OTHER_PACKAGES`].
    pub fn group_for(&self, package: &str) -> &str {
        for (title, patterns) in &self.groups {
            if patterns
                .iter()
                .any(|p| matches!(p, Pattern::Exact(name) if name == package))
            {
                return title.as_str();
            }
        }
        let mut best: Option<(&str, usize)> = None;
        for (title, patterns) in &self.groups {
            for pattern in patterns {
                if let Pattern::Wildcard { regex, literal_len } = pattern
                    && regex.is_match(package)
                    && best.is_none_or(|(_, len)| *literal_len > len)
                {
                    best = Some((title.as_str(), *literal_len));
                }
            }
        }
        best.map_or(OTHER_PACKAGES, |(title, _)| title)
    }
}

/// Compiles one pattern; only patterns with `*` become regexes.
fn compile(pattern: &str) -> Result<Pattern> {
    if !pattern.contains('*') {
        return Ok(Pattern::Exact(pattern.to_string()));
    }
    let literal_len = pattern.chars().filter(|c| *c != '*').count();
    let source = format!(
        "^{}$",
        pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*")
    );
    let regex = Regex::new(&source).map_err(|source| DocletError::InvalidGroupPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(Pattern::Wildcard { regex, literal_len })
}
