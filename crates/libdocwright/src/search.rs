//! Search index records for the client-side search and the query used by
//! list mode.

use serde::Serialize;

use crate::{
    classify::ElementCategory,
    context::Context,
    element::Element,
    error::Result,
    html::first_sentence,
    model::TagKind,
};

/// Options that control a listing query.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Raw user query to evaluate.
    pub query: String,
    /// Whether matching should respect letter casing.
    pub case_sensitive: bool,
}

impl SearchOptions {
    /// Create a new options struct with the provided query string.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            case_sensitive: false,
        }
    }

    /// Match case-sensitively.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

/// Lightweight record describing an element for list mode output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Category of the element.
    pub kind: ElementCategory,
    /// Fully qualified name.
    pub path: String,
}

/// Listed elements in declaration order, optionally filtered by a query
/// matched against the qualified name.
pub fn list(ctx: &Context<'_>, options: Option<&SearchOptions>) -> Vec<ListItem> {
    ctx.elements()
        .into_iter()
        .filter(|e| ctx.is_listed(e))
        .filter_map(|e| {
            let kind = ctx.category(&e)?;
            Some(ListItem {
                kind,
                path: e.qualified_name(),
            })
        })
        .filter(|item| {
            options.is_none_or(|o| contains(&item.path, &o.query, o.case_sensitive))
        })
        .collect()
}

/// Substring match; an empty needle matches everything.
fn contains(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
    if needle.is_empty() {
        return true;
    }
    if case_sensitive {
        haystack.contains(needle)
    } else {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// File that holds one category of search records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchCategory {
    /// Modules.
    Module,
    /// Packages.
    Package,
    /// Types.
    Type,
    /// Fields, constructors and methods.
    Member,
    /// Search tags and system properties.
    Tag,
}

impl SearchCategory {
    /// Every category, in write order.
    pub const ALL: [Self; 5] = [
        Self::Module,
        Self::Package,
        Self::Type,
        Self::Member,
        Self::Tag,
    ];

    /// Output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Module => "module-search-index.js",
            Self::Package => "package-search-index.js",
            Self::Type => "type-search-index.js",
            Self::Member => "member-search-index.js",
            Self::Tag => "tag-search-index.js",
        }
    }

    /// JavaScript variable the records are assigned to.
    pub fn variable(self) -> &'static str {
        match self {
            Self::Module => "moduleSearchIndex",
            Self::Package => "packageSearchIndex",
            Self::Type => "typeSearchIndex",
            Self::Member => "memberSearchIndex",
            Self::Tag => "tagSearchIndex",
        }
    }
}

/// One search record. Keys are kept short to keep the files small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry {
    /// File the record goes to.
    #[serde(skip)]
    pub category: SearchCategory,
    /// Containing module.
    #[serde(rename = "m", skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Containing package.
    #[serde(rename = "p", skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Containing type, for members.
    #[serde(rename = "c", skip_serializing_if = "Option::is_none")]
    pub containing_type: Option<String>,
    /// Label shown in results.
    #[serde(rename = "l")]
    pub label: String,
    /// Element holding a search tag.
    #[serde(rename = "h", skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,
    /// Search tag description.
    #[serde(rename = "d", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Target relative to the output root.
    #[serde(rename = "u")]
    pub url: String,
}

/// All search records of a run.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    /// Records in model order.
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// Collect records for every listed element and every resolvable tag.
    pub fn build(ctx: &Context<'_>) -> Self {
        let mut entries = Vec::new();
        for element in ctx.elements() {
            if !ctx.is_listed(&element) {
                continue;
            }
            let mut url = ctx.page_of(&element).to_string();
            if let Some(anchor) = ctx.anchor_of(&element) {
                url.push('#');
                url.push_str(&anchor);
            }
            let entry = match element {
                Element::Module(m) => SearchEntry {
                    category: SearchCategory::Module,
                    module: None,
                    package: None,
                    containing_type: None,
                    label: m.name.clone(),
                    holder: None,
                    description: None,
                    url,
                },
                Element::Package(p) => SearchEntry {
                    category: SearchCategory::Package,
                    module: module_of(ctx, &p.name),
                    package: None,
                    containing_type: None,
                    label: element.display_name(),
                    holder: None,
                    description: None,
                    url,
                },
                Element::Type(t) => SearchEntry {
                    category: SearchCategory::Type,
                    module: module_of(ctx, &t.package),
                    package: Some(t.package.clone()),
                    containing_type: None,
                    label: t.name.clone(),
                    holder: None,
                    description: None,
                    url,
                },
                Element::Member(owner, member) => SearchEntry {
                    category: SearchCategory::Member,
                    module: module_of(ctx, &owner.package),
                    package: Some(owner.package.clone()),
                    containing_type: Some(owner.name.clone()),
                    label: member.label(),
                    holder: None,
                    description: None,
                    url,
                },
            };
            entries.push(entry);
        }

        for tag in &ctx.model.tags {
            let Some((page, holder)) = ctx.resolve_holder(&tag.holder) else {
                continue;
            };
            let description = match tag.kind {
                TagKind::Index => tag.description.as_deref().map(|d| first_sentence(d).to_string()),
                TagKind::SystemProperty => Some("System Property".to_string()),
            };
            entries.push(SearchEntry {
                category: SearchCategory::Tag,
                module: None,
                package: None,
                containing_type: None,
                label: tag.term.clone(),
                holder: Some(holder),
                description,
                url: format!("{}#{}", page, tag.anchor()),
            });
        }
        Self { entries }
    }

    /// All records.
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Records of one category.
    pub fn in_category(&self, category: SearchCategory) -> Vec<&SearchEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Contents of the script file for one category.
    pub fn to_js(&self, category: SearchCategory) -> Result<String> {
        let records = serde_json::to_string(&self.in_category(category))?;
        Ok(format!(
            "{} = {};updateSearchResults();",
            category.variable(),
            records
        ))
    }
}

/// Module name for the record, only when modules are shown.
fn module_of(ctx: &Context<'_>, package: &str) -> Option<String> {
    if !ctx.config.show_modules {
        return None;
    }
    ctx.package(package).and_then(|p| p.module.clone())
}
