//! Summary lists: the deprecated, preview, restricted and new API pages.
//!
//! All four pages come out of one builder. A [`SummaryListSpec`] supplies
//! what differs between them: which elements are selected, the optional
//! extra column and how rows are grouped into release tabs.

use std::collections::BTreeMap;

use maud::{Markup, Render, html};

use crate::{
    classify::{DescriptionStatus, ElementCategory},
    comparators,
    context::Context,
    element::Element,
    html::{self, Nav, element_link, first_sentence, page},
    index::{bucket, bucket_first_seen},
    model::Preview,
    paths::{DocPath, pages},
    table::Table,
};

/// Label of the tab that collects rows without a group value.
pub const OTHER_TAB: &str = "Other";

/// Picks the elements a summary list holds.
type Selector = Box<dyn Fn(&Element<'_>) -> bool>;
/// Extra per-element value, such as a release.
type ValueFn = Box<dyn Fn(&Element<'_>) -> Option<String>>;

/// The short description shown for an element in tables and indexes.
/// Preview status wins over deprecation, which wins over the plain summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Description<'a> {
    /// A preview element with its feature.
    Preview {
        /// The preview feature, when the element is itself in preview.
        preview: Option<&'a Preview>,
        /// First sentence of the element comment.
        summary: Option<&'a str>,
    },
    /// A deprecated element with its deprecation comment.
    Deprecated {
        /// Whether the element is deprecated for removal.
        for_removal: bool,
        /// First sentence of the deprecation comment.
        comment: Option<&'a str>,
    },
    /// The first sentence of the element comment.
    Plain(Option<&'a str>),
}

impl<'a> Description<'a> {
    /// Pick the description of `element`.
    pub fn of(ctx: &Context<'a>, element: &Element<'a>) -> Self {
        let status = element.status();
        match ctx.classify(element).description_status() {
            DescriptionStatus::Preview => Self::Preview {
                preview: status.preview.as_ref(),
                summary: element.summary(),
            },
            DescriptionStatus::Deprecated => {
                let deprecation = status.deprecated.as_ref();
                Self::Deprecated {
                    for_removal: deprecation.is_some_and(|d| d.for_removal),
                    comment: deprecation
                        .and_then(|d| d.comment.as_deref())
                        .map(first_sentence),
                }
            }
            DescriptionStatus::Plain => Self::Plain(element.summary()),
        }
    }
}

impl Render for Description<'_> {
    fn render(&self) -> Markup {
        match self {
            Self::Preview { preview, summary } => html! {
                div.block {
                    span.preview-label title=[preview.map(html::preview_feature)] { "Preview." }
                    @if let Some(summary) = summary {
                        " " (html::comment(summary))
                    }
                }
            },
            Self::Deprecated {
                for_removal,
                comment,
            } => html! {
                div.block {
                    span.deprecated-label { (html::deprecated_phrase(*for_removal)) }
                    @if let Some(comment) = comment {
                        div.deprecation-comment { (html::comment(comment)) }
                    }
                }
            },
            Self::Plain(Some(summary)) => html! { div.block { (html::comment(summary)) } },
            Self::Plain(None) => html! {},
        }
    }
}

/// An additional column between the element and its description.
pub struct ExtraColumn {
    /// Column header.
    pub header: &'static str,
    /// Cell text for an element.
    pub value: ValueFn,
}

/// What distinguishes one summary list page from another.
pub struct SummaryListSpec {
    /// Output page.
    pub page: &'static str,
    /// Page title and heading.
    pub title: &'static str,
    /// Prefix of the HTML ids on the page.
    pub id: &'static str,
    /// Navigation entry the page belongs to.
    pub nav: Nav,
    /// Which elements are listed.
    pub selector: Selector,
    /// Optional column between element and description.
    pub extra_column: Option<ExtraColumn>,
    /// Group value of a row. Distinct values become release tabs.
    pub group_by: Option<ValueFn>,
    /// Tab order for group values. Empty means first-seen order.
    pub group_order: Vec<String>,
    /// Whether elements deprecated for removal get a section of their own.
    pub for_removal_section: bool,
}

impl SummaryListSpec {
    /// `deprecated-list.html`.
    pub fn deprecated() -> Self {
        let since = |e: &Element<'_>| e.status().deprecated.as_ref().and_then(|d| d.since.clone());
        Self {
            page: pages::DEPRECATED_LIST,
            title: "Deprecated API",
            id: "deprecated",
            nav: Nav::Deprecated,
            selector: Box::new(|e: &Element<'_>| e.status().is_deprecated()),
            extra_column: Some(ExtraColumn {
                header: "Deprecated in",
                value: Box::new(since),
            }),
            group_by: Some(Box::new(since)),
            group_order: Vec::new(),
            for_removal_section: true,
        }
    }

    /// `preview-list.html`.
    pub fn preview() -> Self {
        let feature = |e: &Element<'_>| e.status().preview.as_ref().map(html::preview_feature);
        Self {
            page: pages::PREVIEW_LIST,
            title: "Preview API",
            id: "preview",
            nav: Nav::Preview,
            selector: Box::new(|e: &Element<'_>| e.status().is_preview()),
            extra_column: Some(ExtraColumn {
                header: "Preview Feature",
                value: Box::new(feature),
            }),
            group_by: Some(Box::new(feature)),
            group_order: Vec::new(),
            for_removal_section: false,
        }
    }

    /// `restricted-list.html`.
    pub fn restricted() -> Self {
        Self {
            page: pages::RESTRICTED_LIST,
            title: "Restricted Methods",
            id: "restricted",
            nav: Nav::None,
            selector: Box::new(|e: &Element<'_>| e.status().restricted),
            extra_column: None,
            group_by: None,
            group_order: Vec::new(),
            for_removal_section: false,
        }
    }

    /// `new-list.html`. When `releases` is not empty only elements added in
    /// those releases are listed, with tabs in the given order.
    pub fn new_api(releases: &[String]) -> Self {
        let since = |e: &Element<'_>| e.status().since.clone();
        let wanted = releases.to_vec();
        Self {
            page: pages::NEW_LIST,
            title: "New API",
            id: "new",
            nav: Nav::New,
            selector: Box::new(move |e: &Element<'_>| {
                e.status()
                    .since
                    .as_ref()
                    .is_some_and(|s| wanted.is_empty() || wanted.contains(s))
            }),
            extra_column: Some(ExtraColumn {
                header: "Added in",
                value: Box::new(since),
            }),
            group_by: Some(Box::new(since)),
            group_order: releases.to_vec(),
            for_removal_section: false,
        }
    }
}

/// One row of a summary list.
#[derive(Debug, Clone)]
pub struct SummaryRow<'a> {
    /// The listed element.
    pub element: Element<'a>,
    /// Section the row is shown in.
    pub category: ElementCategory,
    /// Text for the description column.
    pub description: Description<'a>,
    /// Extra column text.
    pub extra: Option<String>,
    /// Group value used for release tabs.
    pub group: Option<String>,
}

/// The rows of one summary list page.
#[derive(Debug, Clone)]
pub struct SummaryList<'a> {
    /// Rows in qualified-name order.
    pub rows: Vec<SummaryRow<'a>>,
    /// Distinct group values, in tab order.
    pub releases: Vec<String>,
}

impl<'a> SummaryList<'a> {
    /// Select, filter, sort and describe the elements of one list.
    pub fn build(ctx: &Context<'a>, spec: &SummaryListSpec) -> Self {
        let mut selected: Vec<Element<'a>> = ctx
            .elements()
            .into_iter()
            .filter(|e| !ctx.is_excluded(e))
            .filter(|e| !ctx.is_suppressed(e))
            .filter(|e| ctx.is_listed(e))
            .filter(|e| (spec.selector)(e))
            .collect();

        let releases = match &spec.group_by {
            Some(group) => {
                let seen: Vec<String> = bucket_first_seen(selected.iter().filter_map(|e| group(e)), Clone::clone)
                    .into_iter()
                    .map(|(release, _)| release)
                    .collect();
                if spec.group_order.is_empty() {
                    seen
                } else {
                    spec.group_order
                        .iter()
                        .filter(|r| seen.contains(r))
                        .cloned()
                        .collect()
                }
            }
            None => Vec::new(),
        };

        selected.sort_by(comparators::qualified_name);
        let rows = selected
            .into_iter()
            .filter_map(|element| {
                let category = ctx.category(&element)?;
                Some(SummaryRow {
                    element,
                    category,
                    description: Description::of(ctx, &element),
                    extra: spec.extra_column.as_ref().and_then(|c| (c.value)(&element)),
                    group: spec.group_by.as_ref().and_then(|g| g(&element)),
                })
            })
            .collect();
        Self { rows, releases }
    }

    /// Whether no element was retained.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Release tabs are shown only when more than one release occurs.
    pub fn shows_release_tabs(&self) -> bool {
        self.releases.len() > 1
    }

    /// Whether some row has no group value.
    pub fn has_ungrouped(&self) -> bool {
        self.rows.iter().any(|row| row.group.is_none())
    }

    /// Rows bucketed by category, in category order.
    pub fn sections(&self) -> BTreeMap<ElementCategory, Vec<&SummaryRow<'a>>> {
        bucket(self.rows.iter(), |row| row.category)
    }

    /// Rows of elements deprecated for removal.
    pub fn for_removal(&self) -> Vec<&SummaryRow<'a>> {
        self.rows
            .iter()
            .filter(|row| {
                row.element
                    .status()
                    .deprecated
                    .as_ref()
                    .is_some_and(|d| d.for_removal)
            })
            .collect()
    }
}

/// One table of a summary list page.
#[allow(clippy::too_many_arguments)]
fn section_table<'r, 'a>(
    ctx: &Context<'a>,
    from: &DocPath,
    spec: &SummaryListSpec,
    list: &SummaryList<'a>,
    id: &str,
    caption: &str,
    first_header: &str,
    rows: &[&'r SummaryRow<'a>],
) -> Table<'r, &'r SummaryRow<'a>> {
    let mut headers = vec![first_header];
    if let Some(extra) = &spec.extra_column {
        headers.push(extra.header);
    }
    headers.push("Description");

    let mut table = Table::new(id).with_caption(caption).with_headers(headers);
    if list.shows_release_tabs() {
        for release in &list.releases {
            let release = release.clone();
            table = table.with_tab(release.clone(), move |row: &&SummaryRow<'a>| {
                row.group.as_deref() == Some(release.as_str())
            });
        }
        if list.has_ungrouped() {
            table = table.with_tab(OTHER_TAB, |row: &&SummaryRow<'a>| row.group.is_none());
        }
    }
    for &row in rows {
        let mut cells = vec![element_link(ctx, from, &row.element, &row.element.display_name())];
        if spec.extra_column.is_some() {
            cells.push(html! { (row.extra.as_deref().unwrap_or_default()) });
        }
        cells.push(row.description.render());
        table.add_row(row, cells);
    }
    table
}

/// Render a summary list page. A page whose list is empty still carries
/// one empty table.
pub(crate) fn summary_page(ctx: &Context<'_>, spec: &SummaryListSpec) -> (DocPath, Markup) {
    let path = DocPath::new(spec.page);
    let list = SummaryList::build(ctx, spec);
    let sections = list.sections();
    let for_removal = if spec.for_removal_section {
        list.for_removal()
    } else {
        Vec::new()
    };
    let removal_id = format!("{}-for-removal", spec.id);

    let content = html! {
        div.header {
            h1.title { (spec.title) }
        }
        @if list.is_empty() {
            (section_table(ctx, &path, spec, &list, spec.id, spec.title, "Element", &[]).render())
        } @else {
            h2 title="Contents" { "Contents" }
            ul.contents-list {
                @if !for_removal.is_empty() {
                    li { a href={ "#" (removal_id) } { "Terminally Deprecated" } }
                }
                @for category in sections.keys() {
                    li { a href={ "#" (spec.id) "-" (category.id()) } { (category.plural()) } }
                }
            }
            @if !for_removal.is_empty() {
                section.summary-section id=(removal_id) {
                    (section_table(ctx, &path, spec, &list, &format!("{removal_id}-table"),
                        "Terminally Deprecated Elements", "Element", &for_removal).render())
                }
            }
            @for (category, rows) in &sections {
                @let id = format!("{}-{}", spec.id, category.id());
                section.summary-section id=(id) {
                    (section_table(ctx, &path, spec, &list, &format!("{id}-table"),
                        category.plural(), category.label(), rows).render())
                }
            }
        }
    };
    let markup = page(ctx, &path, spec.title, spec.nav, content);
    (path, markup)
}
