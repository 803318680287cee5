//! Bucketing and the index pages built on it: the alphabetic index and the
//! "all classes" and "all packages" listings.

use std::collections::BTreeMap;

use maud::{Markup, Render, html};

use crate::{
    classify::{Classification, ElementCategory},
    comparators,
    context::Context,
    element::Element,
    html::{Nav, element_link, link, page, qualified_type_link},
    model::{Package, SearchTag, TagKind, TypeElement},
    paths::{DocPath, pages, split_index_page},
    properties::system_properties,
    summary::Description,
    table::Table,
};

/// Group items by key. Keys iterate in their natural order and every bucket
/// keeps the input order of its items.
pub fn bucket<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> BTreeMap<K, Vec<T>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut buckets: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        buckets.entry(key(&item)).or_default().push(item);
    }
    buckets
}

/// Group items by key, with buckets in the order their keys first occur.
pub fn bucket_first_seen<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<(K, Vec<T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut buckets: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(&item);
        match buckets.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, bucket)) => bucket.push(item),
            None => buckets.push((k, vec![item])),
        }
    }
    buckets
}

/// Upper-cased first character of a name.
fn initial(name: &str) -> char {
    name.chars()
        .next()
        .map_or(' ', |c| c.to_uppercase().next().unwrap_or(c))
}

/// An entry of the alphabetic index.
#[derive(Debug, Clone, Copy)]
pub enum IndexItem<'a> {
    /// A documented element.
    Element(Element<'a>),
    /// A search tag, listed after the elements of its letter.
    Tag(&'a SearchTag),
}

impl<'a> IndexItem<'a> {
    /// The indexed name.
    pub fn name(&self) -> &'a str {
        match self {
            Self::Element(element) => element.simple_name(),
            Self::Tag(tag) => &tag.term,
        }
    }
}

/// The alphabetic index: one section per initial letter, ordinary entries
/// first and search tags after them.
#[derive(Debug, Clone, Default)]
pub struct AlphaIndex<'a> {
    /// Sorted items per upper-cased initial.
    sections: BTreeMap<char, Vec<IndexItem<'a>>>,
}

impl<'a> AlphaIndex<'a> {
    /// Collect the listed elements and the resolvable search tags.
    pub fn build(ctx: &Context<'a>) -> Self {
        let mut elements: Vec<Element<'a>> = ctx
            .elements()
            .into_iter()
            .filter(|e| ctx.is_listed(e) && !e.simple_name().is_empty())
            .collect();
        elements.sort_by(comparators::general_purpose);

        let mut tags: Vec<&'a SearchTag> = ctx
            .model
            .tags
            .iter()
            .filter(|t| !t.term.is_empty() && ctx.resolve_holder(&t.holder).is_some())
            .collect();
        tags.sort_by(|a, b| comparators::compare_names(&a.term, &b.term));

        let mut sections = bucket(elements.into_iter().map(IndexItem::Element), |i| {
            initial(i.name())
        });
        for (letter, items) in bucket(tags.into_iter().map(IndexItem::Tag), |i| initial(i.name())) {
            sections.entry(letter).or_default().extend(items);
        }
        Self { sections }
    }

    /// Section letters, in order.
    pub fn letters(&self) -> Vec<char> {
        self.sections.keys().copied().collect()
    }

    /// Entries of one letter.
    pub fn items(&self, letter: char) -> &[IndexItem<'a>] {
        self.sections.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }
}

/// Anchor of a letter on the single index page.
fn letter_anchor(letter: char) -> String {
    format!("I:{letter}")
}

/// Links to every letter, then to the list pages.
fn letter_nav(ctx: &Context<'_>, from: &DocPath, index: &AlphaIndex<'_>) -> Markup {
    let split = ctx.config.split_index;
    html! {
        div.index-letters {
            @for (position, letter) in index.letters().into_iter().enumerate() {
                @if split {
                    (link(from, &split_index_page(position), None, letter.to_string()))
                } @else {
                    a href={ "#" (letter_anchor(letter)) } { (letter) }
                }
                "\u{a0}"
            }
            br;
            (link(from, &DocPath::new(pages::ALLCLASSES_INDEX), None, "All Classes and Interfaces"))
            "\u{a0}|\u{a0}"
            (link(from, &DocPath::new(pages::ALLPACKAGES_INDEX), None, "All Packages"))
            @if !system_properties(ctx).is_empty() {
                "\u{a0}|\u{a0}"
                (link(from, &DocPath::new(pages::SYSTEM_PROPERTIES), None, "System Properties"))
            }
        }
    }
}

/// "Class in p", "Method in interface p.T" and similar.
fn describe(ctx: &Context<'_>, from: &DocPath, element: &Element<'_>) -> Markup {
    match element {
        Element::Module(m) => html! { "module " (m.name) },
        Element::Package(p) => html! { "package " (p.name) },
        Element::Type(t) => {
            let label = ctx.category(element).map_or("Type", ElementCategory::label);
            html! {
                (label) " in "
                (link(from, &ctx.package_dir(&t.package).resolve(pages::PACKAGE_SUMMARY), None, t.package.as_str()))
            }
        }
        Element::Member(owner, _) => {
            let label = ctx.category(element).map_or("Member", ElementCategory::label);
            let owner_label = ctx
                .category(&Element::Type(owner))
                .map_or("type", ElementCategory::label)
                .to_lowercase();
            html! { (label) " in " (owner_label) " " (qualified_type_link(ctx, from, owner)) }
        }
    }
}

/// One `dt`/`dd` pair of the index.
fn index_entry(ctx: &Context<'_>, from: &DocPath, item: &IndexItem<'_>) -> Markup {
    match item {
        IndexItem::Element(element) => {
            let label = match element {
                Element::Member(_, member) => member.label(),
                Element::Type(ty) => ty.name.clone(),
                _ => element.qualified_name(),
            };
            html! {
                dt {
                    (element_link(ctx, from, element, &label))
                    " - " (describe(ctx, from, element))
                }
                dd { (Description::of(ctx, element)) }
            }
        }
        IndexItem::Tag(tag) => {
            let Some((holder_page, holder)) = ctx.resolve_holder(&tag.holder) else {
                return html! {};
            };
            let kind = match tag.kind {
                TagKind::Index => "Search tag",
                TagKind::SystemProperty => "System property",
            };
            html! {
                dt {
                    (link(from, &holder_page, Some(tag.anchor().as_str()), html! { span.search-tag-link { (tag.term) } }))
                    " - " (kind) " in " (holder)
                }
                dd {
                    @if let Some(description) = &tag.description {
                        div.block { (description) }
                    }
                }
            }
        }
    }
}

/// Heading and entries of one letter.
fn letter_section(ctx: &Context<'_>, from: &DocPath, index: &AlphaIndex<'_>, letter: char) -> Markup {
    html! {
        h2.title id=(letter_anchor(letter)) { (letter) }
        dl.index {
            @for item in index.items(letter) {
                (index_entry(ctx, from, item))
            }
        }
    }
}

/// The alphabetic index pages: `index-all.html`, or one page per letter
/// below `index-files/` when the index is split.
pub(crate) fn index_pages(ctx: &Context<'_>, index: &AlphaIndex<'_>) -> Vec<(DocPath, Markup)> {
    if ctx.config.split_index {
        return index
            .letters()
            .into_iter()
            .enumerate()
            .map(|(position, letter)| {
                let path = split_index_page(position);
                let content = html! {
                    div.header { h1 { "Index" } }
                    (letter_nav(ctx, &path, index))
                    (letter_section(ctx, &path, index, letter))
                    (letter_nav(ctx, &path, index))
                };
                let title = format!("{letter}-Index");
                let markup = page(ctx, &path, &title, Nav::Index, content);
                (path, markup)
            })
            .collect();
    }
    let path = DocPath::new(pages::INDEX_ALL);
    let content = html! {
        div.header { h1 { "Index" } }
        (letter_nav(ctx, &path, index))
        @for letter in index.letters() {
            (letter_section(ctx, &path, index, letter))
        }
        (letter_nav(ctx, &path, index))
    };
    let markup = page(ctx, &path, "Index", Nav::Index, content);
    vec![(path, markup)]
}

/// A table of types with one tab per kind of type.
pub(crate) fn types_table<'t, 'a>(
    ctx: &'t Context<'a>,
    from: &DocPath,
    id: &str,
    caption: &str,
    types: &[&'a TypeElement],
) -> Table<'t, &'a TypeElement> {
    let tabs = [
        ("Interfaces", Classification::INTERFACE),
        ("Classes", Classification::CLASS),
        ("Enum Classes", Classification::ENUM),
        ("Records", Classification::RECORD),
        ("Exceptions", Classification::EXCEPTION),
        ("Errors", Classification::ERROR),
        ("Annotation Interfaces", Classification::ANNOTATION),
    ];
    let mut table = Table::new(id)
        .with_caption(caption)
        .with_default_tab("All Classes and Interfaces")
        .with_headers(["Class", "Description"]);
    for (label, flag) in tabs {
        table = table.with_tab(label, move |ty: &&'a TypeElement| {
            ctx.classify(&Element::Type(*ty)).contains(flag)
        });
    }
    for &ty in types {
        let element = Element::Type(ty);
        table.add_row(
            ty,
            vec![
                element_link(ctx, from, &element, &element.display_name()),
                Description::of(ctx, &element).render(),
            ],
        );
    }
    table
}

/// `allclasses-index.html`.
pub(crate) fn all_classes_page(ctx: &Context<'_>) -> Markup {
    let path = DocPath::new(pages::ALLCLASSES_INDEX);
    let mut types = ctx.documented_types();
    types.sort_by(|a, b| comparators::types(a, b));
    let table = types_table(ctx, &path, "all-classes-table", "Classes", &types);
    let content = html! {
        div.header { h1.title { "All Classes and Interfaces" } }
        @if !table.is_empty() {
            (table.render())
        }
    };
    page(ctx, &path, "All Classes and Interfaces", Nav::None, content)
}

/// A table of packages with their descriptions.
pub(crate) fn packages_table<'a>(
    ctx: &Context<'a>,
    from: &DocPath,
    table: Table<'_, &'a Package>,
    packages: &[&'a Package],
) -> Markup {
    let mut table = table.with_headers(["Package", "Description"]);
    for &package in packages {
        let element = Element::Package(package);
        table.add_row(
            package,
            vec![
                element_link(ctx, from, &element, &element.display_name()),
                Description::of(ctx, &element).render(),
            ],
        );
    }
    if table.is_empty() {
        html! {}
    } else {
        table.render()
    }
}

/// `allpackages-index.html`.
pub(crate) fn all_packages_page(ctx: &Context<'_>) -> Markup {
    let path = DocPath::new(pages::ALLPACKAGES_INDEX);
    let packages = ctx.documented_packages();
    let table = Table::new("all-packages-table").with_caption("Package Summary");
    let content = html! {
        div.header { h1.title { "All Packages" } }
        (packages_table(ctx, &path, table, &packages))
    };
    page(ctx, &path, "All Packages", Nav::None, content)
}
