//! One page per documented type: its place in the hierarchy, its notes and
//! a summary and detail section per kind of member.

use std::collections::{BTreeMap, HashSet, VecDeque};

use maud::{Markup, Render, html};

use crate::{
    classify::ElementCategory,
    context::Context,
    element::Element,
    html::{
        Nav, comment, deprecation_block, element_link, page, preview_block, restricted_block,
        tag_targets, type_link, type_ref,
    },
    index::bucket,
    model::{Status, TypeElement},
    paths::DocPath,
    summary::Description,
    table::Table,
};

/// The name with its type parameters: `Map<K,V>`.
fn generic_name(ty: &TypeElement) -> String {
    if ty.type_params.is_empty() {
        ty.name.clone()
    } else {
        format!("{}<{}>", ty.name, ty.type_params.join(","))
    }
}

/// Deprecation and preview blocks of an element.
fn status_blocks(status: &Status) -> Markup {
    html! {
        @if let Some(deprecation) = &status.deprecated {
            (deprecation_block(deprecation))
        }
        @if let Some(preview) = &status.preview {
            (preview_block(preview))
        }
        @if status.restricted {
            (restricted_block())
        }
    }
}

/// Joins items with ", ".
fn comma_list(items: impl IntoIterator<Item = Markup>) -> Markup {
    html! {
        @for (i, item) in items.into_iter().enumerate() {
            @if i > 0 { ", " }
            (item)
        }
    }
}

/// Every interface a type implements or extends, directly or through its
/// superclasses and superinterfaces, as far as the model knows them. Direct
/// interfaces come first, in declaration order.
fn all_interfaces<'m>(ctx: &Context<'m>, ty: &'m TypeElement) -> Vec<&'m str> {
    let mut found: Vec<&'m str> = Vec::new();
    let mut visited = HashSet::new();
    let mut queue: VecDeque<&'m TypeElement> = VecDeque::from([ty]);
    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.qualified_name()) {
            continue;
        }
        for name in &current.interfaces {
            if !found.contains(&name.as_str()) {
                found.push(name);
            }
            if let Some(iface) = ctx.resolve_type(name) {
                queue.push_back(iface);
            }
        }
        if let Some(superclass) = current.superclass.as_deref().and_then(|n| ctx.resolve_type(n)) {
            queue.push_back(superclass);
        }
    }
    found
}

/// Supertype, subtype and enclosing-type notes.
fn notes<'a>(ctx: &Context<'a>, from: &DocPath, ty: &'a TypeElement) -> Markup {
    let tree = ctx.class_tree();
    let interface = ty.is_interface();
    let interfaces = all_interfaces(ctx, ty);
    let subtypes = if interface {
        tree.subinterfaces(ty)
    } else {
        tree.subtypes(ty)
    };
    let implementors = tree.implementors(ty);
    html! {
        dl.notes {
            @if !interfaces.is_empty() {
                dt { @if interface { "All Superinterfaces:" } @else { "All Implemented Interfaces:" } }
                dd { (comma_list(interfaces.iter().map(|name| type_ref(ctx, from, name)))) }
            }
            @if !subtypes.is_empty() {
                dt { @if interface { "All Known Subinterfaces:" } @else { "Direct Known Subclasses:" } }
                dd { (comma_list(subtypes.iter().map(|sub| type_link(ctx, from, sub)))) }
            }
            @if interface && !implementors.is_empty() {
                dt { "All Known Implementing Classes:" }
                dd { (comma_list(implementors.iter().map(|imp| type_link(ctx, from, imp)))) }
            }
            @if let Some(since) = &ty.status.since {
                dt { "Since:" }
                dd { (since) }
            }
        }
    }
}

/// Summary table of one member category.
fn member_summary<'a>(
    ctx: &Context<'a>,
    from: &DocPath,
    category: ElementCategory,
    members: &[Element<'a>],
) -> Markup {
    let mut table = Table::new(format!("{}-summary-table", category.id()))
        .with_caption(category.plural())
        .with_headers([category.label(), "Description"]);
    for member in members {
        let Element::Member(_, m) = member else {
            continue;
        };
        table.add_row(
            *member,
            vec![
                html! { code { (element_link(ctx, from, member, &m.label())) } },
                Description::of(ctx, member).render(),
            ],
        );
    }
    html! {
        section.summary id={ (category.id()) "-summary" } {
            h2 { (category.plural()) }
            (table.render())
        }
    }
}

/// Detail section of one member category.
fn member_details<'a>(
    ctx: &Context<'a>,
    category: ElementCategory,
    members: &[Element<'a>],
) -> Markup {
    html! {
        section.details id={ (category.id()) "-detail" } {
            h2 { (category.label()) " Details" }
            ul.member-list {
                @for member in members {
                    @if let Element::Member(owner, m) = member {
                        @let qualified = owner.qualified_name();
                        li {
                            section.detail id=[ctx.anchor_of(member)] {
                                h3 { (m.name) }
                                div.member-signature { code { (m.label()) } }
                                (status_blocks(&m.status))
                                @if let Some(summary) = &m.summary {
                                    div.block { (comment(summary)) }
                                }
                                @if let Some(since) = &m.status.since {
                                    dl.notes { dt { "Since:" } dd { (since) } }
                                }
                                (tag_targets(ctx, &[
                                    format!("{qualified}#{}", m.label()),
                                    format!("{qualified}#{}", m.name),
                                ]))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// `<package>/<Type>.html`.
pub(crate) fn type_page<'a>(ctx: &Context<'a>, ty: &'a TypeElement) -> (DocPath, Markup) {
    let element = Element::Type(ty);
    let path = ctx.page_of(&element);
    let kind = ctx
        .category(&element)
        .map_or("Type", ElementCategory::label);
    let members = bucket(
        ctx.documented_members(ty)
            .into_iter()
            .filter_map(|m| ctx.category(&m).map(|c| (c, m))),
        |(category, _)| *category,
    );
    let members: BTreeMap<ElementCategory, Vec<Element<'a>>> = members
        .into_iter()
        .map(|(category, pairs)| (category, pairs.into_iter().map(|(_, m)| m).collect()))
        .collect();
    let package = ctx.package(&ty.package);
    let module = package
        .and_then(|p| p.module.as_deref())
        .filter(|_| ctx.config.show_modules)
        .and_then(|name| ctx.module(name));

    let content = html! {
        div.header {
            @if let Some(module) = module {
                div.sub-title {
                    span.module-label-in-type { "Module" }
                    " "
                    (element_link(ctx, &path, &Element::Module(module), &module.name))
                }
            }
            div.sub-title {
                span.package-label-in-type { "Package" }
                " "
                @if let Some(package) = package {
                    @let element = Element::Package(package);
                    (element_link(ctx, &path, &element, &element.display_name()))
                } @else {
                    (ty.package)
                }
            }
            h1.title title=(format!("{kind} {}", ty.name)) { (kind) " " (generic_name(ty)) }
        }
        @if let Some(superclass) = &ty.superclass {
            div.inheritance {
                "extends " (type_ref(ctx, &path, superclass))
            }
        }
        section.class-description id="class-description" {
            (notes(ctx, &path, ty))
            hr;
            div.type-signature {
                code { (ty.visibility.keyword()) (ty.kind.keyword()) " " (generic_name(ty)) }
            }
            (status_blocks(&ty.status))
            @if let Some(summary) = &ty.summary {
                div.block { (comment(summary)) }
            }
            (tag_targets(ctx, &[ty.qualified_name()]))
        }
        @if !members.is_empty() {
            section.summary {
                @for (category, list) in &members {
                    (member_summary(ctx, &path, *category, list))
                }
            }
            section.details {
                @for (category, list) in &members {
                    (member_details(ctx, *category, list))
                }
            }
        }
    };
    let title = generic_name(ty);
    let markup = page(ctx, &path, &title, Nav::Class, content);
    (path, markup)
}
