//! The system properties page.

use maud::{Markup, html};

use crate::{
    context::Context,
    html::{Nav, link, page},
    index::bucket,
    model::{SearchTag, TagKind},
    paths::{DocPath, pages},
    table::Table,
};

/// System property tags with a resolvable holder, grouped by property name.
pub fn system_properties<'a>(ctx: &Context<'a>) -> Vec<(&'a str, Vec<&'a SearchTag>)> {
    let tags = ctx
        .model
        .tags
        .iter()
        .filter(|t| t.kind == TagKind::SystemProperty)
        .filter(|t| ctx.resolve_holder(&t.holder).is_some());
    bucket(tags, |t| t.term.as_str()).into_iter().collect()
}

/// `system-properties.html`, or `None` when no element references a
/// system property.
pub(crate) fn system_properties_page(ctx: &Context<'_>) -> Option<Markup> {
    let properties = system_properties(ctx);
    if properties.is_empty() {
        return None;
    }
    let path = DocPath::new(pages::SYSTEM_PROPERTIES);
    let mut table = Table::new("system-properties-table")
        .with_caption("System Properties Summary")
        .with_headers(["Property", "Referenced In"]);
    for (name, tags) in &properties {
        let references = html! {
            ul.doc-file-list {
                @for tag in tags {
                    @if let Some((holder_page, holder)) = ctx.resolve_holder(&tag.holder) {
                        li { (link(&path, &holder_page, Some(tag.anchor().as_str()), holder)) }
                    }
                }
            }
        };
        table.add_row(*name, vec![html! { code { (name) } }, references]);
    }
    let content = html! {
        div.header { h1.title { "System Properties" } }
        (table.render())
    };
    Some(page(ctx, &path, "System Properties", Nav::None, content))
}
