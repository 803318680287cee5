//! Page chrome and the small inline helpers every page writer shares.

use maud::{DOCTYPE, Markup, PreEscaped, Render, html};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    context::Context,
    element::Element,
    model::{Deprecation, Preview, TypeElement},
    paths::{DocPath, pages, split_index_page},
};

/// `{@docRoot}` in any letter case.
static DOC_ROOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\{@docroot\}").expect("doc root pattern is valid"));

/// Text up to the first sentence terminator followed by whitespace.
static FIRST_SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(.*?[.!?])(?:\s|$)").expect("sentence pattern is valid"));

/// Labels of the deprecation block.
const DEPRECATED: &str = "Deprecated.";
const DEPRECATED_FOR_REMOVAL: &str =
    "Deprecated, for removal: This API element is subject to removal in a future version.";

/// Entry of the navigation bar that a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Overview,
    Module,
    Package,
    Class,
    Tree,
    Deprecated,
    Preview,
    New,
    Index,
    /// Pages without an entry of their own.
    None,
}

/// Wrap `content` in the common page chrome.
pub fn page(ctx: &Context<'_>, path: &DocPath, title: &str, nav: Nav, content: Markup) -> Markup {
    let config = ctx.config;
    let window_title = match &config.window_title {
        Some(suffix) => format!("{title} ({suffix})"),
        None => title.to_string(),
    };
    let footer = config.footer.as_ref().or(config.header.as_ref());
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                title { (window_title) }
                meta charset=(config.charset);
                meta name="generator" content=(concat!("docwright ", env!("CARGO_PKG_VERSION")));
                link rel="stylesheet" type="text/css" href={ (path.to_root()) (pages::STYLESHEET) };
            }
            body {
                @if let Some(top) = &config.top {
                    (user_html(top, path))
                }
                header.flex-header {
                    (nav_bar(ctx, path, nav))
                }
                main role="main" {
                    (content)
                }
                footer {
                    @if let Some(footer) = footer {
                        div.about-language { (user_html(footer, path)) }
                    }
                    @if let Some(bottom) = &config.bottom {
                        p.legal-copy { small { (user_html(bottom, path)) } }
                    }
                }
            }
        }
    }
}

/// Top navigation bar with the current entry highlighted.
fn nav_bar(ctx: &Context<'_>, path: &DocPath, current: Nav) -> Markup {
    let config = ctx.config;
    let fixed = |name: &str| Some(DocPath::new(name));
    let mut entries = vec![(Nav::Overview, "Overview", fixed(pages::OVERVIEW_SUMMARY))];
    if config.show_modules {
        entries.push((Nav::Module, "Module", None));
    }
    entries.push((Nav::Package, "Package", None));
    entries.push((Nav::Class, "Class", None));
    if config.create_tree {
        entries.push((Nav::Tree, "Tree", fixed(pages::OVERVIEW_TREE)));
    }
    if config.deprecated_list_enabled() {
        entries.push((Nav::Deprecated, "Deprecated", fixed(pages::DEPRECATED_LIST)));
    }
    entries.push((Nav::Preview, "Preview", fixed(pages::PREVIEW_LIST)));
    entries.push((Nav::New, "New", fixed(pages::NEW_LIST)));
    if config.create_index {
        let index = if config.split_index {
            split_index_page(0)
        } else {
            DocPath::new(pages::INDEX_ALL)
        };
        entries.push((Nav::Index, "Index", Some(index)));
    }
    html! {
        div.top-nav id="navbar-top" {
            ul.nav-list title="Navigation" {
                @for (nav, label, target) in &entries {
                    @if *nav == current {
                        li.nav-bar-cell1-rev { (label) }
                    } @else if let Some(target) = target {
                        li { (link(path, target, None, *label)) }
                    } @else {
                        li { (label) }
                    }
                }
            }
            @if let Some(header) = &config.header {
                div.about-language { (user_html(header, path)) }
            }
        }
    }
}

/// User supplied HTML with `{@docRoot}` pointing back at the output root.
pub fn user_html(html: &str, path: &DocPath) -> Markup {
    let root = path.to_root();
    let root = root.trim_end_matches('/');
    let root = if root.is_empty() { "." } else { root };
    PreEscaped(DOC_ROOT.replace_all(html, root).into_owned())
}

/// A hyperlink from the page at `from` to `to`.
pub fn link(from: &DocPath, to: &DocPath, anchor: Option<&str>, label: impl Render) -> Markup {
    let mut href = from.relative_link(to);
    if let Some(anchor) = anchor {
        href.push('#');
        href.push_str(anchor);
    }
    html! { a href=(href) { (label) } }
}

/// Link to the page (and anchor) documenting `element`.
pub fn element_link(ctx: &Context<'_>, from: &DocPath, element: &Element<'_>, label: &str) -> Markup {
    let target = ctx.page_of(element);
    let anchor = ctx.anchor_of(element);
    link(from, &target, anchor.as_deref(), label)
}

/// Link to a type labelled with its simple name.
pub fn type_link(ctx: &Context<'_>, from: &DocPath, ty: &TypeElement) -> Markup {
    let href = from.relative_link(&ctx.type_page(ty));
    html! { a href=(href) title=(ty.qualified_name()) { (ty.name) } }
}

/// The package name as text followed by a link on the simple name.
pub fn qualified_type_link(ctx: &Context<'_>, from: &DocPath, ty: &TypeElement) -> Markup {
    html! {
        @if !ty.package.is_empty() {
            (ty.package) "."
        }
        (type_link(ctx, from, ty))
    }
}

/// A reference to a type by qualified name: a link when the type is
/// documented, plain code otherwise.
pub fn type_ref(ctx: &Context<'_>, from: &DocPath, name: &str) -> Markup {
    match ctx.resolve_type(name) {
        Some(ty) if ctx.is_documented(&Element::Type(ty)) => type_link(ctx, from, ty),
        _ => html! { code { (name) } },
    }
}

/// Comment text from the model. Comments are already HTML.
pub fn comment(text: &str) -> Markup {
    PreEscaped(text.to_string())
}

/// The first sentence of a comment.
pub fn first_sentence(text: &str) -> &str {
    let text = text.trim();
    FIRST_SENTENCE
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or(text, |m| m.as_str())
}

/// Label that introduces a deprecation note.
pub fn deprecated_phrase(for_removal: bool) -> &'static str {
    if for_removal {
        DEPRECATED_FOR_REMOVAL
    } else {
        DEPRECATED
    }
}

/// The deprecation note shown on a type or member page.
pub fn deprecation_block(deprecation: &Deprecation) -> Markup {
    let class = if deprecation.for_removal {
        "deprecated-label for-removal"
    } else {
        "deprecated-label"
    };
    html! {
        div.deprecation-block {
            span class=(class) { (deprecated_phrase(deprecation.for_removal)) }
            @if let Some(text) = &deprecation.comment {
                div.deprecation-comment { (comment(text)) }
            }
        }
    }
}

/// Words naming the preview feature an element belongs to.
pub fn preview_feature(preview: &Preview) -> String {
    match preview.jep {
        Some(jep) => format!("{} (JEP {jep})", preview.feature),
        None => preview.feature.clone(),
    }
}

/// The preview note shown on a type or member page.
pub fn preview_block(preview: &Preview) -> Markup {
    html! {
        div.preview-block {
            span.preview-label { "Preview." }
            " "
            (preview_feature(preview))
            " is a preview feature; programs can only use it when preview features are enabled."
        }
    }
}

/// Restricted note shown on member pages.
pub fn restricted_block() -> Markup {
    html! {
        div.restricted-block {
            span.restricted-label { "Restricted." }
            " Restricted methods are unsafe and may crash the runtime or corrupt memory when used incorrectly."
        }
    }
}

/// Link targets for the search tags held by any of `holders`.
pub fn tag_targets(ctx: &Context<'_>, holders: &[String]) -> Markup {
    html! {
        @for tag in ctx.model.tags.iter().filter(|t| holders.contains(&t.holder)) {
            span.search-tag-result id=(tag.anchor()) { (tag.term) }
        }
    }
}

/// A `meta refresh` page sending the browser to `target`.
pub fn redirect(ctx: &Context<'_>, path: &DocPath, target: &DocPath) -> Markup {
    let href = path.relative_link(target);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                title { "Redirecting" }
                meta charset=(ctx.config.charset);
                meta http-equiv="Refresh" content={ "0;" (href) };
            }
            body {
                p { "The documentation has moved to " a href=(href) { (href) } "." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_sentence_stops_at_terminator() {
        assert_eq!(first_sentence("Returns the size. Never negative."), "Returns the size.");
        assert_eq!(first_sentence("Version 1.2 is new"), "Version 1.2 is new");
        assert_eq!(first_sentence("  Done!"), "Done!");
    }

    #[test]
    fn doc_root_is_relative() {
        let nested = DocPath::new("java/util/List.html");
        assert_eq!(
            user_html(r#"<a href="{@docRoot}/x.html">x</a>"#, &nested).into_string(),
            r#"<a href="../../x.html">x</a>"#
        );
        let top = DocPath::new(pages::INDEX_ALL);
        assert_eq!(user_html("{@DOCROOT}/a", &top).into_string(), "./a");
    }

    #[test]
    fn links_are_relative_and_escaped() {
        let from = DocPath::new("java/util/List.html");
        let to = DocPath::new(pages::OVERVIEW_TREE);
        assert_eq!(
            link(&from, &to, Some("top"), "A<B>").into_string(),
            r#"<a href="../../overview-tree.html#top">A&lt;B&gt;</a>"#
        );
    }

    #[test]
    fn deprecation_phrases() {
        assert_eq!(deprecated_phrase(false), "Deprecated.");
        assert!(deprecated_phrase(true).starts_with("Deprecated, for removal"));
    }
}
