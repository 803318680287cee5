//! Package summary pages.

use maud::{Markup, html};

use crate::{
    context::Context,
    element::Element,
    html::{Nav, comment, deprecation_block, element_link, link, page, preview_block, tag_targets},
    index::types_table,
    model::Package,
    paths::DocPath,
    tree::package_tree_path,
};

/// `<package>/package-summary.html`.
pub(crate) fn package_page(ctx: &Context<'_>, package: &Package) -> (DocPath, Markup) {
    let element = Element::Package(package);
    let path = ctx.page_of(&element);
    let types = ctx.types_in(&package.name);
    let table = types_table(ctx, &path, "class-summary", "Classes and Interfaces", &types);
    let module = package
        .module
        .as_deref()
        .filter(|_| ctx.config.show_modules)
        .and_then(|name| ctx.module(name));
    let status = &package.status;
    let heading = if package.name.is_empty() {
        element.display_name()
    } else {
        format!("Package {}", package.name)
    };
    let content = html! {
        div.header {
            @if let Some(module) = module {
                div.sub-title {
                    span.module-label-in-package { "Module" }
                    " "
                    (element_link(ctx, &path, &Element::Module(module), &module.name))
                }
            }
            h1.title { (heading) }
        }
        section.package-description {
            @if let Some(deprecation) = &status.deprecated {
                (deprecation_block(deprecation))
            }
            @if let Some(preview) = &status.preview {
                (preview_block(preview))
            }
            @if let Some(summary) = &package.summary {
                div.block { (comment(summary)) }
            }
            @if let Some(since) = &status.since {
                dl.notes {
                    dt { "Since:" }
                    dd { (since) }
                }
            }
            (tag_targets(ctx, &[package.name.clone()]))
        }
        @if !table.is_empty() {
            section.summary {
                (table.render())
            }
        }
        @if ctx.config.create_tree {
            p.package-hierarchy-link {
                (link(&path, &package_tree_path(ctx, package), None, "Package Hierarchy"))
            }
        }
    };
    let markup = page(ctx, &path, &heading, Nav::Package, content);
    (path, markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Configuration, model::TypeKind, testutil::*};
    use pretty_assertions::assert_eq;

    #[test]
    fn package_page_tabs_by_kind() {
        let model = model(
            vec![package("java.util")],
            vec![
                interface("java.util", "List"),
                class("java.util", "ArrayList"),
                type_of(TypeKind::Enum, "java.util", "Mode"),
            ],
        );
        let config = Configuration::new();
        let ctx = Context::new(&model, &config).unwrap();
        let (path, html) = package_page(&ctx, &model.packages[0]);
        assert_eq!(path.as_str(), "java/util/package-summary.html");
        let html = html.into_string();
        assert!(html.contains("<h1 class=\"title\">Package java.util</h1>"));
        assert!(html.contains(">Interfaces<"));
        assert!(html.contains(">Enum Classes<"));
        assert!(html.contains(r#"href="../../java/util/List.html""#));
        assert!(html.contains(r#"href="../../java/util/package-tree.html""#));
    }

    #[test]
    fn empty_package_has_no_table() {
        let model = model(vec![package("empty")], vec![]);
        let config = Configuration::new().with_tree(false);
        let ctx = Context::new(&model, &config).unwrap();
        let (_, html) = package_page(&ctx, &model.packages[0]);
        let html = html.into_string();
        assert!(!html.contains("class-summary"));
        assert!(!html.contains("package-tree.html"));
    }
}
