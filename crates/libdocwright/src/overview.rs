//! The overview page and the module summary pages.

use maud::{Markup, Render, html};

use crate::{
    config::OTHER_PACKAGES,
    context::Context,
    element::Element,
    html::{Nav, comment, deprecation_block, element_link, page, preview_block, tag_targets},
    index::packages_table,
    model::{Module, Package},
    paths::{DocPath, pages},
    summary::Description,
    table::Table,
};

/// A package table with one tab per configured group, in configuration
/// order, followed by the catch-all group.
fn grouped_packages<'t, 'a>(ctx: &'t Context<'a>, id: &str) -> Table<'t, &'a Package> {
    let mut table = Table::new(id)
        .with_caption("Packages")
        .with_default_tab("All Packages");
    let groups = ctx.groups();
    if groups.is_empty() {
        return table;
    }
    let titles: Vec<String> = groups
        .titles()
        .chain(std::iter::once(OTHER_PACKAGES))
        .map(str::to_string)
        .collect();
    for title in titles {
        table = table.with_tab(title.clone(), move |package: &&'a Package| {
            groups.group_for(&package.name) == title
        });
    }
    table
}

/// Table of every documented module.
fn modules_table<'a>(ctx: &Context<'a>, from: &DocPath, modules: &[&'a Module]) -> Markup {
    let mut table = Table::new("all-modules-table")
        .with_caption("Modules")
        .with_headers(["Module", "Description"]);
    for &module in modules {
        let element = Element::Module(module);
        table.add_row(
            module,
            vec![
                element_link(ctx, from, &element, &module.name),
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

/// `overview-summary.html`.
pub(crate) fn overview_page(ctx: &Context<'_>) -> Markup {
    let path = DocPath::new(pages::OVERVIEW_SUMMARY);
    let modules = if ctx.config.show_modules {
        ctx.documented_modules()
    } else {
        Vec::new()
    };
    let packages = ctx.documented_packages();
    let title = ctx.config.doc_title.as_deref().unwrap_or("Overview");
    let content = html! {
        div.header {
            h1.title { (comment(title)) }
        }
        (tag_targets(ctx, &[String::new()]))
        (modules_table(ctx, &path, &modules))
        (packages_table(ctx, &path, grouped_packages(ctx, "all-packages-table"), &packages))
    };
    page(ctx, &path, "Overview", Nav::Overview, content)
}

/// The summary page of one module.
pub(crate) fn module_page(ctx: &Context<'_>, module: &Module) -> (DocPath, Markup) {
    let path = ctx.page_of(&Element::Module(module));
    let packages: Vec<&Package> = ctx
        .documented_packages()
        .into_iter()
        .filter(|p| p.module.as_deref() == Some(module.name.as_str()))
        .collect();
    let status = &module.status;
    let content = html! {
        div.header {
            h1.title { "Module " (module.name) }
        }
        section.module-description {
            @if let Some(deprecation) = &status.deprecated {
                (deprecation_block(deprecation))
            }
            @if let Some(preview) = &status.preview {
                (preview_block(preview))
            }
            @if let Some(summary) = &module.summary {
                div.block { (comment(summary)) }
            }
            (tag_targets(ctx, &[module.name.clone()]))
        }
        section.packages-summary {
            h2 { "Packages" }
            (packages_table(ctx, &path, grouped_packages(ctx, "package-summary-table"), &packages))
        }
    };
    let title = format!("{} Module", module.name);
    let markup = page(ctx, &path, &title, Nav::Module, content);
    (path, markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Configuration, Group},
        testutil::*,
    };

    #[test]
    fn package_groups_become_tabs_in_configured_order() {
        let model = model(
            vec![package("org.zeta"), package("java.lang"), package("java.util"), package("com.other")],
            vec![],
        );
        let config = Configuration::new()
            .with_group(Group::new("Zeta", ["org.zeta"]))
            .with_group(Group::new("Core", ["java.*"]));
        let ctx = Context::new(&model, &config).unwrap();
        let mut table = grouped_packages(&ctx, "t");
        for package in ctx.documented_packages() {
            table.add_row(package, vec![]);
        }
        assert_eq!(table.occurring_tabs(), vec!["Zeta", "Core", OTHER_PACKAGES]);
        assert_eq!(table.items_in_tab("Core").len(), 2);

        let html = overview_page(&ctx).into_string();
        let zeta = html.find(">Zeta<").unwrap();
        let core = html.find(">Core<").unwrap();
        assert!(zeta < core);
    }

    #[test]
    fn overview_without_groups_has_no_tabs() {
        let model = model(vec![package("a"), package("b")], vec![]);
        let config = Configuration::new().with_doc_title("My <b>API</b>");
        let ctx = Context::new(&model, &config).unwrap();
        let html = overview_page(&ctx).into_string();
        assert!(!html.contains("table-tabs"));
        assert!(html.contains("<b>API</b>"));
        assert!(html.contains(r#"href="a/package-summary.html""#));
    }

    #[test]
    fn module_page_lists_its_packages() {
        let mut base = package("java.lang");
        base.module = Some("java.base".to_string());
        let mut other = package("javax.swing");
        other.module = Some("java.desktop".to_string());
        let mut model = model(vec![base, other], vec![]);
        model.modules = vec![module("java.base"), module("java.desktop")];
        let config = Configuration::new().with_show_modules(true);
        let ctx = Context::new(&model, &config).unwrap();
        let (path, html) = module_page(&ctx, &model.modules[0]);
        assert_eq!(path.as_str(), "java.base/module-summary.html");
        let html = html.into_string();
        assert!(html.contains("java/lang/package-summary.html"));
        assert!(!html.contains("javax.swing"));
    }
}
