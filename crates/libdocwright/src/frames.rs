//! The entry page. With frames enabled it is a frameset over the package
//! list, the type list and the content frame; otherwise it redirects to the
//! overview.

use maud::{DOCTYPE, Markup, html};

use crate::{
    comparators,
    context::Context,
    element::Element,
    html::redirect,
    model::{Package, TypeElement},
    paths::{DocPath, pages},
};

/// Frame names used as link targets.
const LIST_FRAME: &str = "packageListFrame";
const PACKAGE_FRAME: &str = "packageFrame";
const CLASS_FRAME: &str = "classFrame";

/// Minimal chrome shared by the pages shown inside frames.
fn frame_page(ctx: &Context<'_>, path: &DocPath, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                title { (title) }
                meta charset=(ctx.config.charset);
                link rel="stylesheet" type="text/css" href={ (path.to_root()) (pages::STYLESHEET) };
            }
            body.frame {
                (content)
            }
        }
    }
}

/// Linked type names targeting the class frame.
fn type_list(ctx: &Context<'_>, from: &DocPath, types: &[&TypeElement]) -> Markup {
    html! {
        ul title="Classes" {
            @for ty in types {
                li {
                    a href=(from.relative_link(&ctx.type_page(ty))) target=(CLASS_FRAME)
                        title=(ty.qualified_name()) {
                        @if ty.is_interface() {
                            span.interface-name { (ty.name) }
                        } @else {
                            (ty.name)
                        }
                    }
                }
            }
        }
    }
}

/// `index.html`.
pub(crate) fn index_page(ctx: &Context<'_>) -> Markup {
    let path = DocPath::new(pages::INDEX);
    let overview = DocPath::new(pages::OVERVIEW_SUMMARY);
    if !ctx.config.frames {
        return redirect(ctx, &path, &overview);
    }
    let title = ctx.config.window_title.as_deref().unwrap_or("Generated Documentation");
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                title { (title) }
                meta charset=(ctx.config.charset);
            }
            frameset cols="20%,80%" title="Documentation frame" {
                frameset rows="30%,70%" title="Left frames" {
                    frame src=(pages::OVERVIEW_FRAME) name=(LIST_FRAME) title="All Packages";
                    frame src=(pages::ALLCLASSES_FRAME) name=(PACKAGE_FRAME) title="All classes and interfaces";
                }
                frame src=(pages::OVERVIEW_SUMMARY) name=(CLASS_FRAME) title="Package, class and interface descriptions" scrolling="yes";
                noframes {
                    h2 { "Frame Alert" }
                    p {
                        "This document is designed to be viewed using the frames feature. "
                        "Link to the " a href=(pages::OVERVIEW_SUMMARY) { "Non-frame version" } "."
                    }
                }
            }
        }
    }
}

/// `overview-frame.html`: every package, linking to its frame.
pub(crate) fn overview_frame(ctx: &Context<'_>) -> Markup {
    let path = DocPath::new(pages::OVERVIEW_FRAME);
    let content = html! {
        div.index-nav {
            a href=(pages::ALLCLASSES_FRAME) target=(PACKAGE_FRAME) { "All Classes and Interfaces" }
        }
        div.index-container {
            h2 title="Packages" { "Packages" }
            ul title="Packages" {
                @for package in ctx.documented_packages() {
                    li {
                        a href=(path.relative_link(&package_frame_path(ctx, package))) target=(PACKAGE_FRAME) {
                            (Element::Package(package).display_name())
                        }
                    }
                }
            }
        }
    };
    frame_page(ctx, &path, "Overview List", content)
}

/// `allclasses-frame.html`.
pub(crate) fn all_classes_frame(ctx: &Context<'_>) -> Markup {
    let path = DocPath::new(pages::ALLCLASSES_FRAME);
    let mut types = ctx.documented_types();
    types.sort_by(|a, b| comparators::types(a, b));
    let content = html! {
        h1.bar { "All Classes and Interfaces" }
        div.index-container { (type_list(ctx, &path, &types)) }
    };
    frame_page(ctx, &path, "All Classes and Interfaces", content)
}

/// Path of a package's frame.
pub(crate) fn package_frame_path(ctx: &Context<'_>, package: &Package) -> DocPath {
    ctx.package_dir(&package.name).resolve(pages::PACKAGE_FRAME)
}

/// `<package>/package-frame.html`.
pub(crate) fn package_frame(ctx: &Context<'_>, package: &Package) -> Markup {
    let path = package_frame_path(ctx, package);
    let summary = ctx.page_of(&Element::Package(package));
    let types = ctx.types_in(&package.name);
    let name = Element::Package(package).display_name();
    let content = html! {
        h1.bar {
            a href=(path.relative_link(&summary)) target=(CLASS_FRAME) { (name) }
        }
        div.index-container { (type_list(ctx, &path, &types)) }
    };
    frame_page(ctx, &path, &name, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Configuration, testutil::*};
    use pretty_assertions::assert_eq;

    #[test]
    fn without_frames_index_redirects() {
        let model = model(vec![package("p")], vec![class("p", "A")]);
        let config = Configuration::new();
        let ctx = Context::new(&model, &config).unwrap();
        let html = index_page(&ctx).into_string();
        assert!(html.contains(r#"content="0;overview-summary.html""#));
        assert!(!html.contains("frameset"));
    }

    #[test]
    fn frames_link_into_the_content_frame() {
        let model = model(
            vec![package("java.util")],
            vec![class("java.util", "ArrayList"), interface("java.util", "List")],
        );
        let config = Configuration::new().with_frames(true);
        let ctx = Context::new(&model, &config).unwrap();

        let index = index_page(&ctx).into_string();
        assert!(index.contains(r#"<frame src="overview-frame.html" name="packageListFrame""#));

        let overview = overview_frame(&ctx).into_string();
        assert!(overview.contains(r#"href="java/util/package-frame.html" target="packageFrame""#));

        let frame = package_frame(&ctx, &model.packages[0]).into_string();
        let array_list = frame.find(">ArrayList<").unwrap();
        let list = frame.find(r#"<span class="interface-name">List</span>"#).unwrap();
        assert!(array_list < list);
        assert!(frame.contains(r#"href="../../java/util/ArrayList.html" target="classFrame""#));
        assert_eq!(
            package_frame_path(&ctx, &model.packages[0]).as_str(),
            "java/util/package-frame.html"
        );
    }
}
