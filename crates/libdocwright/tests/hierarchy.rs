//! Integration tests covering the class hierarchy pages.
#![allow(clippy::tests_outside_test_module)]

mod utils;

use libdocwright::{ClassTree, ClauseKind, Configuration, Context, Hierarchy, TreeNode, build_tree};
use pretty_assertions::assert_eq;
use serde_json::json;
use utils::*;

fn flatten(nodes: &[TreeNode<'_>], depth: usize, out: &mut Vec<String>) {
    for node in nodes {
        out.push(format!("{}{}", "  ".repeat(depth), node.element.name));
        flatten(&node.children, depth + 1, out);
    }
}

fn shapes() -> libdocwright::Model {
    one_package(vec![
        subclass("p", "Square", "p.Shape"),
        subclass("p", "Ellipse", "p.Circle"),
        class("p", "Shape"),
        subclass("p", "Circle", "p.Shape"),
    ])
}

#[test]
fn shapes_render_once_each_in_name_order() {
    let model = shapes();
    let config = Configuration::new();
    let ctx = Context::new(&model, &config).unwrap();
    let tree = ctx.class_tree();
    let forest = build_tree(
        tree.roots(Hierarchy::Classes),
        tree,
        |name| ctx.resolve_type(name),
        |t| ctx.is_visible(t),
    );

    let mut lines = Vec::new();
    flatten(&forest, 0, &mut lines);
    assert_eq!(lines, vec!["Shape", "  Circle", "    Ellipse", "  Square"]);
    let rendered: usize = forest.iter().map(TreeNode::node_count).sum();
    assert_eq!(rendered, 4);
}

#[test]
fn overview_tree_page_nests_subclasses() {
    let html = render_page(&shapes(), Configuration::new(), "overview-tree.html");
    let shape = html.find(">Shape</a>").unwrap();
    let circle = html.find(">Circle</a>").unwrap();
    let ellipse = html.find(">Ellipse</a>").unwrap();
    let square = html.find(">Square</a>").unwrap();
    assert!(shape < circle && circle < ellipse && ellipse < square);
    assert_eq!(count(&html, ">Circle</a>"), 1);
    assert!(html.contains("<h2 title=\"Class Hierarchy\">Class Hierarchy</h2>"));
    assert!(!html.contains("Interface Hierarchy"));
}

#[test]
fn clause_leaves_out_the_parent() {
    let mut sub = interface("p", "Sub");
    sub["interfaces"] = json!(["p.Base", "p.Drawable"]);
    let mut impl_class = class("p", "Impl");
    impl_class["interfaces"] = json!(["p.Sub", "p.Drawable"]);
    let model = one_package(vec![
        interface("p", "Base"),
        interface("p", "Drawable"),
        sub,
        impl_class,
    ]);
    let config = Configuration::new();
    let ctx = Context::new(&model, &config).unwrap();
    let tree = ctx.class_tree();

    let interfaces = build_tree(
        tree.roots(Hierarchy::Interfaces),
        tree,
        |name| ctx.resolve_type(name),
        |t| ctx.is_visible(t),
    );
    let roots: Vec<&str> = interfaces.iter().map(|n| n.element.name.as_str()).collect();
    assert_eq!(roots, vec!["Base", "Drawable"]);
    let sub = &interfaces[0].children[0];
    assert_eq!(sub.element.name, "Sub");
    let clause = sub.clause.as_ref().unwrap();
    assert_eq!(clause.kind, ClauseKind::AlsoExtends);
    let named: Vec<&str> = clause.interfaces.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(named, vec!["Drawable"]);

    let classes = build_tree(
        tree.roots(Hierarchy::Classes),
        tree,
        |name| ctx.resolve_type(name),
        |t| ctx.is_visible(t),
    );
    let clause = classes[0].clause.as_ref().unwrap();
    assert_eq!(clause.kind, ClauseKind::Implements);
    let named: Vec<&str> = clause.interfaces.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(named, vec!["Drawable", "Sub"]);
}

#[test]
fn cyclic_types_are_reported_not_rendered() {
    let model = one_package(vec![
        class("p", "Root"),
        subclass("p", "A", "p.B"),
        subclass("p", "B", "p.A"),
    ]);
    let refs: Vec<_> = model.types.iter().collect();
    let tree = ClassTree::build(&refs);
    let stuck: Vec<&str> = tree.unreachable().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(stuck, vec!["A", "B"]);

    let (dir, report) = generate(&model, Configuration::new());
    assert_eq!(report.diagnostics.len(), 2);
    let html = read_page(&dir, "overview-tree.html");
    assert!(html.contains(">Root</a>"));
    assert!(!html.contains(">A</a>"));
}

#[test]
fn package_tree_links_back_to_all_packages() {
    let html = render_page(&shapes(), Configuration::new(), "p/package-tree.html");
    assert!(html.contains("Hierarchy For Package p"));
    assert!(html.contains(r#"href="../overview-tree.html""#));
}
