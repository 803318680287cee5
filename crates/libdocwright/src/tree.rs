//! Class hierarchies: the parent/child relation between documented types,
//! the nested tree built from it and the hierarchy pages.

use std::collections::{HashMap, HashSet};

use maud::{Markup, html};

use crate::{
    comparators,
    context::Context,
    html::{Nav, link, page, qualified_type_link},
    model::{Package, TypeElement, TypeKind},
    paths::{DocPath, pages},
};

/// One of the five disjoint hierarchies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hierarchy {
    /// Classes.
    Classes,
    /// Interfaces.
    Interfaces,
    /// Annotation interfaces.
    AnnotationTypes,
    /// Enum classes.
    Enums,
    /// Record classes.
    Records,
}

impl Hierarchy {
    /// All hierarchies, in page order.
    pub const ALL: [Self; 5] = [
        Self::Classes,
        Self::Interfaces,
        Self::AnnotationTypes,
        Self::Enums,
        Self::Records,
    ];

    /// The hierarchy a type belongs to.
    pub fn of(ty: &TypeElement) -> Option<Self> {
        match ty.kind {
            TypeKind::Class => Some(Self::Classes),
            TypeKind::Interface => Some(Self::Interfaces),
            TypeKind::Annotation => Some(Self::AnnotationTypes),
            TypeKind::Enum => Some(Self::Enums),
            TypeKind::Record => Some(Self::Records),
            TypeKind::Unknown => None,
        }
    }

    /// Section heading.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Classes => "Class Hierarchy",
            Self::Interfaces => "Interface Hierarchy",
            Self::AnnotationTypes => "Annotation Interface Hierarchy",
            Self::Enums => "Enum Class Hierarchy",
            Self::Records => "Record Class Hierarchy",
        }
    }
}

/// Parent/child relations between a set of types.
///
/// A class's parent is its superclass and an interface's parent is its first
/// superinterface, when that type is part of the set. Enums, records and
/// annotation interfaces have no parent. Roots and child lists are sorted.
#[derive(Debug, Default)]
pub struct ClassTree<'a> {
    /// Types without a parent in the set.
    roots: HashMap<Hierarchy, Vec<&'a TypeElement>>,
    /// Children by the parent's qualified name.
    subtypes: HashMap<String, Vec<&'a TypeElement>>,
    /// Classes by the qualified name of an interface they implement.
    implementors: HashMap<String, Vec<&'a TypeElement>>,
    /// Interfaces by the qualified name of every direct superinterface.
    subinterfaces: HashMap<String, Vec<&'a TypeElement>>,
    /// Types caught in supertype cycles.
    unreachable: Vec<&'a TypeElement>,
}

impl<'a> ClassTree<'a> {
    /// Derive the relation over `types`.
    pub fn build(types: &[&'a TypeElement]) -> Self {
        let by_name: HashMap<String, &'a TypeElement> = types
            .iter()
            .map(|t| (t.qualified_name(), *t))
            .collect();
        let mut tree = Self::default();

        for &ty in types {
            let Some(hierarchy) = Hierarchy::of(ty) else {
                continue;
            };
            match parent(ty, &by_name) {
                Some(parent) => tree
                    .subtypes
                    .entry(parent.qualified_name())
                    .or_default()
                    .push(ty),
                None => tree.roots.entry(hierarchy).or_default().push(ty),
            }
            let known = if ty.is_interface() {
                &mut tree.subinterfaces
            } else {
                &mut tree.implementors
            };
            for name in &ty.interfaces {
                if let Some(iface) = by_name.get(name)
                    && iface.is_interface()
                {
                    known.entry(name.clone()).or_default().push(ty);
                }
            }
        }

        for list in tree
            .roots
            .values_mut()
            .chain(tree.subtypes.values_mut())
            .chain(tree.implementors.values_mut())
            .chain(tree.subinterfaces.values_mut())
        {
            list.sort_by(|a, b| comparators::types(a, b));
        }

        let mut reached = HashSet::new();
        let mut pending: Vec<&'a TypeElement> = tree.roots.values().flatten().copied().collect();
        while let Some(ty) = pending.pop() {
            if reached.insert(ty.qualified_name()) {
                pending.extend(tree.subtypes(ty).iter().copied());
            }
        }
        tree.unreachable = types
            .iter()
            .filter(|t| Hierarchy::of(t).is_some() && !reached.contains(&t.qualified_name()))
            .copied()
            .collect();
        tree
    }

    /// Sorted roots of one hierarchy.
    pub fn roots(&self, hierarchy: Hierarchy) -> &[&'a TypeElement] {
        self.roots.get(&hierarchy).map_or(&[], Vec::as_slice)
    }

    /// Sorted direct subtypes of a type within its hierarchy.
    pub fn subtypes(&self, ty: &TypeElement) -> &[&'a TypeElement] {
        self.subtypes
            .get(&ty.qualified_name())
            .map_or(&[], Vec::as_slice)
    }

    /// Sorted interfaces that directly extend an interface, through any of
    /// their superinterfaces and not just the first.
    pub fn subinterfaces(&self, ty: &TypeElement) -> &[&'a TypeElement] {
        self.subinterfaces
            .get(&ty.qualified_name())
            .map_or(&[], Vec::as_slice)
    }

    /// Sorted classes, enums and records that directly implement an interface.
    pub fn implementors(&self, ty: &TypeElement) -> &[&'a TypeElement] {
        self.implementors
            .get(&ty.qualified_name())
            .map_or(&[], Vec::as_slice)
    }

    /// Types that no root reaches because their supertypes form a cycle.
    pub fn unreachable(&self) -> &[&'a TypeElement] {
        &self.unreachable
    }

    /// Whether every hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.roots.values().all(Vec::is_empty)
    }
}

/// Parent of a type within the set.
fn parent<'a>(
    ty: &TypeElement,
    by_name: &HashMap<String, &'a TypeElement>,
) -> Option<&'a TypeElement> {
    match ty.kind {
        TypeKind::Class => ty
            .superclass
            .as_ref()
            .and_then(|name| by_name.get(name))
            .filter(|p| p.kind == TypeKind::Class)
            .copied(),
        TypeKind::Interface => ty
            .interfaces
            .iter()
            .filter_map(|name| by_name.get(name))
            .find(|p| p.is_interface())
            .copied(),
        _ => None,
    }
}

/// Which words introduce a node's extra supertypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// `implements`, on classes.
    Implements,
    /// `also extends`, on interfaces.
    AlsoExtends,
}

impl ClauseKind {
    /// Words as rendered.
    pub fn label(self) -> &'static str {
        match self {
            Self::Implements => "implements",
            Self::AlsoExtends => "also extends",
        }
    }
}

/// The "(implements ...)" or "(also extends ...)" note of a node.
#[derive(Debug, Clone)]
pub struct Clause<'a> {
    /// Introducing words.
    pub kind: ClauseKind,
    /// Interfaces named by the clause, sorted.
    pub interfaces: Vec<&'a TypeElement>,
}

/// One rendered entry of a hierarchy.
#[derive(Debug, Clone)]
pub struct TreeNode<'a> {
    /// The type at this position.
    pub element: &'a TypeElement,
    /// Supertypes other than the parent node.
    pub clause: Option<Clause<'a>>,
    /// Direct subtypes, sorted.
    pub children: Vec<TreeNode<'a>>,
}

impl TreeNode<'_> {
    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}

/// Build the nested tree below `roots`.
///
/// `resolve` maps interface names to declarations and `visible` decides
/// which interfaces may be named in a clause. The first root anchors the top
/// level unless it is an interface, so top-level nodes do not restate it.
/// `tree` must be acyclic; [`ClassTree::build`] guarantees that by leaving
/// cyclic types unreachable.
pub fn build_tree<'a, R, V>(
    roots: &[&'a TypeElement],
    tree: &ClassTree<'a>,
    resolve: R,
    visible: V,
) -> Vec<TreeNode<'a>>
where
    R: Fn(&str) -> Option<&'a TypeElement>,
    V: Fn(&TypeElement) -> bool,
{
    let anchor = roots.first().copied().filter(|first| !first.is_interface());
    level(anchor, roots, tree, &resolve, &visible)
}

/// Nodes for `types`, with their subtypes below them.
fn level<'a, R, V>(
    parent: Option<&'a TypeElement>,
    types: &[&'a TypeElement],
    tree: &ClassTree<'a>,
    resolve: &R,
    visible: &V,
) -> Vec<TreeNode<'a>>
where
    R: Fn(&str) -> Option<&'a TypeElement>,
    V: Fn(&TypeElement) -> bool,
{
    types
        .iter()
        .map(|&ty| TreeNode {
            element: ty,
            clause: clause(parent, ty, resolve, visible),
            children: level(Some(ty), tree.subtypes(ty), tree, resolve, visible),
        })
        .collect()
}

/// Interfaces a type lists beside its parent.
fn clause<'a, R, V>(
    parent: Option<&TypeElement>,
    ty: &TypeElement,
    resolve: &R,
    visible: &V,
) -> Option<Clause<'a>>
where
    R: Fn(&str) -> Option<&'a TypeElement>,
    V: Fn(&TypeElement) -> bool,
{
    let parent_name = parent.map(TypeElement::qualified_name);
    let mut interfaces: Vec<&'a TypeElement> = ty
        .interfaces
        .iter()
        .filter(|name| parent_name.as_deref() != Some(name.as_str()))
        .filter_map(|name| resolve(name.as_str()))
        .filter(|iface| visible(*iface))
        .collect();
    if interfaces.is_empty() {
        return None;
    }
    interfaces.sort_by(|a, b| comparators::types(a, b));
    interfaces.dedup_by(|a, b| std::ptr::eq(*a, *b));
    let kind = if ty.is_interface() {
        ClauseKind::AlsoExtends
    } else {
        ClauseKind::Implements
    };
    Some(Clause { kind, interfaces })
}

/// Nested `ul` of tree nodes.
fn render_nodes(ctx: &Context<'_>, from: &DocPath, nodes: &[TreeNode<'_>]) -> Markup {
    html! {
        ul {
            @for node in nodes {
                li.circle {
                    (qualified_type_link(ctx, from, node.element))
                    @if let Some(clause) = &node.clause {
                        " (" (clause.kind.label()) " "
                        @for (i, iface) in clause.interfaces.iter().enumerate() {
                            @if i > 0 { ", " }
                            (qualified_type_link(ctx, from, iface))
                        }
                        ")"
                    }
                    @if !node.children.is_empty() {
                        (render_nodes(ctx, from, &node.children))
                    }
                }
            }
        }
    }
}

/// Class, interface, annotation and enum hierarchies.
fn render_hierarchies<'a>(ctx: &Context<'a>, from: &DocPath, tree: &ClassTree<'a>) -> Markup {
    html! {
        @for hierarchy in Hierarchy::ALL {
            @let roots = tree.roots(hierarchy);
            @if !roots.is_empty() {
                section.hierarchy {
                    h2 title=(hierarchy.heading()) { (hierarchy.heading()) }
                    (render_nodes(ctx, from, &build_tree(
                        roots,
                        tree,
                        |name| ctx.resolve_type(name),
                        |t| ctx.is_visible(t),
                    )))
                }
            }
        }
    }
}

/// `overview-tree.html`: every documented type.
pub(crate) fn overview_tree(ctx: &Context<'_>) -> Markup {
    let path = DocPath::new(pages::OVERVIEW_TREE);
    let packages = ctx.documented_packages();
    let content = html! {
        div.header {
            h1.title { "Hierarchy For All Packages" }
            @if !packages.is_empty() {
                span.package-hierarchy-label { "Package Hierarchies:" }
                ul.horizontal {
                    @for (i, package) in packages.iter().enumerate() {
                        li {
                            (link(&path, &package_tree_path(ctx, package), None, package.name.as_str()))
                            @if i + 1 < packages.len() { ", " }
                        }
                    }
                }
            }
        }
        (render_hierarchies(ctx, &path, ctx.class_tree()))
    };
    page(ctx, &path, "Class Hierarchy", Nav::Tree, content)
}

/// Path of a package's hierarchy page.
pub(crate) fn package_tree_path(ctx: &Context<'_>, package: &Package) -> DocPath {
    ctx.package_dir(&package.name).resolve(pages::PACKAGE_TREE)
}

/// `<package>/package-tree.html`: the types of one package. Supertypes in
/// other packages are not shown, so their subtypes become roots.
pub(crate) fn package_tree(ctx: &Context<'_>, package: &Package) -> Markup {
    let path = package_tree_path(ctx, package);
    let types = ctx.types_in(&package.name);
    let tree = ClassTree::build(&types);
    let title = format!("{} Class Hierarchy", package.name);
    let content = html! {
        div.header {
            h1.title { "Hierarchy For Package " (package.name) }
            span.package-hierarchy-label { "Package Hierarchies:" }
            ul.horizontal {
                li { (link(&path, &DocPath::new(pages::OVERVIEW_TREE), None, "All Packages")) }
            }
        }
        (render_hierarchies(ctx, &path, &tree))
    };
    page(ctx, &path, &title, Nav::Tree, content)
}
