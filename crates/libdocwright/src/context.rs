//! The read-only state shared by every page of one run.

use std::collections::HashMap;

use crate::{
    classify::{Classification, ElementCategory, classify},
    comparators,
    config::{Configuration, GroupMatcher},
    diagnostics::{self, Diagnostic},
    element::Element,
    error::Result,
    model::{Model, Module, Package, TypeElement, TypeKind, Visibility},
    paths::{self, DocPath, pages},
    tree::ClassTree,
};

/// Model, configuration and the lookups derived from them.
pub struct Context<'a> {
    /// The model being documented.
    pub model: &'a Model,
    /// Options for this run.
    pub config: &'a Configuration,
    /// Types by qualified name, first declaration only.
    types: HashMap<String, &'a TypeElement>,
    /// Packages by name.
    packages: HashMap<&'a str, &'a Package>,
    /// Modules by name.
    modules: HashMap<&'a str, &'a Module>,
    /// Compiled overview groups.
    groups: GroupMatcher,
    /// Hierarchy of every documented type.
    class_tree: ClassTree<'a>,
    /// Problems found while indexing the model.
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Context<'a> {
    /// Index the model and check it for problems.
    pub fn new(model: &'a Model, config: &'a Configuration) -> Result<Self> {
        let mut types = HashMap::new();
        for ty in &model.types {
            types.entry(ty.qualified_name()).or_insert(ty);
        }
        let packages = model.packages.iter().map(|p| (p.name.as_str(), p)).collect();
        let modules = model.modules.iter().map(|m| (m.name.as_str(), m)).collect();
        let groups = GroupMatcher::new(&config.groups)?;

        let mut ctx = Self {
            model,
            config,
            types,
            packages,
            modules,
            groups,
            class_tree: ClassTree::default(),
            diagnostics: Vec::new(),
        };
        ctx.class_tree = ClassTree::build(&ctx.documented_types());
        ctx.diagnostics = diagnostics::check(&ctx);
        Ok(ctx)
    }

    /// Look up a type by qualified name.
    pub fn resolve_type(&self, name: &str) -> Option<&'a TypeElement> {
        self.types.get(name).copied()
    }

    /// Look up a package by name.
    pub fn package(&self, name: &str) -> Option<&'a Package> {
        self.packages.get(name).copied()
    }

    /// Look up a module by name.
    pub fn module(&self, name: &str) -> Option<&'a Module> {
        self.modules.get(name).copied()
    }

    /// Hierarchy of every documented type.
    pub fn class_tree(&self) -> &ClassTree<'a> {
        &self.class_tree
    }

    /// Problems found in the model.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Classification tags of an element.
    pub fn classify(&self, element: &Element<'a>) -> Classification {
        classify(element, |name| self.resolve_type(name))
    }

    /// Listing category of an element.
    pub fn category(&self, element: &Element<'a>) -> Option<ElementCategory> {
        ElementCategory::of(element, self.classify(element))
    }

    /// Every element of the model in declaration order: modules, packages,
    /// then each type followed by its members.
    pub fn elements(&self) -> Vec<Element<'a>> {
        let model = self.model;
        let mut elements: Vec<Element<'a>> = model.modules.iter().map(Element::Module).collect();
        elements.extend(model.packages.iter().map(Element::Package));
        for ty in &model.types {
            elements.push(Element::Type(ty));
            elements.extend(ty.members.iter().map(|m| Element::Member(ty, m)));
        }
        elements
    }

    /// Whether the named package exists and is excluded.
    fn package_excluded(&self, name: &str) -> bool {
        self.package(name)
            .is_some_and(|p| p.status.hidden || !p.included)
    }

    /// Whether the named package is deprecated.
    fn package_deprecated(&self, name: &str) -> bool {
        self.package(name).is_some_and(|p| p.status.is_deprecated())
    }

    /// Module that declares the package.
    fn module_of(&self, package: &Package) -> Option<&'a Module> {
        package.module.as_deref().and_then(|m| self.module(m))
    }

    /// Whether the element is hidden, or sits directly inside an excluded
    /// container. A type's container is its package, a package's container
    /// is its module and a member's container is its declaring type.
    pub fn is_excluded(&self, element: &Element<'a>) -> bool {
        if element.status().hidden {
            return true;
        }
        match element {
            Element::Module(_) => false,
            Element::Package(p) => self.module_of(p).is_some_and(|m| m.status.hidden),
            Element::Type(t) => self.package_excluded(&t.package),
            Element::Member(owner, _) => {
                owner.status.hidden
                    || owner.kind == TypeKind::Unknown
                    || self.package_excluded(&owner.package)
            }
        }
    }

    /// Whether no-deprecated mode removes the element: it is deprecated
    /// itself or its container is.
    pub fn is_suppressed(&self, element: &Element<'a>) -> bool {
        if !self.config.no_deprecated {
            return false;
        }
        if element.status().is_deprecated() {
            return true;
        }
        match element {
            Element::Module(_) => false,
            Element::Package(p) => self
                .module_of(p)
                .is_some_and(|m| m.status.is_deprecated()),
            Element::Type(t) => self.package_deprecated(&t.package),
            Element::Member(owner, _) => {
                owner.status.is_deprecated() || self.package_deprecated(&owner.package)
            }
        }
    }

    /// Whether the element appears in the generated documentation.
    pub fn is_documented(&self, element: &Element<'a>) -> bool {
        self.classify(element).is_recognized()
            && !self.is_excluded(element)
            && !self.is_suppressed(element)
    }

    /// Whether the element gets an entry in listings and indexes. On top of
    /// being documented, a type must be the first declaration of its name, a
    /// member's owner must be listed and modules are listed only when shown.
    pub fn is_listed(&self, element: &Element<'a>) -> bool {
        if !self.is_documented(element) {
            return false;
        }
        match element {
            Element::Module(_) => self.config.show_modules,
            Element::Package(_) => true,
            Element::Type(t) => self.is_first_declaration(t),
            Element::Member(owner, _) => self.is_listed(&Element::Type(owner)),
        }
    }

    /// Later duplicates of a qualified name get no page.
    fn is_first_declaration(&self, ty: &TypeElement) -> bool {
        self.resolve_type(&ty.qualified_name())
            .is_some_and(|first| std::ptr::eq(first, ty))
    }

    /// Whether a type may be named in another type's supertype clauses.
    pub fn is_visible(&self, ty: &TypeElement) -> bool {
        self.resolve_type(&ty.qualified_name())
            .is_some_and(|t| self.is_documented(&Element::Type(t)))
            && matches!(ty.visibility, Visibility::Public | Visibility::Protected)
    }

    /// Documented modules, sorted by name.
    pub fn documented_modules(&self) -> Vec<&'a Module> {
        let mut modules: Vec<&'a Module> = self
            .model
            .modules
            .iter()
            .filter(|m| self.is_documented(&Element::Module(m)))
            .collect();
        modules.sort_by(|a, b| comparators::compare_names(&a.name, &b.name));
        modules
    }

    /// Documented packages, sorted by name.
    pub fn documented_packages(&self) -> Vec<&'a Package> {
        let mut packages: Vec<&'a Package> = self
            .model
            .packages
            .iter()
            .filter(|p| self.is_documented(&Element::Package(p)))
            .collect();
        packages.sort_by(|a, b| comparators::compare_names(&a.name, &b.name));
        packages
    }

    /// Documented types, in declaration order. Of several declarations
    /// sharing a qualified name only the first is documented.
    pub fn documented_types(&self) -> Vec<&'a TypeElement> {
        self.model
            .types
            .iter()
            .filter(|t| self.is_first_declaration(t))
            .filter(|t| self.is_documented(&Element::Type(t)))
            .collect()
    }

    /// Documented types of one package, sorted.
    pub fn types_in(&self, package: &str) -> Vec<&'a TypeElement> {
        let mut types: Vec<&'a TypeElement> = self
            .documented_types()
            .into_iter()
            .filter(|t| t.package == package)
            .collect();
        types.sort_by(|a, b| comparators::types(a, b));
        types
    }

    /// Documented members of a type, in declaration order.
    pub fn documented_members(&self, ty: &'a TypeElement) -> Vec<Element<'a>> {
        ty.members
            .iter()
            .map(|m| Element::Member(ty, m))
            .filter(|e| self.is_documented(e))
            .collect()
    }

    /// Compiled package groups.
    pub fn groups(&self) -> &GroupMatcher {
        &self.groups
    }

    /// Directory holding a package's pages.
    pub fn package_dir(&self, package: &str) -> DocPath {
        let module = if self.config.show_modules {
            self.package(package).and_then(|p| p.module.as_deref())
        } else {
            None
        };
        paths::package_dir(package, module)
    }

    /// Page that documents an element. Members live on their type's page.
    pub fn page_of(&self, element: &Element<'a>) -> DocPath {
        match element {
            Element::Module(m) => paths::module_summary(&m.name, self.config.show_modules),
            Element::Package(p) => self.package_dir(&p.name).resolve(pages::PACKAGE_SUMMARY),
            Element::Type(t) | Element::Member(t, _) => self.type_page(t),
        }
    }

    /// Page of a type.
    pub fn type_page(&self, ty: &TypeElement) -> DocPath {
        self.package_dir(&ty.package)
            .resolve(format!("{}.html", ty.name))
    }

    /// Anchor of an element on its page.
    pub fn anchor_of(&self, element: &Element<'a>) -> Option<String> {
        match element {
            Element::Member(_, m) => Some(paths::anchor(&m.label())),
            _ => None,
        }
    }

    /// The element a search tag holder names, whether or not it is
    /// documented. `None` for the overview and for unknown names.
    pub fn holder_element(&self, holder: &str) -> Option<Element<'a>> {
        if let Some((owner, member)) = holder.split_once('#') {
            let ty = self.resolve_type(owner)?;
            let member = ty
                .members
                .iter()
                .find(|m| m.label() == member || m.name == member)?;
            return Some(Element::Member(ty, member));
        }
        self.resolve_type(holder)
            .map(Element::Type)
            .or_else(|| self.package(holder).map(Element::Package))
            .or_else(|| self.module(holder).map(Element::Module))
    }

    /// Resolve the holder of a search tag to a page and a label. An empty
    /// holder denotes the overview. Holders that get no page of their own,
    /// because they are unknown, hidden, excluded or suppressed, resolve to
    /// nothing.
    pub fn resolve_holder(&self, holder: &str) -> Option<(DocPath, String)> {
        if holder.is_empty() {
            return Some((DocPath::new(pages::OVERVIEW_SUMMARY), "Overview".to_string()));
        }
        let element = self.holder_element(holder)?;
        if !self.is_listed(&element) {
            return None;
        }
        Some((self.page_of(&element), element.qualified_name()))
    }
}
