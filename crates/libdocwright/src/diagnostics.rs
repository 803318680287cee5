//! Non-fatal findings about the input model.
//!
//! Bad input never aborts a run: each problem is logged, attached to the
//! offending element and returned with the generation report.

use std::{collections::HashSet, fmt};

use tracing::warn;

use crate::{
    context::Context,
    model::{MemberKind, TypeKind},
};

/// A warning about one element of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Qualified name of the element the warning is about.
    pub element: String,
    /// What is wrong.
    pub message: String,
}

impl Diagnostic {
    /// A diagnostic, logged as it is created.
    fn new(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.element, self.message)
    }
}

/// Inspect the model behind `ctx` and collect every diagnostic.
pub(crate) fn check(ctx: &Context<'_>) -> Vec<Diagnostic> {
    let model = ctx.model;
    let mut found = Vec::new();

    let mut seen = HashSet::new();
    for ty in &model.types {
        let name = ty.qualified_name();
        if !seen.insert(name.clone()) {
            found.push(Diagnostic::new(&name, "duplicate type declaration"));
        }
        if ty.kind == TypeKind::Unknown {
            found.push(Diagnostic::new(&name, "unknown type kind, left out of the output"));
        }
        if !ty.package.is_empty() && ctx.package(&ty.package).is_none() {
            found.push(Diagnostic::new(
                &name,
                format!("package {} is not declared", ty.package),
            ));
        }
        for member in &ty.members {
            if member.kind == MemberKind::Unknown {
                found.push(Diagnostic::new(
                    format!("{name}.{}", member.label()),
                    "unknown member kind, left out of the output",
                ));
            }
        }
    }

    for element in ctx.elements() {
        if let Some(preview) = &element.status().preview
            && preview.feature.trim().is_empty()
        {
            found.push(Diagnostic::new(
                element.qualified_name(),
                "preview element does not name its feature",
            ));
        }
    }

    for tag in &model.tags {
        if ctx.resolve_holder(&tag.holder).is_some() {
            continue;
        }
        let message = if ctx.holder_element(&tag.holder).is_some() {
            format!("search tag {:?} is held by an undocumented element, left out", tag.term)
        } else {
            format!("search tag {:?} refers to an unknown element", tag.term)
        };
        found.push(Diagnostic::new(&tag.holder, message));
    }

    for ty in ctx.class_tree().unreachable() {
        found.push(Diagnostic::new(
            ty.qualified_name(),
            "type is part of a supertype cycle and is left out of the hierarchy",
        ));
    }

    for diagnostic in &found {
        warn!(element = %diagnostic.element, "{}", diagnostic.message);
    }
    found
}
