//! A closed view over the documented entities of a [`Model`](crate::Model).

use crate::model::{Member, MemberKind, Module, Package, Status, TypeElement};

/// One documented entity: a module, a package, a type or a member of a type.
#[derive(Debug, Clone, Copy)]
pub enum Element<'a> {
    /// A module.
    Module(&'a Module),
    /// A package.
    Package(&'a Package),
    /// A type declaration.
    Type(&'a TypeElement),
    /// A member together with the type that declares it.
    Member(&'a TypeElement, &'a Member),
}

impl<'a> Element<'a> {
    /// Simple name. Modules and packages use their full name.
    pub fn simple_name(&self) -> &'a str {
        match self {
            Self::Module(m) => &m.name,
            Self::Package(p) => &p.name,
            Self::Type(t) => &t.name,
            Self::Member(_, m) => &m.name,
        }
    }

    /// Fully qualified name. Members are qualified by their owner and carry
    /// their signature: `java.util.List.size()`.
    pub fn qualified_name(&self) -> String {
        match self {
            Self::Module(m) => m.name.clone(),
            Self::Package(p) => p.name.clone(),
            Self::Type(t) => t.qualified_name(),
            Self::Member(owner, m) => format!("{}.{}", owner.qualified_name(), m.label()),
        }
    }

    /// Name used as link label in summary tables.
    pub fn display_name(&self) -> String {
        match self {
            Self::Package(p) if p.name.is_empty() => "Unnamed Package".to_string(),
            Self::Type(t) if !t.type_params.is_empty() => {
                format!("{}<{}>", t.qualified_name(), t.type_params.join(","))
            }
            _ => self.qualified_name(),
        }
    }

    /// Status flags.
    pub fn status(&self) -> &'a Status {
        match self {
            Self::Module(m) => &m.status,
            Self::Package(p) => &p.status,
            Self::Type(t) => &t.status,
            Self::Member(_, m) => &m.status,
        }
    }

    /// First-sentence summary, if any.
    pub fn summary(&self) -> Option<&'a str> {
        match self {
            Self::Module(m) => m.summary.as_deref(),
            Self::Package(p) => p.summary.as_deref(),
            Self::Type(t) => t.summary.as_deref(),
            Self::Member(_, m) => m.summary.as_deref(),
        }
    }

    /// Name of the package that contains this element. Modules have none;
    /// a package is its own package.
    pub fn package_name(&self) -> Option<&'a str> {
        match self {
            Self::Module(_) => None,
            Self::Package(p) => Some(&p.name),
            Self::Type(t) | Self::Member(t, _) => Some(&t.package),
        }
    }

    /// Declared member kind, for member elements.
    pub fn member_kind(&self) -> Option<MemberKind> {
        match self {
            Self::Member(_, m) => Some(m.kind),
            _ => None,
        }
    }
}
