//! Element classification.

use std::collections::HashSet;

use bitflags::bitflags;

use crate::{
    element::Element,
    model::{MemberKind, TypeElement, TypeKind},
};

/// Platform classes, rarely part of a model, that make a subclass an error.
const ERROR_ROOTS: &[&str] = &[
    "java.lang.Error",
    "java.lang.AssertionError",
    "java.lang.LinkageError",
    "java.lang.VirtualMachineError",
    "java.lang.OutOfMemoryError",
    "java.lang.StackOverflowError",
    "java.lang.InternalError",
    "java.lang.ExceptionInInitializerError",
    "java.lang.NoClassDefFoundError",
];

/// Platform classes that make a subclass an exception.
const EXCEPTION_ROOTS: &[&str] = &[
    "java.lang.Throwable",
    "java.lang.Exception",
    "java.lang.RuntimeException",
    "java.lang.ReflectiveOperationException",
    "java.lang.ClassNotFoundException",
    "java.lang.CloneNotSupportedException",
    "java.lang.InterruptedException",
    "java.lang.IllegalArgumentException",
    "java.lang.IllegalStateException",
    "java.lang.NullPointerException",
    "java.lang.UnsupportedOperationException",
    "java.lang.IndexOutOfBoundsException",
    "java.lang.ClassCastException",
    "java.lang.ArithmeticException",
    "java.lang.NumberFormatException",
    "java.lang.SecurityException",
    "java.io.IOException",
    "java.io.UncheckedIOException",
];

/// What a superclass chain ends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThrowableKind {
    /// Chain reaches `java.lang.Error`.
    Error,
    /// Chain reaches any other throwable.
    Exception,
}

/// Kind of a well-known platform throwable.
fn throwable_kind(name: &str) -> Option<ThrowableKind> {
    if ERROR_ROOTS.contains(&name) {
        Some(ThrowableKind::Error)
    } else if EXCEPTION_ROOTS.contains(&name) {
        Some(ThrowableKind::Exception)
    } else {
        None
    }
}

bitflags! {
    /// Tags describing an element. Kind tags are mutually exclusive; status
    /// tags combine freely with any kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Classification: u16 {
        /// A module.
        const MODULE = 1 << 0;
        /// A package.
        const PACKAGE = 1 << 1;
        /// A field, constructor, method or other member.
        const MEMBER = 1 << 2;
        /// An interface.
        const INTERFACE = 1 << 3;
        /// A class that is not a throwable.
        const CLASS = 1 << 4;
        /// An enum class.
        const ENUM = 1 << 5;
        /// A record class.
        const RECORD = 1 << 6;
        /// An annotation interface.
        const ANNOTATION = 1 << 7;
        /// An exception class.
        const EXCEPTION = 1 << 8;
        /// An error class.
        const ERROR = 1 << 9;

        /// Deprecated.
        const DEPRECATED = 1 << 12;
        /// Part of a preview feature.
        const PREVIEW = 1 << 13;
        /// A restricted method.
        const RESTRICTED = 1 << 14;

        /// All kind tags.
        const KINDS = Self::MODULE.bits() | Self::PACKAGE.bits() | Self::MEMBER.bits()
            | Self::INTERFACE.bits() | Self::CLASS.bits() | Self::ENUM.bits()
            | Self::RECORD.bits() | Self::ANNOTATION.bits() | Self::EXCEPTION.bits()
            | Self::ERROR.bits();
        /// Kind tags that apply to types.
        const TYPES = Self::INTERFACE.bits() | Self::CLASS.bits() | Self::ENUM.bits()
            | Self::RECORD.bits() | Self::ANNOTATION.bits() | Self::EXCEPTION.bits()
            | Self::ERROR.bits();
    }
}

impl Classification {
    /// Whether the element kind was recognized. Unrecognized elements are
    /// left out of every index and listing.
    pub fn is_recognized(self) -> bool {
        self.intersects(Self::KINDS)
    }

    /// Which description a summary row shows for an element with these tags.
    pub fn description_status(self) -> DescriptionStatus {
        if self.contains(Self::PREVIEW) {
            DescriptionStatus::Preview
        } else if self.contains(Self::DEPRECATED) {
            DescriptionStatus::Deprecated
        } else {
            DescriptionStatus::Plain
        }
    }
}

/// The description branch chosen for a summary row. Preview wins over
/// deprecation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionStatus {
    /// In preview.
    Preview,
    /// Deprecated.
    Deprecated,
    /// Neither.
    Plain,
}

/// Category used to split listings into sections and to label search
/// results. Declaration order is the section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementCategory {
    /// A module.
    Module,
    /// A package.
    Package,
    /// An interface.
    Interface,
    /// An ordinary class.
    Class,
    /// An enum class.
    Enum,
    /// A class extending `java.lang.Exception`.
    Exception,
    /// A class extending `java.lang.Error`.
    Error,
    /// An annotation interface.
    AnnotationType,
    /// A record class.
    Record,
    /// A field.
    Field,
    /// A constructor.
    Constructor,
    /// A method.
    Method,
    /// An enum constant.
    EnumConstant,
    /// An element of an annotation interface.
    AnnotationElement,
}

impl ElementCategory {
    /// Derive the category from an element and its classification.
    pub fn of(element: &Element<'_>, classification: Classification) -> Option<Self> {
        if let Some(kind) = element.member_kind() {
            return match kind {
                MemberKind::Field => Some(Self::Field),
                MemberKind::Method => Some(Self::Method),
                MemberKind::Constructor => Some(Self::Constructor),
                MemberKind::EnumConstant => Some(Self::EnumConstant),
                MemberKind::AnnotationElement => Some(Self::AnnotationElement),
                MemberKind::Unknown => None,
            };
        }
        let kinds = classification.intersection(Classification::KINDS);
        [
            (Classification::MODULE, Self::Module),
            (Classification::PACKAGE, Self::Package),
            (Classification::INTERFACE, Self::Interface),
            (Classification::CLASS, Self::Class),
            (Classification::ENUM, Self::Enum),
            (Classification::EXCEPTION, Self::Exception),
            (Classification::ERROR, Self::Error),
            (Classification::ANNOTATION, Self::AnnotationType),
            (Classification::RECORD, Self::Record),
        ]
        .into_iter()
        .find(|(flag, _)| kinds.contains(*flag))
        .map(|(_, category)| category)
    }

    /// Singular label, as used in index descriptions ("Class in p").
    pub fn label(self) -> &'static str {
        match self {
            Self::Module => "Module",
            Self::Package => "Package",
            Self::Interface => "Interface",
            Self::Class => "Class",
            Self::Enum => "Enum Class",
            Self::Exception => "Exception Class",
            Self::Error => "Error",
            Self::AnnotationType => "Annotation Interface",
            Self::Record => "Record Class",
            Self::Field => "Field",
            Self::Constructor => "Constructor",
            Self::Method => "Method",
            Self::EnumConstant => "Enum Constant",
            Self::AnnotationElement => "Annotation Interface Element",
        }
    }

    /// Plural label, used as section heading.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Module => "Modules",
            Self::Package => "Packages",
            Self::Interface => "Interfaces",
            Self::Class => "Classes",
            Self::Enum => "Enum Classes",
            Self::Exception => "Exception Classes",
            Self::Error => "Errors",
            Self::AnnotationType => "Annotation Interfaces",
            Self::Record => "Record Classes",
            Self::Field => "Fields",
            Self::Constructor => "Constructors",
            Self::Method => "Methods",
            Self::EnumConstant => "Enum Constants",
            Self::AnnotationElement => "Annotation Interface Elements",
        }
    }

    /// Stable identifier used in HTML ids.
    pub fn id(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Package => "package",
            Self::Interface => "interface",
            Self::Class => "class",
            Self::Enum => "enum-class",
            Self::Exception => "exception",
            Self::Error => "error",
            Self::AnnotationType => "annotation-interface",
            Self::Record => "record-class",
            Self::Field => "field",
            Self::Constructor => "constructor",
            Self::Method => "method",
            Self::EnumConstant => "enum-constant",
            Self::AnnotationElement => "annotation-interface-member",
        }
    }
}

/// Classify an element. `resolve` maps a qualified type name to its
/// documented declaration and is used to walk superclass chains.
pub fn classify<'a, F>(element: &Element<'a>, resolve: F) -> Classification
where
    F: Fn(&str) -> Option<&'a TypeElement>,
{
    let kind = match element {
        Element::Module(_) => Classification::MODULE,
        Element::Package(_) => Classification::PACKAGE,
        Element::Member(_, member) if member.kind == MemberKind::Unknown => {
            Classification::empty()
        }
        Element::Member(..) => Classification::MEMBER,
        Element::Type(ty) => classify_type(ty, resolve),
    };
    if kind.is_empty() {
        return kind;
    }

    let status = element.status();
    let mut tags = kind;
    tags.set(Classification::DEPRECATED, status.is_deprecated());
    tags.set(Classification::PREVIEW, status.is_preview());
    tags.set(Classification::RESTRICTED, status.restricted);
    tags
}

/// Kind tag of a type, resolving superclasses through `resolve`.
fn classify_type<'a, F>(ty: &'a TypeElement, resolve: F) -> Classification
where
    F: Fn(&str) -> Option<&'a TypeElement>,
{
    match ty.kind {
        TypeKind::Interface => Classification::INTERFACE,
        TypeKind::Enum => Classification::ENUM,
        TypeKind::Record => Classification::RECORD,
        TypeKind::Annotation => Classification::ANNOTATION,
        TypeKind::Unknown => Classification::empty(),
        TypeKind::Class => match throwable_root(ty, resolve) {
            Some(ThrowableKind::Error) => Classification::ERROR,
            Some(ThrowableKind::Exception) => Classification::EXCEPTION,
            None => Classification::CLASS,
        },
    }
}

/// Walk the superclass chain looking for a well-known error or exception
/// class. When the chain leaves the model, the ancestors the front end
/// recorded on the last resolved type are checked instead.
fn throwable_root<'a, F>(ty: &'a TypeElement, resolve: F) -> Option<ThrowableKind>
where
    F: Fn(&str) -> Option<&'a TypeElement>,
{
    let mut seen = HashSet::new();
    let mut current = ty;
    while let Some(superclass) = current.superclass.as_deref() {
        if let Some(kind) = throwable_kind(superclass) {
            return Some(kind);
        }
        if !seen.insert(superclass) {
            return None;
        }
        match resolve(superclass) {
            Some(next) => current = next,
            None => return current.ancestors.iter().find_map(|a| throwable_kind(a)),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::TypeKind, testutil::*};
    use pretty_assertions::assert_eq;

    fn none<'a>(_: &str) -> Option<&'a TypeElement> {
        None
    }

    #[test]
    fn kinds_are_disjoint() {
        let cases = [
            (TypeKind::Class, Classification::CLASS),
            (TypeKind::Interface, Classification::INTERFACE),
            (TypeKind::Enum, Classification::ENUM),
            (TypeKind::Record, Classification::RECORD),
            (TypeKind::Annotation, Classification::ANNOTATION),
        ];
        for (kind, expected) in cases {
            let ty = type_of(kind, "p", "T");
            assert_eq!(classify(&Element::Type(&ty), none), expected);
        }
    }

    #[test]
    fn unknown_kinds_are_not_recognized() {
        let ty = type_of(TypeKind::Unknown, "p", "T");
        let tags = classify(&Element::Type(&ty), none);
        assert!(!tags.is_recognized());
        assert!(tags.is_empty());
    }

    #[test]
    fn exceptions_and_errors_follow_the_superclass_chain() {
        let base = subclass("p", "BaseException", "java.lang.Exception");
        let exception = subclass("p", "MyException", "p.BaseException");
        let error = subclass("p", "MyError", "java.lang.Error");
        let direct = subclass("p", "Direct", "java.lang.Throwable");
        let types = [&base, &exception, &error, &direct];
        let resolve = |name: &str| {
            types
                .iter()
                .copied()
                .find(|t| t.qualified_name() == name)
        };
        assert_eq!(
            classify(&Element::Type(&exception), resolve),
            Classification::EXCEPTION
        );
        assert_eq!(
            classify(&Element::Type(&error), resolve),
            Classification::ERROR
        );
        assert_eq!(
            classify(&Element::Type(&direct), resolve),
            Classification::EXCEPTION
        );
    }

    #[test]
    fn platform_exceptions_outside_the_model_are_recognized() {
        let bad_input = subclass("p", "BadInput", "java.lang.Exception");
        let oops = subclass("p", "Oops", "java.lang.RuntimeException");
        let broken = subclass("p", "Broken", "java.lang.AssertionError");
        assert_eq!(classify(&Element::Type(&bad_input), none), Classification::EXCEPTION);
        assert_eq!(classify(&Element::Type(&oops), none), Classification::EXCEPTION);
        assert_eq!(classify(&Element::Type(&broken), none), Classification::ERROR);

        // An unknown library superclass falls back to the recorded ancestors.
        let mut wrapped = subclass("p", "Wrapped", "org.lib.LibraryException");
        wrapped.ancestors = vec!["org.lib.Base".to_string(), "java.lang.RuntimeException".to_string()];
        assert_eq!(classify(&Element::Type(&wrapped), none), Classification::EXCEPTION);
        let plain = subclass("p", "Plain", "org.lib.Widget");
        assert_eq!(classify(&Element::Type(&plain), none), Classification::CLASS);
    }

    #[test]
    fn superclass_cycles_terminate() {
        let a = subclass("p", "A", "p.B");
        let b = subclass("p", "B", "p.A");
        let types = [&a, &b];
        let resolve = |name: &str| types.iter().copied().find(|t| t.qualified_name() == name);
        assert_eq!(classify(&Element::Type(&a), resolve), Classification::CLASS);
    }

    #[test]
    fn status_tags_overlay_kind() {
        let mut ty = class("p", "A");
        ty.status = deprecated(Some("9"));
        ty.status.preview = preview("Sealed").preview;
        ty.status.restricted = true;
        let tags = classify(&Element::Type(&ty), none);
        assert!(tags.contains(Classification::CLASS));
        assert!(tags.contains(
            Classification::DEPRECATED | Classification::PREVIEW | Classification::RESTRICTED
        ));
        assert_eq!(tags.description_status(), DescriptionStatus::Preview);
        assert_eq!(
            Classification::DEPRECATED.description_status(),
            DescriptionStatus::Deprecated
        );
        assert_eq!(
            Classification::CLASS.description_status(),
            DescriptionStatus::Plain
        );
    }

    #[test]
    fn categories() {
        let ty = interface("p", "I");
        let m = method("run", "()");
        let tags = classify(&Element::Type(&ty), none);
        assert_eq!(
            ElementCategory::of(&Element::Type(&ty), tags),
            Some(ElementCategory::Interface)
        );
        let tags = classify(&Element::Member(&ty, &m), none);
        assert_eq!(
            ElementCategory::of(&Element::Member(&ty, &m), tags),
            Some(ElementCategory::Method)
        );
        let pkg = package("p");
        let tags = classify(&Element::Package(&pkg), none);
        assert_eq!(
            ElementCategory::of(&Element::Package(&pkg), tags),
            Some(ElementCategory::Package)
        );
    }
}
