//! Orderings used by listings, trees and indexes.

use std::cmp::Ordering;

use crate::{element::Element, model::TypeElement};

/// Compare ignoring case first, then with case as tie-break, so that the
/// order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Rank of an element variant, the final tie-break between elements that
/// share a name.
fn variant_rank(element: &Element<'_>) -> u8 {
    match element {
        Element::Module(_) => 0,
        Element::Package(_) => 1,
        Element::Type(_) => 2,
        Element::Member(..) => 3,
    }
}

/// General purpose ordering: simple name, then package, then the fully
/// qualified name, then element variant. Used for sibling order in class
/// trees and for the alphabetic index.
pub fn general_purpose(a: &Element<'_>, b: &Element<'_>) -> Ordering {
    compare_names(a.simple_name(), b.simple_name())
        .then_with(|| {
            compare_names(
                a.package_name().unwrap_or_default(),
                b.package_name().unwrap_or_default(),
            )
        })
        .then_with(|| compare_names(&a.qualified_name(), &b.qualified_name()))
        .then_with(|| variant_rank(a).cmp(&variant_rank(b)))
}

/// [`general_purpose`] specialised to type declarations.
pub fn types(a: &TypeElement, b: &TypeElement) -> Ordering {
    general_purpose(&Element::Type(a), &Element::Type(b))
}

/// Canonical row order of summary tables: qualified name, then variant.
pub fn qualified_name(a: &Element<'_>, b: &Element<'_>) -> Ordering {
    compare_names(&a.qualified_name(), &b.qualified_name())
        .then_with(|| variant_rank(a).cmp(&variant_rank(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_ignore_case_then_break_ties_with_case() {
        let mut names = vec!["beta", "Alpha", "alpha", "Beta", "gamma"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Alpha", "alpha", "Beta", "beta", "gamma"]);
    }

    #[test]
    fn general_purpose_sorts_by_simple_name_then_package() {
        let a = class("z.pkg", "Apple");
        let b = class("a.pkg", "Banana");
        let c = class("a.pkg", "Apple");
        let mut all = vec![&a, &b, &c];
        all.sort_by(|x, y| types(x, y));
        let names: Vec<String> = all.iter().map(|t| t.qualified_name()).collect();
        assert_eq!(names, vec!["a.pkg.Apple", "z.pkg.Apple", "a.pkg.Banana"]);
    }

    #[test]
    fn qualified_name_order() {
        let a = class("z.pkg", "Apple");
        let b = class("a.pkg", "Banana");
        let mut all = vec![Element::Type(&a), Element::Type(&b)];
        all.sort_by(qualified_name);
        assert_eq!(all[0].qualified_name(), "a.pkg.Banana");
    }
}
