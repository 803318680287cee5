// Dead code detection breaks here, because the integration test crates all use a disjoint set of
// the pub items.
#![allow(dead_code)]

use libdocwright::{Configuration, Doclet, Model, Report};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// Parse a model from a JSON value, filling in the format version.
pub fn model(mut value: Value) -> Model {
    if value.get("format_version").is_none() {
        value["format_version"] = json!("1.0.0");
    }
    Model::from_json(&value.to_string()).unwrap()
}

pub fn class(package: &str, name: &str) -> Value {
    json!({ "name": name, "package": package, "kind": "class" })
}

pub fn interface(package: &str, name: &str) -> Value {
    json!({ "name": name, "package": package, "kind": "interface" })
}

pub fn subclass(package: &str, name: &str, superclass: &str) -> Value {
    json!({ "name": name, "package": package, "kind": "class", "superclass": superclass })
}

pub fn with_status(mut value: Value, status: Value) -> Value {
    value["status"] = status;
    value
}

pub fn deprecated(value: Value) -> Value {
    with_status(value, json!({ "deprecated": {} }))
}

pub fn since(value: Value, release: &str) -> Value {
    with_status(value, json!({ "since": release }))
}

/// A model with a single package `p` holding `types`.
pub fn one_package(types: Vec<Value>) -> Model {
    model(json!({ "packages": [{ "name": "p" }], "types": types }))
}

/// Generate a site into a fresh directory.
pub fn generate(model: &Model, config: Configuration) -> (TempDir, Report) {
    let dir = TempDir::new().unwrap();
    let report = Doclet::new(config).generate(model, dir.path()).unwrap();
    (dir, report)
}

/// Read a generated page.
pub fn read_page(dir: &TempDir, page: &str) -> String {
    fs::read_to_string(dir.path().join(page))
        .unwrap_or_else(|e| panic!("failed to read {page}: {e}"))
}

/// Generate a site and return one page.
pub fn render_page(model: &Model, config: Configuration, page: &str) -> String {
    let (dir, _) = generate(model, config);
    read_page(&dir, page)
}

/// Number of occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[macro_export]
macro_rules! gen_page_tests {
    ($prefix:ident, {
        $(page {
            $name:ident: {
                model: $model:expr,
                config: $config:expr,
                page: $page:expr,
                contains: [$($contains:expr),* $(,)?],
                omits: [$($omits:expr),* $(,)?]
            }
        })*
    }) => {
        mod $prefix {
            use super::*;

            $(
                #[test]
                fn $name() {
                    let html = render_page(&$model, $config, $page);
                    $(
                        assert!(
                            html.contains($contains),
                            "{} should contain {:?}\n{}", $page, $contains, html
                        );
                    )*
                    $(
                        assert!(
                            !html.contains($omits),
                            "{} should not contain {:?}\n{}", $page, $omits, html
                        );
                    )*
                }
            )*
        }
    };
}
