//! Docwright renders cross-linked HTML API documentation from a resolved
//! symbol model.
//!
//! The model is a JSON description of modules, packages, types and their
//! members, produced by some front end that has already parsed and resolved
//! the sources. Docwright classifies every element, builds the class
//! hierarchy, the summary lists (deprecated, preview, restricted and new
//! API), the alphabetic index and the client-side search index, and writes
//! one static page per module, package and type.
//!
//! Generation is a single sequential pass driven by [`Doclet`]. Problems in
//! the input never abort a run; they are returned as [`Diagnostic`]s in the
//! [`Report`].

mod classify;
mod comparators;
mod config;
mod context;
mod diagnostics;
mod doclet;
mod element;
mod error;
mod frames;
mod html;
mod index;
mod model;
mod output;
mod overview;
mod package;
mod paths;
mod properties;
mod search;
mod summary;
mod table;
mod tree;
mod typepage;

#[cfg(test)]
mod testutil;

pub use crate::{
    classify::{Classification, DescriptionStatus, ElementCategory, classify},
    config::{Configuration, Group, OTHER_PACKAGES},
    context::Context,
    diagnostics::Diagnostic,
    doclet::{Doclet, Report},
    element::Element,
    error::{DocletError, Result},
    index::{AlphaIndex, IndexItem, bucket, bucket_first_seen},
    model::{
        Deprecation, Member, MemberKind, Model, Module, Package, Preview, SearchTag, Status,
        TagKind, TypeElement, TypeKind, Visibility,
    },
    paths::DocPath,
    search::{ListItem, SearchCategory, SearchEntry, SearchIndex, SearchOptions},
    summary::{Description, OTHER_TAB, SummaryList, SummaryListSpec, SummaryRow},
    table::Table,
    tree::{ClassTree, Clause, ClauseKind, Hierarchy, TreeNode, build_tree},
};
