use std::path::Path;

use tracing::info;

use super::{
    config::Configuration,
    context::Context,
    diagnostics::Diagnostic,
    error::*,
    frames,
    index::{self, AlphaIndex},
    model::Model,
    output::DocWriter,
    overview, package,
    paths::{DocPath, pages},
    properties,
    search::{self, ListItem, SearchCategory, SearchIndex, SearchOptions},
    summary::{self, SummaryListSpec},
    tree, typepage,
};

/// Stylesheet written to the output root.
const STYLESHEET: &str = include_str!("../resources/stylesheet.css");

/// What a generation run produced.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Every file written, relative to the output directory, in write order.
    pub pages: Vec<DocPath>,
    /// Problems found in the input model. None of them stopped the run.
    pub diagnostics: Vec<Diagnostic>,
}

/// Doclet renders a documentation model into a tree of cross-linked HTML
/// pages.
///
/// The model is read-only input; all output goes below a single directory
/// whose layout is fixed: package pages live in directories mirroring the
/// package name, everything else at the root. Generation is a single
/// sequential pass and the first write failure aborts it.
#[derive(Debug, Clone, Default)]
pub struct Doclet {
    /// Options for every run.
    config: Configuration,
}

impl Doclet {
    /// Creates a doclet with the given configuration.
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Load a model from a JSON file and generate documentation for it.
    pub fn generate_file(&self, model: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<Report> {
        let model = Model::load(model)?;
        self.generate(&model, out_dir)
    }

    /// Generate every page for `model` below `out_dir`.
    pub fn generate(&self, model: &Model, out_dir: impl AsRef<Path>) -> Result<Report> {
        let config = &self.config;
        let ctx = Context::new(model, config)?;
        let mut out = DocWriter::new(out_dir.as_ref());
        info!(
            output = %out.root().display(),
            types = model.types.len(),
            "generating documentation"
        );

        out.write(&DocPath::new(pages::STYLESHEET), STYLESHEET)?;

        info!("writing overview");
        out.write_page(&DocPath::new(pages::OVERVIEW_SUMMARY), overview::overview_page(&ctx))?;
        if config.show_modules {
            for module in ctx.documented_modules() {
                let (path, page) = overview::module_page(&ctx, module);
                out.write_page(&path, page)?;
            }
        }

        let packages = ctx.documented_packages();
        info!(count = packages.len(), "writing package pages");
        for &pkg in &packages {
            let (path, page) = package::package_page(&ctx, pkg);
            out.write_page(&path, page)?;
            if config.create_tree {
                out.write_page(&tree::package_tree_path(&ctx, pkg), tree::package_tree(&ctx, pkg))?;
            }
            if config.frames {
                out.write_page(
                    &frames::package_frame_path(&ctx, pkg),
                    frames::package_frame(&ctx, pkg),
                )?;
            }
        }

        let types = ctx.documented_types();
        info!(count = types.len(), "writing type pages");
        for ty in types {
            let (path, page) = typepage::type_page(&ctx, ty);
            out.write_page(&path, page)?;
        }

        if config.create_tree {
            info!("writing class hierarchy");
            out.write_page(&DocPath::new(pages::OVERVIEW_TREE), tree::overview_tree(&ctx))?;
        }

        info!("writing summary lists");
        let mut lists = Vec::new();
        if config.deprecated_list_enabled() {
            lists.push(SummaryListSpec::deprecated());
        }
        lists.push(SummaryListSpec::preview());
        lists.push(SummaryListSpec::restricted());
        lists.push(SummaryListSpec::new_api(&config.since));
        for spec in &lists {
            let (path, page) = summary::summary_page(&ctx, spec);
            out.write_page(&path, page)?;
        }

        if config.create_index {
            let alpha = AlphaIndex::build(&ctx);
            info!(entries = alpha.len(), split = config.split_index, "writing index");
            for (path, page) in index::index_pages(&ctx, &alpha) {
                out.write_page(&path, page)?;
            }
            out.write_page(&DocPath::new(pages::ALLCLASSES_INDEX), index::all_classes_page(&ctx))?;
            out.write_page(&DocPath::new(pages::ALLPACKAGES_INDEX), index::all_packages_page(&ctx))?;
            if let Some(page) = properties::system_properties_page(&ctx) {
                out.write_page(&DocPath::new(pages::SYSTEM_PROPERTIES), page)?;
            }

            let search = SearchIndex::build(&ctx);
            for category in SearchCategory::ALL {
                out.write(&DocPath::new(category.file_name()), &search.to_js(category)?)?;
            }
        }

        if config.frames {
            out.write_page(&DocPath::new(pages::OVERVIEW_FRAME), frames::overview_frame(&ctx))?;
            out.write_page(&DocPath::new(pages::ALLCLASSES_FRAME), frames::all_classes_frame(&ctx))?;
        }
        out.write_page(&DocPath::new(pages::INDEX), frames::index_page(&ctx))?;

        let pages = out.into_written();
        info!(pages = pages.len(), diagnostics = ctx.diagnostics().len(), "done");
        Ok(Report {
            pages,
            diagnostics: ctx.diagnostics().to_vec(),
        })
    }

    /// Produce a lightweight listing of documented elements, optionally
    /// filtered by a search query.
    pub fn list(&self, model: &Model, search: Option<&SearchOptions>) -> Result<Vec<ListItem>> {
        let ctx = Context::new(model, &self.config)?;
        Ok(search::list(&ctx, search))
    }

    /// Diagnostics for `model` without writing anything.
    pub fn check(&self, model: &Model) -> Result<Vec<Diagnostic>> {
        let ctx = Context::new(model, &self.config)?;
        Ok(ctx.diagnostics().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn generates_the_fixed_pages() {
        let dir = TempDir::new().unwrap();
        let model = model(vec![package("p")], vec![class("p", "A")]);
        let report = Doclet::default().generate(&model, dir.path()).unwrap();
        let written: Vec<&str> = report.pages.iter().map(DocPath::as_str).collect();
        for page in [
            "stylesheet.css",
            "overview-summary.html",
            "p/package-summary.html",
            "p/package-tree.html",
            "p/A.html",
            "overview-tree.html",
            "deprecated-list.html",
            "preview-list.html",
            "restricted-list.html",
            "new-list.html",
            "index-all.html",
            "allclasses-index.html",
            "allpackages-index.html",
            "type-search-index.js",
            "index.html",
        ] {
            assert!(written.contains(&page), "{page} was not written");
            assert!(dir.path().join(page).is_file());
        }
        assert!(!written.contains(&"system-properties.html"));
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn toggles_remove_pages() {
        let dir = TempDir::new().unwrap();
        let model = model(vec![package("p")], vec![class("p", "A")]);
        let config = Configuration::new()
            .with_no_deprecated_list(true)
            .with_tree(false)
            .with_index(false);
        let report = Doclet::new(config).generate(&model, dir.path()).unwrap();
        let written: Vec<&str> = report.pages.iter().map(DocPath::as_str).collect();
        for page in ["deprecated-list.html", "overview-tree.html", "p/package-tree.html", "index-all.html"] {
            assert!(!written.contains(&page), "{page} should not be written");
        }
    }

    #[test]
    fn write_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("out");
        std::fs::write(&blocker, "not a directory").unwrap();
        let model = model(vec![package("p")], vec![class("p", "A")]);
        let err = Doclet::default().generate(&model, &blocker).unwrap_err();
        assert!(matches!(err, DocletError::WriteError { .. }));
    }

    #[test]
    fn check_reports_without_writing() {
        let model = model(vec![], vec![class("missing", "A")]);
        let diagnostics = Doclet::default().check(&model).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].element, "missing.A");
    }
}
