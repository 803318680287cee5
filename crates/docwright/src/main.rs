use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use libdocwright::{Configuration, Doclet, Group, Model, SearchOptions};
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Documentation model to render (JSON)
    model: PathBuf,

    /// Directory the pages are written to
    #[arg(short = 'd', long, default_value = "docs", env = "DOCWRIGHT_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Leave deprecated elements out of every page
    #[arg(long, default_value_t = false)]
    no_deprecated: bool,

    /// Do not write the deprecated list
    #[arg(long, default_value_t = false)]
    no_deprecated_list: bool,

    /// Document modules and place packages in module directories
    #[arg(long, default_value_t = false)]
    show_modules: bool,

    /// Package group for the overview, as "Title=pattern:pattern"
    #[arg(long = "group", value_name = "TITLE=PATTERNS")]
    groups: Vec<String>,

    /// Character set declared by every page
    #[arg(long, default_value = "utf-8", env = "DOCWRIGHT_CHARSET")]
    charset: String,

    /// Generate the legacy frames layout
    #[arg(long, default_value_t = false)]
    frames: bool,

    /// Suffix for the browser window title
    #[arg(long)]
    window_title: Option<String>,

    /// Title shown on the overview page (HTML)
    #[arg(long)]
    doc_title: Option<String>,

    /// HTML placed next to the navigation bar
    #[arg(long)]
    header: Option<String>,

    /// HTML placed in the page footer
    #[arg(long)]
    footer: Option<String>,

    /// HTML placed at the top of every page
    #[arg(long)]
    top: Option<String>,

    /// HTML placed at the bottom of every page
    #[arg(long)]
    bottom: Option<String>,

    /// Write one index page per letter
    #[arg(long, default_value_t = false)]
    split_index: bool,

    /// Do not write the index or the search files
    #[arg(long, default_value_t = false)]
    no_index: bool,

    /// Do not write the class hierarchy pages
    #[arg(long, default_value_t = false)]
    no_tree: bool,

    /// Releases shown on the new API page, in order
    #[arg(long, value_delimiter = ',')]
    since: Vec<String>,

    /// List documented elements instead of writing pages
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Only list elements whose qualified name contains this text
    #[arg(long, requires = "list")]
    query: Option<String>,

    /// Match the listing query case-sensitively
    #[arg(long, default_value_t = false, requires = "query")]
    case_sensitive: bool,

    /// Only print errors
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every written page
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    /// Builds the run configuration from the arguments.
    fn configuration(&self) -> Result<Configuration> {
        let mut config = Configuration::new()
            .with_no_deprecated(self.no_deprecated)
            .with_no_deprecated_list(self.no_deprecated_list)
            .with_show_modules(self.show_modules)
            .with_charset(&self.charset)
            .with_frames(self.frames)
            .with_split_index(self.split_index)
            .with_index(!self.no_index)
            .with_tree(!self.no_tree)
            .with_since(&self.since);
        for group in &self.groups {
            config = config.with_group(Group::parse(group)?);
        }
        if let Some(title) = &self.window_title {
            config = config.with_window_title(title);
        }
        if let Some(title) = &self.doc_title {
            config = config.with_doc_title(title);
        }
        if let Some(html) = &self.header {
            config = config.with_header(html);
        }
        if let Some(html) = &self.footer {
            config = config.with_footer(html);
        }
        if let Some(html) = &self.top {
            config = config.with_top(html);
        }
        if let Some(html) = &self.bottom {
            config = config.with_bottom(html);
        }
        Ok(config)
    }
}

/// Installs the subscriber; `RUST_LOG` overrides the verbosity flags.
fn init_logging(cli: &Cli) {
    let default = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("DOCWRIGHT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs list mode or generation.
fn run(cli: &Cli) -> Result<()> {
    let doclet = Doclet::new(cli.configuration()?);
    let model = Model::load(&cli.model)
        .with_context(|| format!("loading {}", cli.model.display()))?;

    if cli.list {
        let search = cli
            .query
            .as_ref()
            .map(|query| SearchOptions::new(query).with_case_sensitive(cli.case_sensitive));
        for item in doclet.list(&model, search.as_ref())? {
            println!("{} {}", item.kind.id(), item.path);
        }
        return Ok(());
    }

    let report = doclet.generate(&model, &cli.output_dir)?;
    if !cli.quiet {
        println!(
            "{} pages written to {}, {} diagnostics",
            report.pages.len(),
            cli.output_dir.display(),
            report.diagnostics.len()
        );
    }
    Ok(())
}

/// Entry point; exits with status 1 on error.
fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
