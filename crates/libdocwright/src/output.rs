//! Writing pages below the output directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use maud::Markup;
use tracing::debug;

use crate::{
    error::{DocletError, Result},
    paths::DocPath,
};

/// Writes pages one at a time and remembers what it wrote.
#[derive(Debug)]
pub struct DocWriter {
    /// Output root.
    root: PathBuf,
    /// Pages written so far, in order.
    written: Vec<DocPath>,
}

impl DocWriter {
    /// Create a writer rooted at `root`. Nothing is touched until the first
    /// write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    /// The output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `contents` to `path`, creating parent directories as needed.
    pub fn write(&mut self, path: &DocPath, contents: &str) -> Result<()> {
        let target = self.root.join(path.as_str());
        let wrap = |source| DocletError::WriteError {
            path: target.clone(),
            source,
        };
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
        fs::write(&target, contents).map_err(wrap)?;
        debug!(page = %path, bytes = contents.len(), "wrote page");
        self.written.push(path.clone());
        Ok(())
    }

    /// Write a rendered HTML page.
    pub fn write_page(&mut self, path: &DocPath, page: Markup) -> Result<()> {
        self.write(path, &page.into_string())
    }

    /// Pages written so far, in write order.
    pub fn written(&self) -> &[DocPath] {
        &self.written
    }

    /// Consume the writer, returning the written pages.
    pub fn into_written(self) -> Vec<DocPath> {
        self.written
    }
}
