//! Print the layout that `generate` would materialize

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use flutter_scaffold::catalog::TemplateCatalog;
use flutter_scaffold::config::ScaffoldConfig;

/// Show the catalog without touching the filesystem
pub struct LayoutCommand {
    root: Option<PathBuf>,
    json: bool,
}

impl LayoutCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(root: Option<PathBuf>, json: bool) -> Self {
        Self { root, json }
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    /// Render the listing
    ///
    /// Uses the project's configuration when a root with a config file is
    /// available, defaults otherwise.
    pub fn render(&self) -> Result<String> {
        let config = match &self.root {
            Some(root) => ScaffoldConfig::load(root)
                .with_context(|| format!("Failed to load configuration from {}", root.display()))?,
            None => ScaffoldConfig::default(),
        };
        let catalog = TemplateCatalog::flutter(&config.layout)?;

        if self.json {
            let mut out = serde_json::to_string_pretty(&catalog)
                .context("Failed to serialize layout")?;
            out.push('\n');
            return Ok(out);
        }

        let mut out = String::new();
        writeln!(out, "{}", style("Directories:").bold())?;
        for dir in catalog.directories() {
            writeln!(out, "  {}/", dir.path().display())?;
        }
        writeln!(out, "{}", style("Files:").bold())?;
        for file in catalog.files() {
            writeln!(out, "  {}", file.path().display())?;
        }
        writeln!(
            out,
            "{} directories, {} files",
            catalog.directories().len(),
            catalog.files().len()
        )?;
        Ok(out)
    }
}
