//! Per-run project context
//!
//! A [`ProjectContext`] is derived once at the start of every invocation from
//! the project root and passed explicitly to every operation. It is never
//! mutated afterwards.

use std::path::{Path, PathBuf};

use convert_case::{Case, Casing};

use crate::catalog::Placeholders;
use crate::error::{Result, ScaffoldError};

/// Placeholder key for the raw project name
pub const PROJECT_NAME: &str = "projectName";
/// Placeholder key for the PascalCase app class prefix
pub const APP_CLASS_NAME: &str = "appClassName";
/// Placeholder key for the human-readable app title
pub const APP_TITLE: &str = "appTitle";

/// Values needed to render templates and locate the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    name: String,
    root: PathBuf,
}

impl ProjectContext {
    /// Derive the context from the project root
    ///
    /// The project name is exactly the final component of the root path, with
    /// no casing change or sanitization. A trailing `..` is resolved first.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::NoRoot`] if no root was supplied, the root is
    /// not an existing directory, or it has no final path component.
    pub fn derive(root: Option<&Path>) -> Result<Self> {
        let root = root.ok_or_else(|| {
            ScaffoldError::NoRoot("no project root was provided".to_string())
        })?;

        let root = std::path::absolute(root).map_err(|err| {
            ScaffoldError::NoRoot(format!("cannot resolve {}: {err}", root.display()))
        })?;

        if !root.is_dir() {
            return Err(ScaffoldError::NoRoot(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        // `absolute` keeps a trailing `..`, which has no file name
        let root = if root.file_name().is_none() {
            std::fs::canonicalize(&root).map_err(|err| {
                ScaffoldError::NoRoot(format!("cannot resolve {}: {err}", root.display()))
            })?
        } else {
            root
        };

        let name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ScaffoldError::NoRoot(format!("{} has no directory name", root.display()))
            })?;

        tracing::debug!(project = %name, root = %root.display(), "derived project context");

        Ok(Self { name, root })
    }

    /// Project name (final component of the root)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute project root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a catalog-relative path under the root
    #[must_use]
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Context-level template bindings
    #[must_use]
    pub fn placeholders(&self) -> Placeholders {
        let mut placeholders = Placeholders::new();
        placeholders.insert(PROJECT_NAME, &self.name);
        placeholders.insert(APP_CLASS_NAME, self.name.to_case(Case::Pascal));
        placeholders.insert(APP_TITLE, self.name.to_case(Case::Title));
        placeholders
    }
}
