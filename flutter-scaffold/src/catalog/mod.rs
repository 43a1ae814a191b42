//! Declarative description of a project layout
//!
//! A [`TemplateCatalog`] is pure data: an ordered list of directories and an
//! ordered list of file templates, all relative to the project root. It
//! performs no I/O. The [`crate::materializer`] applies it to disk.
//!
//! # Example
//!
//! ```rust
//! use flutter_scaffold::catalog::TemplateCatalog;
//!
//! # fn main() -> flutter_scaffold::Result<()> {
//! let catalog = TemplateCatalog::builder()
//!     .directory("lib")
//!     .file("lib/main.dart", "// {{projectName}}")
//!     .build()?;
//!
//! assert_eq!(catalog.directories().len(), 1);
//! assert_eq!(catalog.files().len(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::context::ProjectContext;
use crate::error::{Result, ScaffoldError};

mod flutter;
mod render;

pub use flutter::{ASSET_DIRS, CORE_DIRS, FEATURE_SUBDIRS, MODULE_CLASS_NAME, MODULE_NAME};
pub use render::{render, Placeholders};

/// A directory to create, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorySpec {
    path: PathBuf,
}

impl DirectorySpec {
    /// Relative path of the directory
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A file to create from a template, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSpec {
    path: PathBuf,
    #[serde(skip)]
    template: String,
    #[serde(skip_serializing_if = "Placeholders::is_empty")]
    bindings: Placeholders,
}

impl FileSpec {
    /// Relative path of the file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unrendered template body
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// File-local bindings, applied on top of the context's bindings
    #[must_use]
    pub const fn bindings(&self) -> &Placeholders {
        &self.bindings
    }

    /// Render this file's content for `context`
    #[must_use]
    pub fn render(&self, context: &ProjectContext) -> String {
        render(&self.template, &context.placeholders().overlay(&self.bindings))
    }
}

/// Ordered set of directories and file templates
///
/// All directories are materialized before any file, so a file whose parent
/// is listed as a directory always finds it in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateCatalog {
    directories: Vec<DirectorySpec>,
    files: Vec<FileSpec>,
}

impl TemplateCatalog {
    /// Start building a catalog
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Directories, in creation order
    #[must_use]
    pub fn directories(&self) -> &[DirectorySpec] {
        &self.directories
    }

    /// Files, in creation order
    #[must_use]
    pub fn files(&self) -> &[FileSpec] {
        &self.files
    }

    /// Total number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

/// Builder for [`TemplateCatalog`]
///
/// Paths are validated in [`CatalogBuilder::build`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    directories: Vec<PathBuf>,
    files: Vec<(PathBuf, String, Placeholders)>,
}

impl CatalogBuilder {
    /// Add a directory
    #[must_use]
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directories.push(path.into());
        self
    }

    /// Add several directories under a common parent
    #[must_use]
    pub fn directories<I, S>(mut self, parent: impl AsRef<Path>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let parent = parent.as_ref();
        self.directories
            .extend(children.into_iter().map(|child| parent.join(child)));
        self
    }

    /// Add a file rendered with the context bindings only
    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>, template: impl Into<String>) -> Self {
        self.file_with(path, template, Placeholders::new())
    }

    /// Add a file with extra file-local bindings
    #[must_use]
    pub fn file_with(
        mut self,
        path: impl Into<PathBuf>,
        template: impl Into<String>,
        bindings: Placeholders,
    ) -> Self {
        self.files.push((path.into(), template.into(), bindings));
        self
    }

    /// Validate every path and produce the catalog
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidCatalogPath`] if a path is empty,
    /// absolute, contains `..`, or is listed twice.
    pub fn build(self) -> Result<TemplateCatalog> {
        let mut seen = HashSet::new();

        let directories = self
            .directories
            .into_iter()
            .map(|path| -> Result<DirectorySpec> {
                validate_relative(&path)?;
                claim(&mut seen, &path)?;
                Ok(DirectorySpec { path })
            })
            .collect::<Result<Vec<_>>>()?;

        let files = self
            .files
            .into_iter()
            .map(|(path, template, bindings)| -> Result<FileSpec> {
                validate_relative(&path)?;
                claim(&mut seen, &path)?;
                Ok(FileSpec {
                    path,
                    template,
                    bindings,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TemplateCatalog { directories, files })
    }
}

fn claim(seen: &mut HashSet<PathBuf>, path: &Path) -> Result<()> {
    if seen.insert(path.to_path_buf()) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidCatalogPath {
            path: path.to_path_buf(),
            reason: "listed more than once",
        })
    }
}

/// Reject paths that would escape or ignore the project root
fn validate_relative(path: &Path) -> Result<()> {
    let invalid = |reason| ScaffoldError::InvalidCatalogPath {
        path: path.to_path_buf(),
        reason,
    };

    if path.as_os_str().is_empty() {
        return Err(invalid("path is empty"));
    }

    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err(invalid("path traverses above the root")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("path must be relative"))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builder_keeps_order() {
        let catalog = TemplateCatalog::builder()
            .directory("lib")
            .directories("lib/core", ["di", "routing"])
            .file("lib/a.dart", "a")
            .file("lib/b.dart", "b")
            .build()
            .unwrap();

        let dirs: Vec<_> = catalog.directories().iter().map(DirectorySpec::path).collect();
        assert_eq!(
            dirs,
            vec![
                Path::new("lib"),
                Path::new("lib/core/di"),
                Path::new("lib/core/routing")
            ]
        );
        assert_eq!(catalog.files()[0].path(), Path::new("lib/a.dart"));
        assert_eq!(catalog.files()[1].path(), Path::new("lib/b.dart"));
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_rejects_absolute_path() {
        let result = TemplateCatalog::builder().directory("/etc").build();
        assert!(matches!(
            result,
            Err(ScaffoldError::InvalidCatalogPath { .. })
        ));
    }

    #[test]
    fn test_rejects_parent_traversal() {
        let result = TemplateCatalog::builder()
            .file("lib/../../escape.dart", "x")
            .build();
        assert!(matches!(
            result,
            Err(ScaffoldError::InvalidCatalogPath { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_and_duplicate() {
        assert!(TemplateCatalog::builder().directory("").build().is_err());
        assert!(TemplateCatalog::builder()
            .directory("lib")
            .directory("lib")
            .build()
            .is_err());
    }

    #[test]
    fn test_file_render_overlays_bindings() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("quick_wash");
        std::fs::create_dir(&root).unwrap();
        let context = ProjectContext::derive(Some(&root)).unwrap();

        let catalog = TemplateCatalog::builder()
            .file_with(
                "lib/x.dart",
                "{{projectName}}:{{ModuleName}}:{{missing}}",
                [("ModuleName", "Auth")].into_iter().collect(),
            )
            .build()
            .unwrap();

        assert_eq!(
            catalog.files()[0].render(&context),
            "quick_wash:Auth:{{missing}}"
        );
    }
}
