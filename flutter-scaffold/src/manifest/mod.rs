//! Conditional `pubspec.yaml` replacement
//!
//! The patch is all-or-nothing: when the marker dependency is missing, the
//! whole manifest is replaced by [`crate::templates::PUBSPEC`] rendered with
//! the project name. Any earlier customization is lost, so callers should
//! confirm with the user first (see [`inspect`]).
//!
//! A manifest that already contains the marker is never touched, even if
//! it is otherwise malformed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::{render, Placeholders};
use crate::context::PROJECT_NAME;
use crate::error::{Result, ScaffoldError};
use crate::report::{GenerationEvent, SkipReason};
use crate::templates::PUBSPEC;

/// Manifest file name, relative to the project root
pub const MANIFEST_FILE: &str = "pubspec.yaml";

/// Dependency whose presence means the manifest is already configured
pub const MARKER_TOKEN: &str = "flutter_bloc";

/// State of the manifest before patching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestStatus {
    /// No manifest at the fixed path
    Missing,
    /// The marker token is present; nothing to do
    Configured,
    /// The manifest exists without the marker and would be replaced
    NeedsPatch,
}

/// Absolute path of the manifest under `root`
#[must_use]
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// Read the manifest and classify it
///
/// # Errors
///
/// Returns [`ScaffoldError::ManifestRead`] if the manifest exists but cannot
/// be read.
pub fn inspect(root: &Path) -> Result<ManifestStatus> {
    let path = manifest_path(root);
    match fs::read_to_string(&path) {
        Ok(content) if content.contains(MARKER_TOKEN) => Ok(ManifestStatus::Configured),
        Ok(_) => Ok(ManifestStatus::NeedsPatch),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ManifestStatus::Missing),
        Err(source) => Err(ScaffoldError::ManifestRead { path, source }),
    }
}

/// Render the replacement manifest for `project_name`
#[must_use]
pub fn replacement(project_name: &str) -> String {
    let placeholders: Placeholders = [(PROJECT_NAME, project_name)].into_iter().collect();
    render(PUBSPEC, &placeholders)
}

/// Replace the manifest if it exists and lacks the marker
///
/// Returns [`GenerationEvent::ManifestPatched`] after a write, or
/// [`GenerationEvent::Skipped`] when the manifest is missing (no file is
/// created) or already configured.
///
/// # Errors
///
/// Returns [`ScaffoldError::ManifestRead`] or [`ScaffoldError::ManifestWrite`]
/// if the manifest cannot be read or overwritten.
pub fn patch_manifest(root: &Path, project_name: &str) -> Result<GenerationEvent> {
    let path = PathBuf::from(MANIFEST_FILE);

    match inspect(root)? {
        ManifestStatus::Missing => {
            tracing::debug!("no manifest to patch");
            Ok(GenerationEvent::Skipped {
                path,
                reason: SkipReason::ManifestMissing,
            })
        }
        ManifestStatus::Configured => {
            tracing::debug!(marker = MARKER_TOKEN, "manifest already configured");
            Ok(GenerationEvent::Skipped {
                path,
                reason: SkipReason::ManifestConfigured,
            })
        }
        ManifestStatus::NeedsPatch => {
            let absolute = manifest_path(root);
            fs::write(&absolute, replacement(project_name)).map_err(|source| {
                ScaffoldError::ManifestWrite {
                    path: absolute.clone(),
                    source,
                }
            })?;
            tracing::info!(project = project_name, "manifest replaced");
            Ok(GenerationEvent::ManifestPatched { path })
        }
    }
}

/// Event recorded when the user refuses the overwrite
#[must_use]
pub fn declined() -> GenerationEvent {
    GenerationEvent::Skipped {
        path: PathBuf::from(MANIFEST_FILE),
        reason: SkipReason::Declined,
    }
}
