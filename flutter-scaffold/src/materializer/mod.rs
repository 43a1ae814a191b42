//! Idempotent application of a catalog to the filesystem
//!
//! Directories are processed before files, each in catalog order. Anything
//! already present is skipped and never modified, so a rerun performs no
//! writes and a run interrupted by a failure is resumed by simply running
//! again. There is no rollback.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::catalog::{DirectorySpec, FileSpec, TemplateCatalog};
use crate::context::ProjectContext;
use crate::error::ScaffoldError;
use crate::report::{GenerationEvent, Reporter, SkipReason};

/// Create every missing catalog entry under the context's root
///
/// Each event is passed to `reporter` as it happens and the full sequence is
/// returned. A failed action produces [`GenerationEvent::Failed`] and the run
/// continues with the next entry.
pub fn materialize(
    catalog: &TemplateCatalog,
    context: &ProjectContext,
    reporter: &mut dyn Reporter,
) -> Vec<GenerationEvent> {
    let _span = tracing::info_span!("materialize", project = context.name()).entered();

    let mut events = Vec::with_capacity(catalog.len());
    let mut emit = |event: GenerationEvent| {
        reporter.report(&event);
        events.push(event);
    };

    for dir in catalog.directories() {
        emit(ensure_directory(dir, context));
    }
    for file in catalog.files() {
        emit(ensure_file(file, context));
    }

    tracing::debug!(actions = events.len(), "materialize finished");
    events
}

fn ensure_directory(dir: &DirectorySpec, context: &ProjectContext) -> GenerationEvent {
    let relative = dir.path();
    let absolute = context.resolve(relative);

    if absolute.is_dir() {
        tracing::debug!(path = %relative.display(), "directory exists");
        return skipped(relative);
    }

    match fs::create_dir_all(&absolute) {
        Ok(()) => {
            tracing::info!(path = %relative.display(), "created directory");
            GenerationEvent::DirectoryCreated {
                path: relative.to_path_buf(),
            }
        }
        Err(source) => failed(relative, &ScaffoldError::filesystem(absolute, source)),
    }
}

fn ensure_file(file: &FileSpec, context: &ProjectContext) -> GenerationEvent {
    let relative = file.path();
    let absolute = context.resolve(relative);

    if absolute.symlink_metadata().is_ok() {
        tracing::debug!(path = %relative.display(), "file exists");
        return skipped(relative);
    }

    let content = file.render(context);
    match write_new(&absolute, content.as_bytes()) {
        Ok(()) => {
            tracing::info!(path = %relative.display(), bytes = content.len(), "created file");
            GenerationEvent::FileCreated {
                path: relative.to_path_buf(),
            }
        }
        // Another writer got there between the check and the open
        Err(source) if source.kind() == io::ErrorKind::AlreadyExists => skipped(relative),
        Err(source) => failed(relative, &ScaffoldError::filesystem(absolute, source)),
    }
}

/// Write `content` to a file that must not exist yet
///
/// A partially written file is removed so the next run retries it.
fn write_new(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut handle = OpenOptions::new().write(true).create_new(true).open(path)?;

    if let Err(err) = handle.write_all(content).and_then(|()| handle.flush()) {
        drop(handle);
        let _ = fs::remove_file(path);
        return Err(err);
    }
    Ok(())
}

fn skipped(relative: &Path) -> GenerationEvent {
    GenerationEvent::Skipped {
        path: relative.to_path_buf(),
        reason: SkipReason::AlreadyExists,
    }
}

fn failed(relative: &Path, error: &ScaffoldError) -> GenerationEvent {
    tracing::warn!(path = %relative.display(), %error, "action failed");
    GenerationEvent::Failed {
        path: relative.to_path_buf(),
        message: error.to_string(),
    }
}
