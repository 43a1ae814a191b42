//! Generation events and reporting
//!
//! Every filesystem action taken (or deliberately not taken) during a run is
//! described by one [`GenerationEvent`]. Events are handed to a [`Reporter`]
//! in the order the actions happen, then discarded; nothing is persisted.

use std::fmt;
use std::path::{Path, PathBuf};

/// Why an entry was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The directory or file is already present
    AlreadyExists,
    /// There is no manifest to patch
    ManifestMissing,
    /// The manifest already declares the marker dependency
    ManifestConfigured,
    /// The user declined the manifest overwrite
    Declined,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::AlreadyExists => "already exists",
            Self::ManifestMissing => "no manifest found",
            Self::ManifestConfigured => "already configured",
            Self::Declined => "overwrite declined",
        };
        f.write_str(text)
    }
}

/// One action taken during a run
///
/// `path` is always relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    /// A directory (and any missing ancestors) was created
    DirectoryCreated {
        /// Relative path
        path: PathBuf,
    },
    /// A file was written from its template
    FileCreated {
        /// Relative path
        path: PathBuf,
    },
    /// The manifest was replaced
    ManifestPatched {
        /// Relative path
        path: PathBuf,
    },
    /// Nothing was done
    Skipped {
        /// Relative path
        path: PathBuf,
        /// Why
        reason: SkipReason,
    },
    /// The action failed; earlier and later actions are unaffected
    Failed {
        /// Relative path
        path: PathBuf,
        /// Error description
        message: String,
    },
}

impl GenerationEvent {
    /// Relative path the event refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryCreated { path }
            | Self::FileCreated { path }
            | Self::ManifestPatched { path }
            | Self::Skipped { path, .. }
            | Self::Failed { path, .. } => path,
        }
    }

    /// Whether the event changed the filesystem
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(
            self,
            Self::DirectoryCreated { .. } | Self::FileCreated { .. } | Self::ManifestPatched { .. }
        )
    }

    /// Whether the event is a skip
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    /// Whether the event is a failure
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for GenerationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryCreated { path } => {
                write!(f, "Created directory: {}", path.display())
            }
            Self::FileCreated { path } => write!(f, "Created file: {}", path.display()),
            Self::ManifestPatched { path } => write!(f, "Patched manifest: {}", path.display()),
            Self::Skipped { path, reason } => {
                write!(f, "Skipped: {} ({reason})", path.display())
            }
            Self::Failed { path, message } => {
                write!(f, "Failed: {} ({message})", path.display())
            }
        }
    }
}

/// Sink for generation events
pub trait Reporter {
    /// Receive one event, in filesystem-action order
    fn report(&mut self, event: &GenerationEvent);
}

impl Reporter for Vec<GenerationEvent> {
    fn report(&mut self, event: &GenerationEvent) {
        self.push(event.clone());
    }
}

/// Reporter that emits each event as a structured `tracing` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, event: &GenerationEvent) {
        let path = event.path().display();
        match event {
            GenerationEvent::DirectoryCreated { .. } => {
                tracing::info!(%path, kind = "directory", "created");
            }
            GenerationEvent::FileCreated { .. } => {
                tracing::info!(%path, kind = "file", "created");
            }
            GenerationEvent::ManifestPatched { .. } => {
                tracing::info!(%path, kind = "manifest", "patched");
            }
            GenerationEvent::Skipped { reason, .. } => {
                tracing::debug!(%path, %reason, "skipped");
            }
            GenerationEvent::Failed { message, .. } => {
                tracing::warn!(%path, error = %message, "failed");
            }
        }
    }
}

/// Partial-success summary of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Paths created or patched
    pub created: Vec<PathBuf>,
    /// Paths left alone
    pub skipped: Vec<PathBuf>,
    /// Paths whose action failed, with the error description
    pub failed: Vec<(PathBuf, String)>,
}

impl GenerationSummary {
    /// Summarize a sequence of events
    #[must_use]
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a GenerationEvent>) -> Self {
        let mut summary = Self::default();
        summary.extend(events);
        summary
    }

    /// Fold more events into the summary
    pub fn extend<'a>(&mut self, events: impl IntoIterator<Item = &'a GenerationEvent>) {
        for event in events {
            match event {
                GenerationEvent::Skipped { path, .. } => self.skipped.push(path.clone()),
                GenerationEvent::Failed { path, message } => {
                    self.failed.push((path.clone(), message.clone()));
                }
                created => self.created.push(created.path().to_path_buf()),
            }
        }
    }

    /// Number of paths created or patched
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    /// Whether any action failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} created, {} skipped, {} failed",
            self.created.len(),
            self.skipped.len(),
            self.failed.len()
        )?;
        for path in &self.created {
            writeln!(f, "  created: {}", path.display())?;
        }
        for path in &self.skipped {
            writeln!(f, "  skipped: {}", path.display())?;
        }
        for (path, message) in &self.failed {
            writeln!(f, "  failed: {} ({message})", path.display())?;
        }
        Ok(())
    }
}
