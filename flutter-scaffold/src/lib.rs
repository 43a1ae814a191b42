//! flutter-scaffold: idempotent Flutter project layout generator
//!
//! Materializes a fixed clean-architecture directory tree and template
//! files under a project root, creating only what is missing, and replaces
//! a pre-existing `pubspec.yaml` with a standard dependency manifest when it
//! has not been configured yet.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use flutter_scaffold::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> flutter_scaffold::Result<()> {
//! let context = ProjectContext::derive(Some(Path::new("/home/u/quick_wash")))?;
//! let config = ScaffoldConfig::load(context.root())?;
//! let catalog = TemplateCatalog::flutter(&config.layout)?;
//!
//! let mut reporter = TracingReporter;
//! let mut events = materialize(&catalog, &context, &mut reporter);
//! events.push(patch_manifest(context.root(), context.name())?);
//!
//! let summary = GenerationSummary::from_events(&events);
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```
//!
//! # Design
//!
//! - [`catalog`] is pure data plus a literal `{{key}}` renderer
//! - [`context`] is derived once per run and passed explicitly
//! - [`materializer`] never overwrites; reruns only produce skips
//! - [`manifest`] gates a whole-file replacement on one marker dependency
//! - [`report`] carries one event per filesystem action

#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod manifest;
pub mod materializer;
pub mod observability;
pub mod report;
pub mod templates;

pub use error::{Result, ScaffoldError};

/// Commonly used items
pub mod prelude {
    pub use crate::catalog::{DirectorySpec, FileSpec, Placeholders, TemplateCatalog};
    pub use crate::config::ScaffoldConfig;
    pub use crate::context::ProjectContext;
    pub use crate::error::{Result, ScaffoldError};
    pub use crate::manifest::{patch_manifest, ManifestStatus};
    pub use crate::materializer::materialize;
    pub use crate::report::{
        GenerationEvent, GenerationSummary, Reporter, SkipReason, TracingReporter,
    };
}
