//! flutter-scaffold CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod confirm;
pub mod reporter;

pub use commands::{GenerateCommand, GenerateOutcome, LayoutCommand, ManifestStep};
pub use confirm::{Confirm, FixedAnswer, PromptConfirm};
pub use reporter::ConsoleReporter;
