//! CLI command implementations

pub mod generate;
pub mod layout;

pub use generate::{GenerateCommand, GenerateOutcome, ManifestStep};
pub use layout::LayoutCommand;
