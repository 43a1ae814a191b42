//! Project structure generation command

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::{style, Term};
use flutter_scaffold::config::ScaffoldConfig;
use flutter_scaffold::manifest::{self, ManifestStatus, MANIFEST_FILE};
use flutter_scaffold::prelude::*;

use crate::confirm::{Confirm, FixedAnswer, PromptConfirm};
use crate::reporter::ConsoleReporter;

/// What happened in the manifest step
#[derive(Debug)]
pub enum ManifestStep {
    /// Turned off by `--skip-manifest` or `manifest.patch = false`
    Disabled,
    /// Completed with this event
    Done(GenerationEvent),
    /// Reading, confirming or writing the manifest failed
    Failed(anyhow::Error),
}

/// Result of a generate run
#[derive(Debug)]
pub struct GenerateOutcome {
    /// Project name the templates were rendered with
    pub project_name: String,
    /// Catalog materialization results
    pub summary: GenerationSummary,
    /// Manifest patch result, reported separately from the catalog
    pub manifest: ManifestStep,
}

impl GenerateOutcome {
    /// Whether any catalog action or the manifest step failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.summary.has_failures() || matches!(self.manifest, ManifestStep::Failed(_))
    }

    /// Paths created plus a patched manifest
    #[must_use]
    pub fn created_count(&self) -> usize {
        let patched = matches!(
            self.manifest,
            ManifestStep::Done(GenerationEvent::ManifestPatched { .. })
        );
        self.summary.created_count() + usize::from(patched)
    }
}

/// Generate the Flutter project structure in an existing project root
pub struct GenerateCommand {
    root: Option<PathBuf>,
    assume_yes: bool,
    skip_manifest: bool,
}

impl GenerateCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `root` - Project root; `None` means no root is available
    /// * `assume_yes` - Overwrite the manifest without asking
    /// * `skip_manifest` - Do not touch the manifest at all
    #[must_use]
    pub const fn new(root: Option<PathBuf>, assume_yes: bool, skip_manifest: bool) -> Self {
        Self {
            root,
            assume_yes,
            skip_manifest,
        }
    }

    /// Execute the command with console output
    pub fn execute(&self) -> Result<()> {
        let mut reporter = if Term::stderr().is_term() {
            ConsoleReporter::new(true)?
        } else {
            ConsoleReporter::hidden(true)
        };
        let yes = FixedAnswer(true);
        let prompt = PromptConfirm::suspending(reporter.progress());
        let confirm: &dyn Confirm = if self.assume_yes { &yes } else { &prompt };

        let outcome = self.run(&mut reporter, confirm);
        reporter.finish();
        let outcome = outcome?;

        print!("{}", self.summary_text(&outcome)?);

        if outcome.has_failures() {
            anyhow::bail!(
                "{} of the project structure could not be generated; fix the errors above and rerun",
                outcome.project_name
            );
        }
        Ok(())
    }

    /// Run generation, sending every event to `reporter`
    ///
    /// Fails outright only when there is no usable project root or the
    /// configuration is invalid; per-path failures are in the outcome.
    pub fn run(&self, reporter: &mut dyn Reporter, confirm: &dyn Confirm) -> Result<GenerateOutcome> {
        let context = ProjectContext::derive(self.root.as_deref())?;
        let config = ScaffoldConfig::load(context.root())
            .with_context(|| format!("Failed to load configuration for {}", context.name()))?;
        let catalog = TemplateCatalog::flutter(&config.layout)?;

        tracing::info!(
            project = context.name(),
            entries = catalog.len(),
            "generating project structure"
        );

        let events = materialize(&catalog, &context, reporter);
        let summary = GenerationSummary::from_events(&events);

        let manifest = if self.skip_manifest || !config.manifest.patch {
            ManifestStep::Disabled
        } else {
            let needs_confirm = config.manifest.confirm && !self.assume_yes;
            Self::manifest_step(&context, needs_confirm, reporter, confirm)
        };

        Ok(GenerateOutcome {
            project_name: context.name().to_string(),
            summary,
            manifest,
        })
    }

    fn manifest_step(
        context: &ProjectContext,
        needs_confirm: bool,
        reporter: &mut dyn Reporter,
        confirm: &dyn Confirm,
    ) -> ManifestStep {
        let status = match manifest::inspect(context.root()) {
            Ok(status) => status,
            Err(err) => return ManifestStep::Failed(err.into()),
        };

        let approved = if status == ManifestStatus::NeedsPatch && needs_confirm {
            let prompt = format!(
                "{MANIFEST_FILE} does not declare flutter_bloc. Replace the whole file? Existing content will be lost"
            );
            match confirm.confirm(&prompt) {
                Ok(answer) => answer,
                Err(err) => return ManifestStep::Failed(err),
            }
        } else {
            true
        };

        let event = if approved {
            match patch_manifest(context.root(), context.name()) {
                Ok(event) => event,
                Err(err) => return ManifestStep::Failed(err.into()),
            }
        } else {
            manifest::declined()
        };

        reporter.report(&event);
        ManifestStep::Done(event)
    }

    /// Partial-success summary listing every path, plus the closing line
    pub fn summary_text(&self, outcome: &GenerateOutcome) -> Result<String> {
        let mut out = String::from("\n");
        write!(out, "{} {}", style("Summary:").bold(), outcome.summary)?;

        match &outcome.manifest {
            ManifestStep::Disabled => {}
            ManifestStep::Done(event) => writeln!(out, "  {event}")?,
            ManifestStep::Failed(err) => {
                writeln!(out, "  {} {err:#}", style("Manifest step failed:").red().bold())?;
            }
        }

        writeln!(out)?;
        if outcome.has_failures() {
            writeln!(
                out,
                "{}",
                style("Some paths failed. Rerun after fixing them; existing files are never overwritten.")
                    .yellow()
            )?;
        } else if self.skip_manifest {
            writeln!(
                out,
                "{} Created {} paths (manifest untouched)",
                style("✓").green().bold(),
                outcome.created_count()
            )?;
        } else {
            writeln!(
                out,
                "{} Project \"{}\" structure generated: created {} paths",
                style("✓").green().bold(),
                style(&outcome.project_name).cyan().bold(),
                outcome.created_count()
            )?;
        }
        Ok(out)
    }
}
