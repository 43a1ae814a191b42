//! Console rendering of generation events

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use flutter_scaffold::report::{GenerationEvent, Reporter};
use indicatif::{ProgressBar, ProgressStyle};

/// Writes one styled line per event, pausing the spinner around each line
///
/// Lines go to `output` (stdout by default) whether or not the spinner is
/// drawn, so piped runs list every path too.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    spinner: ProgressBar,
    show_skips: bool,
    output: W,
}

impl ConsoleReporter {
    /// Reporter with a visible spinner on stderr
    pub fn new(show_skips: bool) -> Result<Self> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Creating project structure...");

        Ok(Self {
            spinner,
            show_skips,
            output: io::stdout(),
        })
    }

    /// Reporter without a spinner, for terminals that cannot draw one
    #[must_use]
    pub fn hidden(show_skips: bool) -> Self {
        Self::with_output(io::stdout(), show_skips)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter without a spinner writing to `output`
    #[must_use]
    pub fn with_output(output: W, show_skips: bool) -> Self {
        Self {
            spinner: ProgressBar::hidden(),
            show_skips,
            output,
        }
    }

    /// Handle to the spinner, for pausing it around prompts
    #[must_use]
    pub fn progress(&self) -> ProgressBar {
        self.spinner.clone()
    }

    /// Stop the spinner so the terminal can be used for prompts
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    /// Where event lines are written
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }
}

/// Styled single-line rendering of an event
#[must_use]
pub fn event_line(event: &GenerationEvent) -> String {
    let path = event.path().display().to_string();
    match event {
        GenerationEvent::DirectoryCreated { .. } => {
            format!("  {} {}/", style("📁").green(), style(path).cyan())
        }
        GenerationEvent::FileCreated { .. } => {
            format!("  {} {}", style("📄").green(), style(path).cyan())
        }
        GenerationEvent::ManifestPatched { .. } => {
            format!("  {} {} (replaced)", style("✎").yellow(), style(path).yellow())
        }
        GenerationEvent::Skipped { reason, .. } => {
            format!("  {} {}", style("·").dim(), style(format!("{path} ({reason})")).dim())
        }
        GenerationEvent::Failed { message, .. } => {
            format!("  {} {} {}", style("✗").red(), style(path).red(), style(message).dim())
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &GenerationEvent) {
        if event.is_skip() && !self.show_skips {
            return;
        }

        let line = event_line(event);
        let output = &mut self.output;
        if let Err(err) = self.spinner.suspend(|| writeln!(output, "{line}")) {
            tracing::debug!(%err, "failed to write event line");
        }
    }
}

impl<W: Write> Drop for ConsoleReporter<W> {
    fn drop(&mut self) {
        self.spinner.finish_and_clear();
    }
}
