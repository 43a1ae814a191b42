//! Confirmation before lossy actions

use anyhow::{Context, Result};
use console::Term;
use indicatif::ProgressBar;

/// Asks the user a yes/no question
pub trait Confirm {
    /// `true` if the user agreed
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Interactive prompt on the terminal
///
/// Without an attended terminal the answer is always "no", so nothing is
/// overwritten unless `--yes` was given.
#[derive(Debug, Default, Clone)]
pub struct PromptConfirm {
    progress: Option<ProgressBar>,
}

impl PromptConfirm {
    /// Prompt that hides `progress` while waiting for an answer
    #[must_use]
    pub const fn suspending(progress: ProgressBar) -> Self {
        Self {
            progress: Some(progress),
        }
    }
}

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if !Term::stderr().is_term() {
            tracing::warn!("no terminal attached; treating confirmation as declined");
            return Ok(false);
        }

        let ask = || {
            dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .context("Failed to read confirmation")
        };

        match &self.progress {
            Some(progress) => progress.suspend(ask),
            None => ask(),
        }
    }
}

/// Fixed answer, for `--yes` and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}
