//! `docnav sections` command implementation.

use clap::Args;

use crate::commands::common::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sections command.
#[derive(Args, Debug)]
pub(crate) struct SectionsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl SectionsArgs {
    /// Execute the sections command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let store = self.common.load_store()?;

        let summaries = store.summaries();
        if self.common.json {
            return output.json(&summaries);
        }

        for summary in &summaries {
            output.heading(&format!("{} ({})", summary.title, summary.id))?;
            if let Some(subtitle) = &summary.subtitle {
                output.line(&format!("  {subtitle}"))?;
            }
            if let Some(href) = &summary.href {
                output.link(2, "href:", href)?;
            }
        }
        Ok(())
    }
}
