//! `docnav routes` command implementation.

use clap::Args;

use crate::commands::common::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args, Debug)]
pub(crate) struct RoutesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl RoutesArgs {
    /// Execute the routes command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let store = self.common.load_store()?;

        let params = store.page_params();
        if self.common.json {
            return output.json(&params);
        }

        let base_path = store.registry().base_path();
        for param in &params {
            match &param.page {
                Some(page) => output.line(&format!("{base_path}/{}/{page}", param.section))?,
                None => output.line(&format!("{base_path}/{}", param.section))?,
            }
        }
        output.info(&format!("{} routes", params.len()));
        Ok(())
    }
}
