//! `docnav nav` command implementation.

use clap::Args;

use crate::commands::common::{CommonArgs, require_section};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args, Debug)]
pub(crate) struct NavArgs {
    /// Section id.
    section: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the section is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let store = self.common.load_store()?;
        let section = require_section(&store, &self.section)?;

        let nav = section.nav();
        if self.common.json {
            return output.json(&nav);
        }

        if nav.is_empty() {
            output.warning(&format!(
                "Section \"{}\" has no navigation (is there a _toc file in its root?)",
                section.id()
            ));
        }
        for group in &nav {
            match &group.href {
                Some(href) => output.link(0, &group.label, href)?,
                None => {
                    output.heading(&group.label)?;
                    for item in &group.items {
                        output.link(2, &item.title, &item.url)?;
                    }
                }
            }
        }
        Ok(())
    }
}
