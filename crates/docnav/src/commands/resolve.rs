//! `docnav resolve` command implementation.

use clap::Args;
use docnav_site::paths::normalize_route;
use docnav_site::routing::{self, PrevNext, Resolution};
use serde::Serialize;

use crate::commands::common::{CommonArgs, require_section};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Section id.
    section: String,

    /// Path below the section (empty for the section root).
    #[arg(default_value = "")]
    segment: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Verdict plus reading-order neighbors, as printed with `--json`.
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    resolution: &'a Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<PrevNext>,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the section is unknown, or nothing
    /// exists at the requested path.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let store = self.common.load_store()?;
        let section = require_section(&store, &self.section)?;

        let resolution = routing::resolve(&section, &self.segment);
        let path = if self.segment.is_empty() {
            section.base().to_owned()
        } else {
            format!("{}/{}", section.base(), self.segment)
        };
        let links = matches!(resolution, Resolution::Ok { .. })
            .then(|| routing::prev_next(resolution.nav(), normalize_route(&path)));

        if self.common.json {
            output.json(&Report {
                resolution: &resolution,
                links,
            })?;
        } else {
            print_report(&output, &resolution, links.as_ref())?;
        }

        match resolution {
            Resolution::NotFound { .. } => Err(CliError::RouteNotFound { path }),
            _ => Ok(()),
        }
    }
}

fn print_report(output: &Output, resolution: &Resolution, links: Option<&PrevNext>) -> Result<(), CliError> {
    match resolution {
        Resolution::Ok { segment, .. } => output.line(&format!("ok: {segment}"))?,
        Resolution::Redirect { url, .. } => output.line(&format!("redirect: {url}"))?,
        Resolution::NotFound { .. } => output.line("not found")?,
    }

    if let Some(links) = links {
        if let Some(prev) = &links.prev {
            output.link(0, &format!("prev: {}", prev.title), &prev.url)?;
        }
        if let Some(next) = &links.next {
            output.link(0, &format!("next: {}", next.title), &next.url)?;
        }
    }
    Ok(())
}
