//! Arguments and setup shared by every command.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_site::{ContentStore, Registry, Section, SectionDef, UnlistedPolicy};
use docnav_storage_fs::FsStorage;

use crate::error::CliError;

/// Options accepted by every command.
#[derive(Args, Debug)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory content roots are relative to (overrides config).
    #[arg(short, long)]
    project_dir: Option<PathBuf>,

    /// Deployment base path, e.g. /just-go (overrides config).
    #[arg(long, env = "DOCNAV_BASE_PATH")]
    base_path: Option<String>,

    /// Undeclared documents: omit or append-alphabetical (overrides config).
    #[arg(long)]
    unlisted: Option<UnlistedPolicy>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration and scan content into a store.
    pub(crate) fn load_store(&self) -> Result<ContentStore, CliError> {
        let cli_settings = CliSettings {
            project_dir: self.project_dir.clone(),
            base_path: self.base_path.clone(),
            unlisted: self.unlisted,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let registry = registry_from_config(&config);
        let storage = FsStorage::new(config.project_dir.clone(), registry.roots());
        tracing::info!(
            project_dir = %config.project_dir.display(),
            sections = registry.sections().len(),
            "Loading content"
        );

        Ok(ContentStore::load(&storage, registry)?)
    }
}

/// Build the site registry from loaded configuration.
pub(crate) fn registry_from_config(config: &Config) -> Registry {
    config
        .sections
        .iter()
        .map(|section| {
            let mut def = SectionDef::new(section.id.as_str(), &section.root);
            def.title.clone_from(&section.title);
            def.subtitle.clone_from(&section.subtitle);
            def.href.clone_from(&section.href);
            def
        })
        .fold(
            Registry::new(&config.base_path).with_unlisted(config.unlisted),
            Registry::with_section,
        )
}

/// Look up a configured section, failing for unknown ids.
pub(crate) fn require_section<'a>(store: &'a ContentStore, id: &str) -> Result<Section<'a>, CliError> {
    if store.registry().section(id).is_none() {
        return Err(CliError::UnknownSection(id.to_owned()));
    }
    Ok(store.section(id))
}
