//! docnav CLI - documentation navigation and routing.
//!
//! Provides commands for:
//! - `nav`: Print a section's navigation tree
//! - `resolve`: Resolve a path within a section
//! - `routes`: List every statically generated page
//! - `sections`: List configured sections

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CommonArgs, NavArgs, ResolveArgs, RoutesArgs, SectionsArgs};
use output::Output;

/// docnav - Documentation navigation and routing.
#[derive(Parser, Debug)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the navigation tree of a section.
    Nav(NavArgs),
    /// Resolve a path within a section.
    Resolve(ResolveArgs),
    /// List every statically generated page.
    Routes(RoutesArgs),
    /// List configured sections.
    Sections(SectionsArgs),
}

impl Commands {
    fn common(&self) -> &CommonArgs {
        match self {
            Self::Nav(args) => &args.common,
            Self::Resolve(args) => &args.common,
            Self::Routes(args) => &args.common,
            Self::Sections(args) => &args.common,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.common().verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Nav(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Routes(args) => args.execute(),
        Commands::Sections(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve_defaults_to_section_root() {
        let cli = Cli::try_parse_from(["docnav", "resolve", "basics"]).unwrap();

        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert!(!args.common.json);
    }

    #[test]
    fn test_parse_shared_flags() {
        let cli = Cli::try_parse_from([
            "docnav",
            "nav",
            "basics",
            "--json",
            "--verbose",
            "--unlisted",
            "append-alphabetical",
            "--base-path",
            "/just-go",
        ])
        .unwrap();

        assert!(cli.command.common().json);
        assert!(cli.command.common().verbose);
    }

    #[test]
    fn test_parse_rejects_unknown_unlisted_policy() {
        let result = Cli::try_parse_from(["docnav", "routes", "--unlisted", "sometimes"]);

        assert!(result.is_err());
    }
}
