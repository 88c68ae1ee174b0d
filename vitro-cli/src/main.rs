//! Vitro CLI - develop React components in isolated experiment pages.
//!
//! Commands:
//! - `vitro` (no args): same as `vitro dev`
//! - `vitro init`: write `vitro.config.yaml` and scaffold the preview app
//! - `vitro generate`: regenerate pages, tree and experiments map
//! - `vitro tree`: print the ordered experiments tree
//! - `vitro nav <url>`: show the neighbours of an experiment
//! - `vitro dev`: start the preview dev server
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitro::commands::{dev, generate, init, nav, tree};
use vitro::{handle_cli_result, Cli, CliResult, CommandContext, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("vitro=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = handle_cli_result(dispatch_command(cli).await);
    std::process::exit(exit_code);
}

/// Dispatch a parsed CLI to the appropriate command handler.
async fn dispatch_command(cli: Cli) -> CliResult<()> {
    let context = CommandContext::new(cli.project_root.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Dev {
        port: None,
        verbose: false,
    });

    match command {
        Commands::Init {
            package_manager,
            no_install,
        } => {
            let options = init::InitOptions {
                package_manager: package_manager.map(Into::into),
                no_install,
            };
            init::run_init(&context, options).await
        }
        Commands::Generate { force } => generate::run_generate(&context, force),
        Commands::Tree {
            json,
            root,
            no_ordering,
        } => tree::run_tree(
            &context,
            &tree::TreeOptions {
                json,
                root,
                no_ordering,
            },
        ),
        Commands::Nav { url } => nav::run_nav(&context, &url),
        Commands::Dev { port, verbose } => {
            dev::run_dev(&context, dev::DevOptions { port, verbose }).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitro::PackageManagerArg;

    #[test]
    fn test_cli_parsing_no_args() {
        let cli = Cli::parse_from(["vitro"]);
        assert!(!cli.debug);
        assert!(cli.command.is_none());
        assert!(cli.project_root.is_none());
    }

    #[test]
    fn test_cli_parsing_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["vitro", "generate", "--debug", "-C", "site"]);
        assert!(cli.debug);
        assert_eq!(cli.project_root.as_deref(), Some(std::path::Path::new("site")));
        assert!(matches!(cli.command, Some(Commands::Generate { force: false })));
    }

    #[test]
    fn test_cli_parsing_init() {
        let cli = Cli::parse_from(["vitro", "init", "--package-manager", "yarn", "--no-install"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Init {
                package_manager: Some(PackageManagerArg::Yarn),
                no_install: true,
            })
        ));
    }

    #[test]
    fn test_cli_parsing_dev_port() {
        let cli = Cli::parse_from(["vitro", "dev", "-p", "3000", "--verbose"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Dev {
                port: Some(3000),
                verbose: true,
            })
        ));
    }

    #[test]
    fn test_cli_parsing_nav_requires_url() {
        assert!(Cli::try_parse_from(["vitro", "nav"]).is_err());
    }

    #[test]
    fn test_cli_parsing_rejects_unknown_package_manager() {
        assert!(Cli::try_parse_from(["vitro", "init", "--package-manager", "pnpm"]).is_err());
    }
}
