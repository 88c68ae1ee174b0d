//! `vitro dev`: make sure the app is current, then start the dev server.

use vitro_config::{PackageManager, VitroConfig};

use crate::commands::generate::generate;
use crate::commands::init::init_app;
use crate::commands::process::run_program;
use crate::context::{CommandContext, VERSION, VERSION_FILE};
use crate::error::CliResult;

/// Options of the dev command
#[derive(Debug, Clone, Copy, Default)]
pub struct DevOptions {
    pub port: Option<u16>,
    pub verbose: bool,
}

/// Why the app has to be scaffolded again before serving, if it does.
pub fn init_reason(config: &VitroConfig, package_manager: PackageManager) -> Option<String> {
    let app_dir = config.app_dir();
    if !app_dir.is_dir() {
        return Some(format!("{} does not exist", app_dir.display()));
    }

    let version_file = app_dir.join(VERSION_FILE);
    let installed = std::fs::read_to_string(&version_file)
        .ok()
        .and_then(|content| serde_json::from_str::<String>(&content).ok());
    match installed {
        None => return Some(format!("{} is missing or unreadable", version_file.display())),
        Some(version) if version != VERSION => {
            return Some(format!("app was created by vitro {version}, this is {VERSION}"));
        }
        Some(_) => {}
    }

    // yarn workspaces may hoist react out of the app directory
    if package_manager == PackageManager::Npm && !app_dir.join("node_modules/react").is_dir() {
        return Some("dependencies are not installed".to_string());
    }
    None
}

/// Run the dev command
pub async fn run_dev(context: &CommandContext, options: DevOptions) -> CliResult<()> {
    let config = context.load_config()?;
    config.require_file()?;
    let package_manager = config.settings.package_manager;

    if let Some(reason) = init_reason(&config, package_manager) {
        println!("initializing preview app: {reason}");
        init_app(&config, package_manager, true).await?;
    } else {
        let report = generate(&config, false)?;
        tracing::info!("{}", report);
    }

    let port = options.port.unwrap_or(config.settings.port);
    println!("starting dev server on http://localhost:{port}");

    let envs: &[(&str, &str)] = if options.verbose {
        &[("VERBOSE", "true")]
    } else {
        &[]
    };
    run_program(
        package_manager.program(),
        &package_manager.dev_args(port),
        &config.app_dir(),
        envs,
    )
    .await
}
