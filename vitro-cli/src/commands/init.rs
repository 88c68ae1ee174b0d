//! `vitro init`: write the config and scaffold the preview app.

use vitro_common::{write_file, write_file_if, WriteOutcome};
use vitro_config::{default_config_yaml, PackageManager, VitroConfig, DEFAULT_CONFIG_FILE_NAME};
use vitro_templating::{render_gitignore, render_package_json, TemplateEngine};

use crate::commands::generate::{generate, GenerateReport};
use crate::commands::process::run_program;
use crate::context::{CommandContext, VERSION, VERSION_FILE};
use crate::error::CliResult;

/// Options of the init command
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Overrides the configured package manager
    pub package_manager: Option<PackageManager>,
    /// Skip the dependency install
    pub no_install: bool,
}

/// Write the default config file unless the project already has one.
///
/// Returns true when a file was written.
pub fn ensure_config_file(
    context: &CommandContext,
    package_manager: PackageManager,
) -> CliResult<bool> {
    if vitro_config::find_config_file(&context.root).is_some() {
        return Ok(false);
    }
    let path = context.root.join(DEFAULT_CONFIG_FILE_NAME);
    let outcome = write_file_if(&path, &default_config_yaml(package_manager), false)?;
    Ok(outcome == WriteOutcome::Written)
}

/// Write `package.json`, `.gitignore` and the version file, then regenerate
/// every page.
pub fn scaffold_app(config: &VitroConfig) -> CliResult<GenerateReport> {
    let app_dir = config.app_dir();
    let engine = TemplateEngine::new()?;

    write_file(
        &app_dir.join("package.json"),
        &render_package_json(&engine, VERSION)?,
    )?;
    write_file(
        &app_dir.join(".gitignore"),
        &render_gitignore(&engine, &config.settings.pages_dir)?,
    )?;
    write_file(
        &app_dir.join(VERSION_FILE),
        &serde_json::to_string(VERSION)?,
    )?;

    generate(config, true)
}

/// Scaffold the app for an existing config and install its dependencies
pub async fn init_app(
    config: &VitroConfig,
    package_manager: PackageManager,
    install: bool,
) -> CliResult<()> {
    let report = scaffold_app(config)?;
    println!("scaffolded {}: {}", config.app_dir().display(), report);

    if install {
        println!("installing dependencies with {package_manager}");
        run_program(
            package_manager.program(),
            &package_manager.install_args(),
            &config.app_dir(),
            &[],
        )
        .await?;
    }
    Ok(())
}

/// Run the init command
pub async fn run_init(context: &CommandContext, options: InitOptions) -> CliResult<()> {
    let requested = options.package_manager.unwrap_or_default();
    if ensure_config_file(context, requested)? {
        println!("created {DEFAULT_CONFIG_FILE_NAME}");
    }

    let config = context.load_config()?;
    let package_manager = options
        .package_manager
        .unwrap_or(config.settings.package_manager);
    init_app(&config, package_manager, !options.no_install).await
}
