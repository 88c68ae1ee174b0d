//! Running the package manager.

use std::path::Path;

use tokio::process::Command;

use crate::error::{CliError, CliResult};

/// Run `program args..` in `cwd` with inherited stdio and wait for it.
pub async fn run_program(
    program: &str,
    args: &[String],
    cwd: &Path,
    envs: &[(&str, &str)],
) -> CliResult<()> {
    tracing::info!("running {} {} in {}", program, args.join(" "), cwd.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .envs(envs.iter().copied())
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|e| CliError::Process {
            program: program.to_string(),
            message: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(CliError::Process {
            program: program.to_string(),
            message: format!("exited with {status}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_program_is_a_process_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = run_program("vitro-no-such-program", &[], temp_dir.path(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Process { .. }));
    }
}
