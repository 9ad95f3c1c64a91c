//! External publishing toolchain invocation
//!
//! The release steps are a fixed, ordered list of command descriptors run in
//! a loop with early exit on the first failure; nothing here retries or
//! repairs toolchain-reported issues.

use crate::error::ToolchainError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One external toolchain command
#[derive(Debug, Clone, Copy)]
pub struct ToolchainCommand {
    /// Subcommand name, e.g. "build"
    pub name: &'static str,

    /// Fixed arguments after the subcommand
    pub args: &'static [&'static str],
}

/// The release steps, in invocation order
pub const RELEASE_SEQUENCE: &[ToolchainCommand] = &[
    ToolchainCommand { name: "prepare-release", args: &["."] },
    ToolchainCommand { name: "build", args: &["."] },
    ToolchainCommand { name: "lint", args: &["."] },
];

/// Handle to a located `se` executable
#[derive(Debug, Clone)]
pub struct Toolchain {
    se_path: PathBuf,
}

impl Toolchain {
    /// Use an explicit executable path, skipping discovery
    pub fn with_command(se_path: impl Into<PathBuf>) -> Self {
        Self {
            se_path: se_path.into(),
        }
    }

    /// Probe the conventional install locations for a responding `se`
    /// executable
    pub fn discover() -> Result<Self, ToolchainError> {
        for candidate in candidate_paths() {
            if probe(&candidate) {
                tracing::debug!("Found toolchain executable at {}", candidate.display());
                return Ok(Self { se_path: candidate });
            }
        }
        Err(ToolchainError::ExecutableNotFound)
    }

    /// Run the full release sequence against a project directory, stopping
    /// at the first non-zero exit status
    pub fn run_release_sequence(&self, project_dir: &Path) -> Result<(), ToolchainError> {
        for command in RELEASE_SEQUENCE {
            self.run(command, project_dir)?;
        }
        Ok(())
    }

    fn run(&self, command: &ToolchainCommand, project_dir: &Path) -> Result<(), ToolchainError> {
        tracing::info!("Running 'se {}'", command.name);
        let output = Command::new(&self.se_path)
            .arg(command.name)
            .args(command.args)
            .current_dir(project_dir)
            .output()
            .map_err(|source| ToolchainError::Spawn {
                command: command.name.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ToolchainError::CommandFailed {
                command: command.name.to_string(),
                status: output.status,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }
}

/// Conventional install locations, checked in order
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("se")];
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        candidates.push(home.join("standardebooks").join("tools").join("se"));
        candidates.push(home.join("tools").join("se"));
        candidates.push(home.join("se"));
    }
    candidates.push(PathBuf::from("/usr/local/bin/se"));
    candidates
}

fn probe(path: &Path) -> bool {
    Command::new(path)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
