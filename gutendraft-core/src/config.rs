//! Pipeline configuration
//!
//! Everything process-wide is carried here explicitly instead of being read
//! from ambient globals.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration passed into [`crate::pipeline::Pipeline`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base directory under which project directories are created
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Explicit path to the `se` executable; discovery is used when unset
    #[serde(default)]
    pub se_command: Option<PathBuf>,

    /// Whether to run the external toolchain after emission
    #[serde(default = "default_run_toolchain")]
    pub run_toolchain: bool,
}

fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_run_toolchain() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            se_command: None,
            run_toolchain: default_run_toolchain(),
        }
    }
}
