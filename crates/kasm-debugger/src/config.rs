use std::path::{Path, PathBuf};

/// Default maximum number of instructions executed by a single
/// [run](crate::Debugger::run).
pub const DEFAULT_RUN_STEP_LIMIT: u64 = 1_000_000;

/// Configuration of a debugger.
///
/// It is usually decoded from a KDL document:
///
/// ```kdl
/// run-step-limit 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, knus::Decode)]
pub struct DebuggerConfig {
    /// Maximum number of instructions executed by a single run.
    #[knus(child, default = DEFAULT_RUN_STEP_LIMIT, unwrap(argument))]
    pub run_step_limit: u64,
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            run_step_limit: DEFAULT_RUN_STEP_LIMIT,
        }
    }
}

impl DebuggerConfig {
    /// Decodes a configuration from KDL content.
    ///
    /// `file_name` is only used for error reporting.
    pub fn parse(file_name: &str, content: &str) -> Result<Self, knus::Error> {
        knus::parse(file_name, content)
    }

    /// Reads and decodes the KDL configuration file at the given path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::File(path.to_path_buf(), e))?;

        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();

        Ok(Self::parse(&file_name, &content)?)
    }
}

/// Configuration loading error.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// File open/read error.
    #[error("{0}: {1}")]
    File(PathBuf, std::io::Error),

    /// Malformed KDL configuration.
    #[error(transparent)]
    Parse(#[from] knus::Error),
}
