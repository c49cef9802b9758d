//! Layered CLI configuration.
//!
//! Priority order: environment variables, then the TOML file passed with
//! `--config`, then compiled defaults. Command-line flags override the
//! loaded result in `cli::run`.
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `db_path` | `CONTACTS_DB_PATH` | `data.db` |
//! | `log_level` | `CONTACTS_LOG_LEVEL` | build default |
//! | `log_dir` | `CONTACTS_LOG_DIR` | unset (logging off) |
//! | `export_dir` | `CONTACTS_EXPORT_DIR` | `.` |

use confique::Config;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    MissingFile(PathBuf),
    Load(confique::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile(path) => write!(f, "config file `{}` not found", path.display()),
            Self::Load(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingFile(_) => None,
            Self::Load(err) => Some(err),
        }
    }
}

impl From<confique::Error> for ConfigError {
    fn from(value: confique::Error) -> Self {
        Self::Load(value)
    }
}

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct ContactsConfig {
    /// SQLite database file.
    #[config(env = "CONTACTS_DB_PATH", default = "data.db")]
    pub db_path: PathBuf,

    /// One of trace|debug|info|warn|error.
    #[config(env = "CONTACTS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[config(env = "CONTACTS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Directory receiving export files.
    #[config(env = "CONTACTS_EXPORT_DIR", default = ".")]
    pub export_dir: PathBuf,
}

impl ContactsConfig {
    /// Loads configuration, reading `file` when given.
    ///
    /// An explicitly requested file must exist.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}
