use crate::credentials::CredentialStore;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    io,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;
use tokio::io::AsyncWriteExt;

const CONFIG_DIR_NAME: &str = ".gitup";
const CONFIG_FILE_NAME: &str = "config.json";

#[cfg(unix)]
const CONFIG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const CONFIG_FILE_MODE: u32 = 0o600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to determine home directory")]
    HomeDirNotFound,
    #[error("Failed to read {}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
    #[error("Failed to parse {}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to serialize config")]
    SerializeError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to write {}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
    #[error("Invalid repository '{repository}': {reason}")]
    InvalidRepository {
        repository: String,
        reason: &'static str,
    },
    #[error("No GitHub token found in the keychain or the config file")]
    MissingToken,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub repository: String,
}

impl Config {
    pub fn new(token: impl Into<String>, repository: impl Into<String>) -> Self {
        Config {
            token: token.into(),
            repository: repository.into(),
        }
    }

    pub async fn load(file: &ConfigFile, store: &dyn CredentialStore) -> Result<Config, ConfigError> {
        let mut config = file.read().await?;

        if config.token.is_empty() {
            match store.load() {
                Ok(Some(token)) => {
                    log::debug!("using token from keychain");
                    config.token = token;
                }
                Ok(None) => log::debug!("no token in keychain"),
                Err(err) => log::debug!("keychain lookup failed: {:#}", err),
            }
        }

        config.repository()?;

        if config.token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        Ok(config)
    }

    pub fn repository(&self) -> Result<Repository, ConfigError> {
        self.repository.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl FromStr for Repository {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ConfigError::InvalidRepository {
            repository: value.to_owned(),
            reason,
        };

        let parts: Vec<&str> = value.split('/').collect();
        let [owner, name] = parts.as_slice() else {
            return Err(invalid("repository must be in 'owner/repo' format"));
        };

        if owner.is_empty() || name.is_empty() {
            return Err(invalid("repository owner and name must be non-empty"));
        }

        Ok(Repository {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        ConfigFile { path: path.into() }
    }

    pub fn default_location() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

        Ok(ConfigFile::at(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<Config, ConfigError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|cause| ConfigError::ReadError {
                path: self.path.clone(),
                cause,
            })?;

        serde_json::from_str::<Config>(&content).map_err(|cause| ConfigError::ParseError {
            path: self.path.clone(),
            cause,
        })
    }

    pub async fn write(&self, config: &Config) -> Result<(), ConfigError> {
        let write_error = |cause| ConfigError::WriteError {
            path: self.path.clone(),
            cause,
        };

        if let Some(dir) = self.path.parent() {
            let mut builder = tokio::fs::DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            builder.mode(CONFIG_DIR_MODE);
            builder.create(dir).await.map_err(write_error)?;
        }

        let data = serde_json::to_string_pretty(config)
            .map_err(|cause| ConfigError::SerializeError { cause })?;

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(CONFIG_FILE_MODE);

        let mut file = options.open(&self.path).await.map_err(write_error)?;
        file.write_all(data.as_bytes()).await.map_err(write_error)?;
        file.flush().await.map_err(write_error)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(CONFIG_FILE_MODE))
                .await
                .map_err(write_error)?;
        }

        log::debug!("config written to {}", self.path.display());

        Ok(())
    }
}
