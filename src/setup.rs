use crate::{
    config::{Config, ConfigFile, Repository},
    credentials::CredentialStore,
};
use anyhow::{Context, Result};
use dialoguer::{Input, Password};

#[derive(Debug, PartialEq)]
pub enum TokenLocation {
    Keychain,
    ConfigFile { reason: String },
}

pub async fn configure(file: &ConfigFile, store: &dyn CredentialStore) -> Result<()> {
    println!("=== GitUp Configuration ===");

    let token = Password::new()
        .with_prompt("Enter your GitHub Personal Access Token")
        .interact()
        .context("Error reading token")?;

    let repository: String = Input::new()
        .with_prompt("Enter repository (owner/repo)")
        .validate_with(|input: &String| -> Result<(), String> {
            input
                .trim()
                .parse::<Repository>()
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()
        .context("Error reading repository")?;

    match save(file, store, &token, &repository).await? {
        TokenLocation::Keychain => println!("✓ Token saved to keychain"),
        TokenLocation::ConfigFile { reason } => {
            eprintln!("Warning: Could not save to keychain: {}", reason);
            eprintln!("Token will be saved in config file instead");
        }
    }

    println!("✓ Configuration saved to {}", file.path().display());

    Ok(())
}

pub async fn save(
    file: &ConfigFile,
    store: &dyn CredentialStore,
    token: &str,
    repository: &str,
) -> Result<TokenLocation> {
    let token = token.trim();
    let repository = repository.trim();

    repository.parse::<Repository>()?;

    let location = match store.save(token) {
        Ok(()) => TokenLocation::Keychain,
        Err(err) => TokenLocation::ConfigFile {
            reason: format!("{:#}", err),
        },
    };

    let file_token = match location {
        TokenLocation::Keychain => "",
        TokenLocation::ConfigFile { .. } => token,
    };

    file.write(&Config::new(file_token, repository))
        .await
        .context("Error saving config")?;

    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryStore;
    use tempdir::TempDir;

    #[tokio::test]
    async fn should_keep_token_out_of_file_when_keychain_works() -> Result<()> {
        let dir = TempDir::new("setup")?;
        let file = ConfigFile::at(dir.path().join("config.json"));
        let store = MemoryStore::default();

        let location = save(&file, &store, " ghp_123\n", "owner/repo").await?;

        assert_eq!(location, TokenLocation::Keychain);
        assert_eq!(store.token(), Some("ghp_123".to_owned()));
        assert_eq!(file.read().await?, Config::new("", "owner/repo"));

        let loaded = Config::load(&file, &store).await?;
        assert_eq!(loaded.token, "ghp_123");

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_write_token_to_file_when_keychain_fails() -> Result<()> {
        let dir = TempDir::new("setup")?;
        let file = ConfigFile::at(dir.path().join("config.json"));
        let store = MemoryStore::failing();

        let location = save(&file, &store, "ghp_123", "owner/repo").await?;

        assert_eq!(
            location,
            TokenLocation::ConfigFile {
                reason: "keychain locked".to_owned()
            }
        );
        assert_eq!(file.read().await?, Config::new("ghp_123", "owner/repo"));

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_not_write_invalid_repository() -> Result<()> {
        let dir = TempDir::new("setup")?;
        let file = ConfigFile::at(dir.path().join("config.json"));
        let store = MemoryStore::default();

        let result = save(&file, &store, "ghp_123", "owner").await;

        assert!(result.is_err());
        assert!(!file.path().exists());
        assert_eq!(store.token(), None);

        dir.close()?;
        Ok(())
    }
}
