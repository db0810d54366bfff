use anyhow::Result;

#[cfg(any(target_os = "macos", target_os = "windows", test))]
const SERVICE_NAME: &str = "GitUp";

pub trait CredentialStore {
    fn save(&self, token: &str) -> Result<()>;

    fn load(&self) -> Result<Option<String>>;
}

#[cfg(any(target_os = "macos", target_os = "windows", test))]
pub struct KeyringStore {
    user: String,
}

#[cfg(any(target_os = "macos", target_os = "windows", test))]
impl KeyringStore {
    pub fn new(user: impl Into<String>) -> Self {
        KeyringStore { user: user.into() }
    }

    #[cfg(any(target_os = "macos", target_os = "windows"))]
    pub fn for_current_user() -> Self {
        KeyringStore::new(current_user())
    }

    fn entry(&self) -> Result<keyring::Entry> {
        Ok(keyring::Entry::new(SERVICE_NAME, &self.user)?)
    }
}

#[cfg(any(target_os = "macos", target_os = "windows", test))]
impl CredentialStore for KeyringStore {
    fn save(&self, token: &str) -> Result<()> {
        self.entry()?.set_password(token)?;
        log::debug!("stored token in keychain for {}", self.user);

        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token.trim().to_owned())),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(any(not(any(target_os = "macos", target_os = "windows")), test))]
pub struct NoopStore;

#[cfg(any(not(any(target_os = "macos", target_os = "windows")), test))]
impl CredentialStore for NoopStore {
    fn save(&self, _token: &str) -> Result<()> {
        Err(anyhow::anyhow!("no secure credential store on this platform"))
    }

    fn load(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
pub fn default_store() -> Box<dyn CredentialStore> {
    Box::new(KeyringStore::for_current_user())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn default_store() -> Box<dyn CredentialStore> {
    Box::new(NoopStore)
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_default()
}

#[cfg(test)]
pub use fake::MemoryStore;
