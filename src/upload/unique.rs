use crate::{filename, github::RepositoryHandler, http};
use thiserror::Error;

pub const MAX_ATTEMPTS: u32 = 100;

pub trait PathProbe {
    async fn exists(&self, path: &str) -> Result<bool, http::Error>;
}

impl PathProbe for RepositoryHandler<'_> {
    async fn exists(&self, path: &str) -> Result<bool, http::Error> {
        RepositoryHandler::exists(self, path).await
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to check whether {path} exists")]
    ProbeError {
        path: String,
        #[source]
        cause: http::Error,
    },
    #[error("No free name for {path} after {attempts} attempts")]
    Exhausted { path: String, attempts: u32 },
}

/// Finds a path under `folder` that does not exist yet, trying `filename` first
/// and then `-1`, `-2`, ... inserted before the extension.
pub async fn resolve_unique_path(
    probe: &impl PathProbe,
    folder: &str,
    filename: &str,
) -> Result<String, ResolveError> {
    let (base, ext) = filename::split_extension(filename);
    let mut candidate = filename.to_owned();

    for attempt in 1..=MAX_ATTEMPTS {
        let path = format!("{}/{}", folder, candidate);

        let exists = probe
            .exists(&path)
            .await
            .map_err(|cause| ResolveError::ProbeError {
                path: path.clone(),
                cause,
            })?;

        if !exists {
            return Ok(path);
        }

        log::debug!("{} already exists", path);
        candidate = format!("{}-{}{}", base, attempt, ext);
    }

    Err(ResolveError::Exhausted {
        path: format!("{}/{}", folder, filename),
        attempts: MAX_ATTEMPTS,
    })
}
