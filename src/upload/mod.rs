pub mod unique;
pub mod validation;

use crate::{
    filename, folder,
    github::{BuilderExecutor, RepositoryHandler},
    http, markdown,
};
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use unique::ResolveError;
use validation::ValidationError;

pub const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid file")]
    InvalidFile(#[from] ValidationError),
    #[error("{} has no file name", path.display())]
    MissingFileName { path: PathBuf },
    #[error("Failed to read {}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
    #[error("Failed to determine unique filename")]
    ResolveError(#[from] ResolveError),
    #[error("Failed to upload {path}")]
    WriteError {
        path: String,
        #[source]
        cause: http::Error,
    },
    #[error("Failed to build the link for {path}")]
    LinkError {
        path: String,
        #[source]
        cause: http::Error,
    },
}

pub struct Uploader<'a> {
    repo: RepositoryHandler<'a>,
    branch: String,
}

impl<'a> Uploader<'a> {
    pub fn new(repo: RepositoryHandler<'a>, branch: impl Into<String>) -> Self {
        Uploader {
            repo,
            branch: branch.into(),
        }
    }

    pub async fn upload(&self, path: &Path) -> Result<String, UploadError> {
        let size = validation::validate_input_file(path).await?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| UploadError::MissingFileName {
                path: path.to_path_buf(),
            })?;

        let content = tokio::fs::read(path)
            .await
            .map_err(|cause| UploadError::ReadError {
                path: path.to_path_buf(),
                cause,
            })?;
        log::debug!("read {} ({} bytes)", path.display(), size);

        let sanitized = filename::sanitize(&name);
        let folder = folder::classify(&sanitized);
        log::debug!("sanitized {} to {}/{}", name, folder, sanitized);

        let upload_path = unique::resolve_unique_path(&self.repo, folder, &sanitized).await?;

        let response = self
            .repo
            .upsert_file()
            .path(&upload_path)
            .message(commit_message(&name))
            .content(content)
            .execute()
            .await
            .map_err(|cause| UploadError::WriteError {
                path: upload_path.clone(),
                cause,
            })?;
        match response {
            Some(response) => log::info!(
                "uploaded {} (sha {})",
                response.content.path,
                response.content.sha
            ),
            None => log::info!("uploaded {}", upload_path),
        }

        let url = markdown::raw_url(
            self.repo.owner(),
            self.repo.name(),
            &self.branch,
            &upload_path,
        )
        .map_err(|cause| UploadError::LinkError {
            path: upload_path.clone(),
            cause,
        })?;

        Ok(markdown::format_output(&name, url.as_str()))
    }
}

fn commit_message(name: &str) -> String {
    format!("Upload {} via GitUp", name)
}
