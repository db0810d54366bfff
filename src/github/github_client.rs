use super::{handler::repository_handler::RepositoryHandler, headers::Headers};
use crate::http::{
    request::UpsertFileRequest, response::UpsertFileResponse, Client, Error, ResponseHandler,
};
use base64::{prelude::BASE64_STANDARD, Engine};
use reqwest::{StatusCode, Url};

pub const GITHUB_API_URL: &str = "https://api.github.com";

pub struct GithubClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(GITHUB_API_URL, token)
    }

    pub fn with_base_url(base_url: &str, token: impl Into<String>) -> Result<Self, Error> {
        let base_url = Url::parse(base_url).map_err(|_| Error::InvalidBaseUrl {
            url: base_url.to_owned(),
        })?;

        Ok(GithubClient {
            http: Client::new()?,
            base_url,
            token: token.into(),
        })
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    pub(super) fn contents_url(&self, owner: &str, repo: &str, path: &str) -> Result<Url, Error> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(["repos", owner, repo, "contents"])
            .extend(path.split('/'));

        Ok(url)
    }

    pub(super) async fn path_exists(&self, owner: &str, repo: &str, path: &str) -> Result<bool, Error> {
        let url = self.contents_url(owner, repo, path)?;
        log::debug!("checking {}", url);

        let response = self
            .http
            .head(url)
            .github_headers(&self.token)
            .send()
            .await
            .map_err(|cause| Error::TransportError {
                path: path.to_owned(),
                cause,
            })?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::from_status(path, status, body))
            }
        }
    }

    pub(super) async fn upsert_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        message: &str,
        content: &[u8],
    ) -> Result<Option<UpsertFileResponse>, Error> {
        log::debug!("Upserting file {}", path);
        let url = self.contents_url(owner, repo, path)?;

        let request = UpsertFileRequest::new(message, BASE64_STANDARD.encode(content));

        let body = self
            .http
            .put(url)
            .github_headers(&self.token)
            .json(&request)
            .send()
            .await
            .handle(path, StatusCode::CREATED)
            .await?;

        // The file is committed once GitHub answers 201, whatever the body says.
        match serde_json::from_str::<UpsertFileResponse>(&body) {
            Ok(response) => Ok(Some(response)),
            Err(err) => {
                log::debug!("Could not parse upsert response for {}: {}", path, err);
                Ok(None)
            }
        }
    }
}
