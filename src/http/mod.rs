pub mod client;
pub mod request;
pub mod response;

pub use client::Client;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to build the http client")]
    BuildClientError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Invalid API base url: {url}")]
    InvalidBaseUrl { url: String },
    #[error("Request for {path} failed")]
    TransportError {
        path: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("GitHub API auth error while accessing {path}: {status}")]
    AuthError { path: String, status: StatusCode },
    #[error("Unexpected GitHub API response for {path}: {status} - {body}")]
    UnexpectedStatusError {
        path: String,
        status: StatusCode,
        body: String,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
}

impl Error {
    pub fn from_status(path: impl Into<String>, status: StatusCode, body: String) -> Self {
        let path = path.into();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::AuthError { path, status },
            _ => Error::UnexpectedStatusError { path, status, body },
        }
    }
}

pub trait ResponseHandler {
    async fn handle(self, path: &str, expected: StatusCode) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self, path: &str, expected: StatusCode) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::TransportError {
            path: path.to_owned(),
            cause,
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if status != expected {
            return Err(Error::from_status(path, status, body));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_forbidden_to_auth_error() {
        let error = Error::from_status("img/a.png", StatusCode::FORBIDDEN, String::new());

        assert!(matches!(error, Error::AuthError { .. }));
        assert_eq!(
            error.to_string(),
            "GitHub API auth error while accessing img/a.png: 403 Forbidden"
        );
    }

    #[test]
    fn should_keep_body_of_unexpected_status() {
        let error = Error::from_status(
            "img/a.png",
            StatusCode::UNPROCESSABLE_ENTITY,
            "sha missing".to_owned(),
        );

        assert_eq!(
            error.to_string(),
            "Unexpected GitHub API response for img/a.png: 422 Unprocessable Entity - sha missing"
        );
    }

    #[tokio::test]
    async fn should_return_body_on_expected_status() -> anyhow::Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(201)
            .with_body("created")
            .create_async()
            .await;

        let body = reqwest::Client::new()
            .get(server.url())
            .send()
            .await
            .handle("/", StatusCode::CREATED)
            .await?;

        mock.assert_async().await;
        assert_eq!(body, "created");

        Ok(())
    }
}
