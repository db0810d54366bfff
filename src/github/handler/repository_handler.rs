use super::builder::upsert_file_builder::UpsertFileBuilder;
use crate::{github::github_client::GithubClient, http::Error};

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.repo
    }

    pub async fn exists(&self, path: &str) -> Result<bool, Error> {
        self.client.path_exists(&self.owner, &self.repo, path).await
    }

    pub fn upsert_file(&self) -> UpsertFileBuilder<'a> {
        UpsertFileBuilder::new(self.client, &self.owner, &self.repo)
    }
}
