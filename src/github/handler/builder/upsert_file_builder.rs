use super::BuilderExecutor;
use crate::{
    github::github_client::GithubClient,
    http::{response::UpsertFileResponse, Error},
};

pub struct UpsertFileBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    path: String,
    commit_message: String,
    content: Vec<u8>,
}

impl<'a> UpsertFileBuilder<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        UpsertFileBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            path: String::new(),
            commit_message: String::new(),
            content: Vec::new(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    pub fn content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }
}

impl BuilderExecutor for UpsertFileBuilder<'_> {
    type Output = Option<UpsertFileResponse>;

    async fn execute(self) -> Result<Self::Output, Error> {
        self.client
            .upsert_file(
                &self.owner,
                &self.repo,
                &self.path,
                &self.commit_message,
                &self.content,
            )
            .await
    }
}
