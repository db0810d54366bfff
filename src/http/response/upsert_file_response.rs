#[derive(Debug, serde::Deserialize)]
pub struct UpsertFileResponse {
    pub content: CommittedFile,
}

#[derive(Debug, serde::Deserialize)]
pub struct CommittedFile {
    pub path: String,
    pub sha: String,
}
