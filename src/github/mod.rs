pub mod github_client;
mod handler;
mod headers;

pub use github_client::GithubClient;
pub use handler::{repository_handler::RepositoryHandler, BuilderExecutor};
