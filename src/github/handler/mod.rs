mod builder;
pub mod repository_handler;

pub use builder::BuilderExecutor;
