mod upsert_file_request;

pub use upsert_file_request::UpsertFileRequest;
