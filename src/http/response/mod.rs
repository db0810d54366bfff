mod upsert_file_response;

pub use upsert_file_response::UpsertFileResponse;
