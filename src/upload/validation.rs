use std::{io, path::Path};
use thiserror::Error;

pub const MAX_UPLOAD_SIZE_BYTES: u64 = 25 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Could not access file")]
    AccessError {
        #[source]
        cause: io::Error,
    },
    #[error("Expected a file but found a directory")]
    IsDirectory,
    #[error("File is empty")]
    Empty,
    #[error("File exceeds maximum upload size of {max} bytes ({size} bytes)")]
    TooLarge { size: u64, max: u64 },
}

pub async fn validate_input_file(path: &Path) -> Result<u64, ValidationError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|cause| ValidationError::AccessError { cause })?;

    if metadata.is_dir() {
        return Err(ValidationError::IsDirectory);
    }

    let size = metadata.len();

    if size == 0 {
        return Err(ValidationError::Empty);
    }

    if size > MAX_UPLOAD_SIZE_BYTES {
        return Err(ValidationError::TooLarge {
            size,
            max: MAX_UPLOAD_SIZE_BYTES,
        });
    }

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempdir::TempDir;

    #[tokio::test]
    async fn should_accept_regular_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("validation")?;
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello")?;

        let size = validate_input_file(&path).await?;

        assert_eq!(size, 5);

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_reject_missing_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("validation")?;

        let result = validate_input_file(&dir.path().join("missing.txt")).await;

        assert!(matches!(result, Err(ValidationError::AccessError { .. })));

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_reject_directory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("validation")?;

        let result = validate_input_file(dir.path()).await;

        assert!(matches!(result, Err(ValidationError::IsDirectory)));

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_reject_empty_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("validation")?;
        let path = dir.path().join("empty.txt");
        File::create(&path)?;

        let result = validate_input_file(&path).await;

        assert!(matches!(result, Err(ValidationError::Empty)));

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_accept_file_at_the_limit() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("validation")?;
        let path = dir.path().join("limit.bin");
        File::create(&path)?.set_len(MAX_UPLOAD_SIZE_BYTES)?;

        let size = validate_input_file(&path).await?;

        assert_eq!(size, MAX_UPLOAD_SIZE_BYTES);

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_reject_oversized_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("validation")?;
        let path = dir.path().join("huge.bin");
        File::create(&path)?.set_len(MAX_UPLOAD_SIZE_BYTES + 1)?;

        let result = validate_input_file(&path).await;

        assert!(matches!(
            result,
            Err(ValidationError::TooLarge { size, .. }) if size == MAX_UPLOAD_SIZE_BYTES + 1
        ));

        dir.close()?;
        Ok(())
    }
}
