use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpsertFileRequest {
    pub message: String,
    pub content: String,
}

impl UpsertFileRequest {
    pub fn new(message: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_only_message_and_content() -> anyhow::Result<()> {
        let request = UpsertFileRequest::new("Upload a.txt via GitUp", "aGVsbG8=");

        let body = serde_json::to_value(&request)?;

        assert_eq!(
            body,
            serde_json::json!({
                "message": "Upload a.txt via GitUp",
                "content": "aGVsbG8=",
            })
        );

        Ok(())
    }
}
