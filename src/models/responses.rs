use crate::error::Result;
use serde::Serialize;

/// One JSON-lines record written by the CLI per argument
#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResponse {
    /// Build a record from a conversion outcome
    pub fn from_result(input: &str, result: &Result<String>) -> Self {
        match result {
            Ok(words) => Self {
                input: input.to_string(),
                words: Some(words.clone()),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                words: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumberError;

    #[test]
    fn test_success_serialization() {
        let response = ConversionResponse::from_result("13", &Ok("Thirteen".to_string()));

        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, r#"{"input":"13","words":"Thirteen"}"#);
        assert!(!response.is_error());
    }

    #[test]
    fn test_error_serialization() {
        let response = ConversionResponse::from_result("30a", &Err(NumberError::invalid("30a")));

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"input\":\"30a\""));
        assert!(json.contains("\"error\":\"Cannot parse 30a, invalid number\""));
        assert!(!json.contains("words")); // Should be omitted when None
        assert!(response.is_error());
    }
}
