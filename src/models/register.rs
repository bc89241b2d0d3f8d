use serde::{Deserialize, Serialize};

/// Body of `POST /admin/register`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub contact_no: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub access_token: String,
}

/// Error payload returned by the backend on a rejected request.
///
/// `message` is either a string or a list of validation messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: serde_json::Value,
}

impl ErrorBody {
    /// Message text for display, `None` when the payload carries no text
    pub fn text(&self) -> Option<String> {
        let text = match &self.message {
            serde_json::Value::String(message) => message.trim().to_string(),
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            _ => String::new(),
        };

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
