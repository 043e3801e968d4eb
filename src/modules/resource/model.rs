use edusync_models::ResourceSchema;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a full replace on an existing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    Updated,
    Unchanged,
}

impl UpdateStatus {
    pub fn message(self, label: &str) -> String {
        match self {
            Self::Updated => format!("{label} updated successfully."),
            Self::Unchanged => format!("{label} data is unchanged."),
        }
    }
}

pub fn created_message(schema: &ResourceSchema) -> String {
    format!("{} created successfully.", schema.label)
}

pub fn deleted_message(label: &str) -> String {
    format!("{label} deleted successfully.")
}

pub fn not_found_message(label: &str) -> String {
    format!("{label} not found.")
}
