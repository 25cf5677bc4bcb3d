//! Document domain model

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An uploaded PDF's metadata row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Server-assigned id
    pub id: i32,
    /// Owning user id; always set at creation, the column is nullable only
    /// because the schema keeps NO ACTION on user deletion
    pub user_id: Option<i32>,
    /// Server-generated stored filename, collision resistant
    pub filename: String,
    /// Client-supplied original filename, advisory only
    pub originalname: String,
    /// Client-supplied signature string, stored as opaque metadata
    pub digital_signature: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Document output projection: no timestamps
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    pub filename: String,
    pub originalname: String,
    pub digital_signature: String,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            id: document.id,
            user_id: document.user_id,
            filename: document.filename,
            originalname: document.originalname,
            digital_signature: document.digital_signature,
        }
    }
}

impl From<&Document> for DocumentResponse {
    fn from(document: &Document) -> Self {
        document.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_field_names() {
        let document = Document {
            id: 4,
            user_id: Some(2),
            filename: "3f2b.pdf".to_string(),
            originalname: "contract.pdf".to_string(),
            digital_signature: "sig".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(DocumentResponse::from(document)).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["digitalSignature"], "sig");
        assert_eq!(object["originalname"], "contract.pdf");
        assert!(!object.contains_key("createdAt"));
        assert!(!object.contains_key("updatedAt"));
    }
}
