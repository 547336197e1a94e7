use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::bookmarks::repo_types::Bookmark;

/// POST /bookmarks body.
#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

/// PATCH /bookmarks/:id body; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// Bookmark as returned to its owner.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: Uuid,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(b: Bookmark) -> Self {
        Self {
            id: b.id,
            title: b.title,
            link: b.link,
            description: b.description,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_description_defaults_to_none() {
        let req: CreateBookmarkRequest = serde_json::from_str(
            r#"{"title":"First bookmark","link":"https://youtu.be/GHTA143_b-s"}"#,
        )
        .unwrap();
        assert_eq!(req.title, "First bookmark");
        assert!(req.description.is_none());
    }

    #[test]
    fn edit_request_with_partial_fields() {
        let req: EditBookmarkRequest =
            serde_json::from_str(r#"{"description":"watch later"}"#).unwrap();
        assert!(req.title.is_none());
        assert!(req.link.is_none());
        assert_eq!(req.description.as_deref(), Some("watch later"));
    }

    #[test]
    fn response_does_not_expose_owner_id() {
        let response = BookmarkResponse::from(Bookmark {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "First bookmark".into(),
            link: "https://youtu.be/GHTA143_b-s".into(),
            description: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        });

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("First bookmark"));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("userId"));
        assert!(!json.contains("user_id"));
    }
}
