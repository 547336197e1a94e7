use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::User;

/// Public profile returned to the client; never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// PATCH /users body; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_is_camel_case_without_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "vlad@gmail.com".into(),
            password_hash: "$argon2id$secret".into(),
            first_name: Some("Vladimir".into()),
            last_name: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(json.contains("\"firstName\":\"Vladimir\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn edit_request_with_partial_fields() {
        let req: EditUserRequest =
            serde_json::from_str(r#"{"firstName":"Vladimir","email":"jamesdevnow@gmail.com"}"#)
                .unwrap();
        assert_eq!(req.first_name.as_deref(), Some("Vladimir"));
        assert_eq!(req.email.as_deref(), Some("jamesdevnow@gmail.com"));
        assert!(req.last_name.is_none());
    }
}
