//! Library member model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Create / full-replace request for a member
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct MemberPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl MemberPayload {
    pub fn into_member(self, id: i64) -> Member {
        Member {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
