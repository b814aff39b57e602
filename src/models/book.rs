//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub total_copies: i32,
    /// Copies currently on the shelf
    pub available_copies: i32,
}

/// Create / full-replace request for a book.
///
/// `id` is optional: when absent on create the store assigns the next one,
/// when present it is kept as-is.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "totalCopies must not be negative"))]
    pub total_copies: i32,
    /// Defaults to `totalCopies` when omitted
    #[validate(range(min = 0, message = "availableCopies must not be negative"))]
    pub available_copies: Option<i32>,
}

impl BookPayload {
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            genre: self.genre,
            total_copies: self.total_copies,
            available_copies: self.available_copies.unwrap_or(self.total_copies),
        }
    }
}
