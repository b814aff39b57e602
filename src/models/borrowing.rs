//! Borrowing record model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{book::Book, member::Member};

/// Loan period applied to every borrow
pub const LOAN_DURATION_DAYS: i64 = 14;

/// Lifecycle of a borrowing record. `Active -> Returned` happens at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Returned,
}

/// Borrowing record as kept in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowingRecord {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl BorrowingRecord {
    pub fn status(&self) -> RecordStatus {
        match self.return_date {
            Some(_) => RecordStatus::Returned,
            None => RecordStatus::Active,
        }
    }

    /// Resolve the linked book and member into a response view.
    /// Either side is `None` when it was deleted after the borrow.
    pub fn details(&self, book: Option<Book>, member: Option<Member>) -> BorrowingRecordDetails {
        BorrowingRecordDetails {
            id: self.id,
            book_id: self.book_id,
            member_id: self.member_id,
            book,
            member,
            borrow_date: self.borrow_date,
            due_date: self.due_date,
            return_date: self.return_date,
            status: self.status(),
        }
    }
}

/// Borrowing record with resolved book and member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingRecordDetails {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub book: Option<Book>,
    pub member: Option<Member>,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: RecordStatus,
}

/// Borrow request.
///
/// Accepts either nested references (`{"book": {"id": 1}, "member": {"id": 2}}`)
/// or flat ids (`{"bookId": 1, "memberId": 2}`). Both forms end up as plain ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(from = "BorrowRequestBody", rename_all = "camelCase")]
pub struct BorrowRequest {
    pub book_id: Option<i64>,
    pub member_id: Option<i64>,
}

/// Any object with an `id`; other fields are ignored
#[derive(Debug, Default, Deserialize)]
struct EntityRef {
    id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BorrowRequestBody {
    book: Option<EntityRef>,
    member: Option<EntityRef>,
    book_id: Option<i64>,
    member_id: Option<i64>,
}

impl From<BorrowRequestBody> for BorrowRequest {
    fn from(body: BorrowRequestBody) -> Self {
        // flat ids win over nested ones when both are sent
        Self {
            book_id: body.book_id.or_else(|| body.book.and_then(|b| b.id)),
            member_id: body.member_id.or_else(|| body.member.and_then(|m| m.id)),
        }
    }
}
