//! Data models for the library server

pub mod book;
pub mod borrowing;
pub mod member;

// Re-export commonly used types
pub use book::{Book, BookPayload};
pub use borrowing::{BorrowRequest, BorrowingRecord, BorrowingRecordDetails, RecordStatus};
pub use member::{Member, MemberPayload};
