//! Borrowing endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::borrowing::{BorrowRequest, BorrowingRecordDetails},
    AppState,
};

/// List all borrowing records
#[utoipa::path(
    get,
    path = "/borrowing-records",
    tag = "loans",
    responses(
        (status = 200, description = "All borrowing records", body = Vec<BorrowingRecordDetails>)
    )
)]
pub async fn list_records(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BorrowingRecordDetails>>> {
    let records = state.services.loans.list().await?;
    Ok(Json(records))
}

/// Get a borrowing record by ID
#[utoipa::path(
    get,
    path = "/borrowing-records/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Borrowing record ID")),
    responses(
        (status = 200, description = "Borrowing record", body = BorrowingRecordDetails),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BorrowingRecordDetails>> {
    let record = state.services.loans.get_by_id(id).await?;
    Ok(Json(record))
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/borrow",
    tag = "loans",
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Book borrowed", body = BorrowingRecordDetails),
        (status = 400, description = "Book or member id missing", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or member not found", body = crate::error::ErrorResponse),
        (status = 409, description = "No copy available", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<(StatusCode, Json<BorrowingRecordDetails>)> {
    let record = state.services.loans.borrow(request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Return a borrowed book. Returning twice changes nothing.
#[utoipa::path(
    put,
    path = "/return/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Borrowing record ID")),
    responses(
        (status = 200, description = "Book returned", body = BorrowingRecordDetails),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BorrowingRecordDetails>> {
    let record = state.services.loans.return_book(id).await?;
    Ok(Json(record))
}
