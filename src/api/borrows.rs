//! Borrow endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::borrow::{Borrow, BorrowQuery, CreateBorrow},
};

/// Borrow response
#[derive(Serialize, ToSchema)]
pub struct BorrowResponse {
    /// Borrow ID
    pub id: i64,
    /// Status message
    pub message: String,
    pub borrow: Borrow,
}

/// Return response with the updated ledger entry
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// Return status
    pub status: String,
    pub borrow: Borrow,
}

/// List the borrow ledger (refreshes overdue flags first)
#[utoipa::path(
    get,
    path = "/borrows",
    tag = "borrows",
    params(BorrowQuery),
    responses(
        (status = 200, description = "Ledger entries", body = Vec<Borrow>)
    )
)]
pub async fn list_borrows(
    State(state): State<crate::AppState>,
    Query(query): Query<BorrowQuery>,
) -> AppResult<Json<Vec<Borrow>>> {
    let borrows = state.services.borrows.list_borrows(&query).await?;
    Ok(Json(borrows))
}

/// Get a ledger entry by ID
#[utoipa::path(
    get,
    path = "/borrows/{id}",
    tag = "borrows",
    params(
        ("id" = i64, Path, description = "Borrow ID")
    ),
    responses(
        (status = 200, description = "Ledger entry", body = Borrow),
        (status = 404, description = "Borrow not found")
    )
)]
pub async fn get_borrow(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Borrow>> {
    let borrow = state.services.borrows.get_borrow(id).await?;
    Ok(Json(borrow))
}

/// Lend a book
#[utoipa::path(
    post,
    path = "/borrows",
    tag = "borrows",
    request_body = CreateBorrow,
    responses(
        (status = 201, description = "Book lent", body = BorrowResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "No book with that title"),
        (status = 409, description = "Out of that book"),
        (status = 422, description = "Borrower must return their last book first")
    )
)]
pub async fn create_borrow(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBorrow>,
) -> AppResult<(StatusCode, Json<BorrowResponse>)> {
    request.validate()?;

    let id = state.services.inventory.borrow_book(&request).await?;
    let borrow = state.services.borrows.get_borrow(id).await?;

    Ok((
        StatusCode::CREATED,
        Json(BorrowResponse {
            id,
            message: "Book borrowed successfully".to_string(),
            borrow,
        }),
    ))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/borrows/{id}/return",
    tag = "borrows",
    params(
        ("id" = i64, Path, description = "Borrow ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 404, description = "Borrow not found"),
        (status = 409, description = "Already returned")
    )
)]
pub async fn return_borrow(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ReturnResponse>> {
    state.services.inventory.return_book(id).await?;
    let borrow = state.services.borrows.get_borrow(id).await?;

    Ok(Json(ReturnResponse {
        status: "returned".to_string(),
        borrow,
    }))
}
