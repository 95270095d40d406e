//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{AddBookOutcome, Book, BookQuery, BookSummary, CreateBook},
};

/// List books, optionally by subject and availability
#[utoipa::path(
    get,
    path = "/books",
    tag = "catalog",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<BookSummary>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<BookSummary>>> {
    let books = state.services.catalog.list_books(&query).await?;
    Ok(Json(books))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "catalog",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Add a book, or correct the number of copies owned
#[utoipa::path(
    post,
    path = "/books",
    tag = "catalog",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = AddBookOutcome),
        (status = 200, description = "Holdings corrected", body = AddBookOutcome),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Book already added with that count"),
        (status = 422, description = "Unknown subject")
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<AddBookOutcome>)> {
    request.validate()?;

    let outcome = state.services.inventory.add_book(&request).await?;

    let status = match outcome {
        AddBookOutcome::Created { .. } => StatusCode::CREATED,
        AddBookOutcome::Updated { .. } => StatusCode::OK,
    };
    Ok((status, Json(outcome)))
}
