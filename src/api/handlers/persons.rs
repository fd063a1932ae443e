//! Person request handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::api::dto::{PersonResponse, RegisterPersonRequest};
use crate::api::middleware::handle_json_rejection;
use crate::error::AppError;
use crate::state::AppState;

/// Creates person-related routes.
///
/// Routes:
/// - GET /        - List all persons
/// - POST /       - Register a person
/// - GET /{id}    - Get person by ID
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_persons).post(create_person))
        .route("/{id}", get(get_person))
}

/// GET /api/v1 - List all persons
async fn list_persons(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, AppError> {
    let persons = state.services.persons.get_all().await?;
    Ok(Json(persons.into_iter().map(PersonResponse::from).collect()))
}

/// GET /api/v1/{id} - Get person by ID
///
/// An id that is not a UUID is a bad request, an unknown one is 404.
async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PersonResponse>, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|e| AppError::bad_request(format!("invalid person id '{id}': {e}")))?;
    let person = state.services.persons.get_by_id(id).await?;
    Ok(Json(PersonResponse::from(person)))
}

/// POST /api/v1 - Register a person
///
/// Returns 201 Created with the new id as a JSON string.
async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<RegisterPersonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Uuid>), AppError> {
    let Json(payload) = payload.map_err(handle_json_rejection)?;
    let id = state
        .services
        .persons
        .create(payload.into_register_person())
        .await?;
    Ok((StatusCode::CREATED, Json(id)))
}
