//! Repository catalog routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use gitshelf::Repository;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    AppState,
    error::{ApiError, Result},
    models::RepositoryPayload,
};

/// Identifier guard: reject malformed identifiers before touching the
/// catalog.
fn parse_record_id(id: &str) -> Result<Uuid> {
    gitshelf::validate::parse_record_id(id).ok_or(ApiError::InvalidId)
}

/// Create repository routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/repositories",
            get(list_repositories).post(create_repository),
        )
        .route(
            "/repositories/{id}",
            put(update_repository).delete(delete_repository),
        )
        .route("/repositories/{id}/like", post(like_repository))
}

/// List all cataloged repositories in insertion order
async fn list_repositories(State(state): State<AppState>) -> Result<Json<Vec<Repository>>> {
    debug!("Listing repositories");

    let records = state.catalog.list()?;

    Ok(Json(records))
}

/// Create a new repository record
async fn create_repository(
    State(state): State<AppState>,
    Json(payload): Json<RepositoryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate_fields()?;
    let draft = payload.into_draft()?;

    info!("Creating repository: {}", draft.title);

    let record = state.catalog.create(draft)?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace title, url and techs of an existing record
async fn update_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RepositoryPayload>,
) -> Result<Json<Repository>> {
    let id = parse_record_id(&id)?;

    // Resolve the identifier before validating field content, so an unknown
    // id is reported ahead of a bad payload. The mutation itself re-checks
    // existence under the catalog lock.
    if !state.catalog.contains(&id)? {
        return Err(ApiError::NotFound);
    }

    payload.validate_fields()?;
    let draft = payload.into_draft()?;

    info!("Updating repository {id}");

    let record = state.catalog.update(&id, draft)?;

    Ok(Json(record))
}

/// Delete a repository record
async fn delete_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_record_id(&id)?;

    info!("Deleting repository {id}");

    state.catalog.remove(&id)?;

    Ok((StatusCode::NO_CONTENT, ()))
}

/// Increment a record's like counter
async fn like_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Repository>> {
    let id = parse_record_id(&id)?;

    debug!("Liking repository {id}");

    let record = state.catalog.like(&id)?;

    Ok(Json(record))
}
