//! Category routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use curio_core::CategoryId;

use crate::app::dto::{
    CategoriesEnvelope, CategoryDeletedResponse, CategoryEnvelope, CreateCategoryRequest,
    RenameCategoryRequest,
};
use crate::app::errors;
use crate::app::extract::SessionActor;
use crate::app::AppState;

pub async fn list_json(State(state): State<AppState>) -> Response {
    match state.service.categories().await {
        Ok(categories) => Json(CategoriesEnvelope { categories }).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn one_json(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
) -> Response {
    match state.service.category(category_id).await {
        Ok(category) => Json(CategoryEnvelope { category }).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn create(
    State(state): State<AppState>,
    SessionActor(actor): SessionActor,
    Json(req): Json<CreateCategoryRequest>,
) -> Response {
    let created = match state.service.create_category(&actor, &req.name).await {
        Ok(category) => category,
        Err(err) => return errors::mutation_error(&actor, err),
    };
    match state.service.category(created.id).await {
        Ok(category) => (StatusCode::CREATED, Json(CategoryEnvelope { category })).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn rename(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
    SessionActor(actor): SessionActor,
    Json(req): Json<RenameCategoryRequest>,
) -> Response {
    let renamed = match state
        .service
        .rename_category(&actor, category_id, &req.name)
        .await
    {
        Ok(category) => category,
        Err(err) => return errors::mutation_error(&actor, err),
    };
    match state.service.category(renamed.id).await {
        Ok(category) => Json(CategoryEnvelope { category }).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
    SessionActor(actor): SessionActor,
) -> Response {
    match state.service.delete_category(&actor, category_id).await {
        Ok(items_removed) => Json(CategoryDeletedResponse {
            deleted: true,
            items_removed,
        })
        .into_response(),
        Err(err) => errors::mutation_error(&actor, err),
    }
}
