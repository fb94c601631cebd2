//! Item routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use curio_core::{CategoryId, ItemId};

use crate::app::dto::{
    CreateItemRequest, ItemDeletedResponse, ItemEnvelope, ItemsEnvelope, UpdateItemRequest,
};
use crate::app::errors;
use crate::app::extract::SessionActor;
use crate::app::AppState;

pub async fn list_json(State(state): State<AppState>) -> Response {
    match state.service.items().await {
        Ok(items) => Json(ItemsEnvelope { items }).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn one_json(State(state): State<AppState>, Path(item_id): Path<ItemId>) -> Response {
    match state.service.item(item_id).await {
        Ok(item) => Json(ItemEnvelope { item }).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn in_category_json(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
) -> Response {
    match state.service.items_in_category(category_id).await {
        Ok(items) => Json(ItemsEnvelope { items }).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn one_in_category_json(
    State(state): State<AppState>,
    Path((category_id, item_id)): Path<(CategoryId, ItemId)>,
) -> Response {
    match state.service.item_in_category(category_id, item_id).await {
        Ok(item) => Json(ItemEnvelope { item }).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
    SessionActor(actor): SessionActor,
    Json(req): Json<CreateItemRequest>,
) -> Response {
    let created = match state
        .service
        .create_item(&actor, &req.name, req.description.as_deref(), category_id)
        .await
    {
        Ok(item) => item,
        Err(err) => return errors::mutation_error(&actor, err),
    };
    match state.service.item(created.id).await {
        Ok(item) => (StatusCode::CREATED, Json(ItemEnvelope { item })).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
    SessionActor(actor): SessionActor,
    Json(req): Json<UpdateItemRequest>,
) -> Response {
    let updated = match state
        .service
        .update_item(&actor, item_id, &req.name, req.description.as_deref())
        .await
    {
        Ok(item) => item,
        Err(err) => return errors::mutation_error(&actor, err),
    };
    match state.service.item(updated.id).await {
        Ok(item) => Json(ItemEnvelope { item }).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
    SessionActor(actor): SessionActor,
) -> Response {
    match state.service.delete_item(&actor, item_id).await {
        Ok(()) => Json(ItemDeletedResponse { deleted: true }).into_response(),
        Err(err) => errors::mutation_error(&actor, err),
    }
}
