use axum::extract::State;
use axum::response::Response;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::{EventPatch, NewEvent};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

pub async fn list_events(State(state): State<AppState>) -> Response {
    let events = state.store.fetch_events().await;
    success(events, "Events retrieved")
}

pub async fn get_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Response, AppError> {
    let event = state
        .store
        .fetch_event_by_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' not found", id)))?;
    Ok(success(event, "Event retrieved"))
}

pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewEvent>,
) -> Result<Response, AppError> {
    let event = state.store.create_event(payload).await?;
    Ok(created(event, "Event created"))
}

pub async fn update_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(patch): ApiJson<EventPatch>,
) -> Result<Response, AppError> {
    let event = state.store.update_event(&id, patch).await?;
    Ok(success(event, "Event updated"))
}

pub async fn delete_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Response, AppError> {
    state.store.delete_event(&id).await?;
    Ok(success(serde_json::json!({ "id": id }), "Event deleted"))
}

pub async fn search_events(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Response {
    let events = state.store.search_events(&params.q).await;
    success(events, "Search results")
}

pub async fn events_by_category(
    State(state): State<AppState>,
    ApiPath(category): ApiPath<String>,
) -> Response {
    let events = state.store.fetch_events_by_category(&category).await;
    success(events, "Events retrieved")
}

pub async fn events_by_date_range(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RangeParams>,
) -> Response {
    let events = state
        .store
        .fetch_events_by_date_range(params.start, params.end)
        .await;
    success(events, "Events retrieved")
}

pub async fn upcoming_events(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Response {
    let events = state.store.fetch_upcoming_events(params.limit).await;
    success(events, "Upcoming events retrieved")
}

pub async fn past_events(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Response {
    let events = state.store.fetch_past_events(params.limit).await;
    success(events, "Past events retrieved")
}

pub async fn list_categories(State(state): State<AppState>) -> Response {
    let categories = state.store.fetch_categories().await;
    success(categories, "Categories retrieved")
}
