use axum::Json;
use axum::extract::{Path, Query};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::models::{ClockTime, DayOfWeek, LessonOccupancy, Room, RoomSummary, TimeSlot};
use crate::services::schedule_views::{
    DayEntry, DaySchedule, ListingView, NextView, NowView, ScheduleGrid,
};
use crate::state::AppState;

#[derive(Deserialize)]
struct ListingParams {
    day: Option<u8>,
    time: Option<String>,
    building: Option<String>,
}

#[derive(Deserialize)]
struct BuildingParams {
    building: Option<String>,
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Deserialize)]
struct FreeParams {
    day: u8,
    time: String,
}

#[derive(Serialize)]
struct FreeResponse {
    room_id: u32,
    day: DayOfWeek,
    time: ClockTime,
    free: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rooms", get(list_free_rooms))
        .route("/rooms/buildings", get(list_buildings))
        .route("/rooms/slots", get(list_slots))
        .route("/rooms/days", get(list_days))
        .route("/rooms/search", get(search_rooms))
        .route("/rooms/api/search", get(search_rooms_compact))
        .route("/rooms/current", get(current_free_rooms))
        .route("/rooms/next", get(next_slot_free_rooms))
        .route("/rooms/{id}", get(get_room))
        .route("/rooms/{id}/schedule", get(room_schedule_grid))
        .route("/rooms/{id}/lessons", get(room_lessons))
        .route("/rooms/{id}/days", get(room_schedule_by_day))
        .route("/rooms/{id}/free", get(room_is_free))
        .with_state(state)
}

fn parse_day(id: u8) -> Result<DayOfWeek, AppError> {
    DayOfWeek::from_id(id)
        .ok_or_else(|| AppError::BadRequest(format!("day must be between 1 and 7, got {}", id)))
}

fn parse_time(raw: &str) -> Result<ClockTime, AppError> {
    raw.parse::<ClockTime>()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

fn building_filter(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|b| !b.is_empty())
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_free_rooms(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ListingView>, AppError> {
    let day = params.day.map(parse_day).transpose()?;
    let time = params.time.as_deref().map(parse_time).transpose()?;
    let listing = state
        .views
        .listing(day, time, building_filter(&params.building));
    info!(
        "GET /rooms day={} time={} -> {} free",
        listing.day.id(),
        listing.time,
        listing.rooms.len()
    );
    Ok(Json(listing))
}

async fn list_buildings(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.views.buildings())
}

async fn list_slots(State(state): State<AppState>) -> Json<Vec<TimeSlot>> {
    Json(state.views.time_slots().to_vec())
}

async fn list_days(State(state): State<AppState>) -> Json<Vec<DayEntry>> {
    Json(state.views.days())
}

async fn search_rooms(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Room>> {
    Json(state.views.search(&params.q))
}

async fn search_rooms_compact(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<RoomSummary>> {
    Json(state.views.search_compact(&params.q))
}

async fn current_free_rooms(
    State(state): State<AppState>,
    Query(params): Query<BuildingParams>,
) -> Json<NowView> {
    Json(state.views.now(building_filter(&params.building)))
}

async fn next_slot_free_rooms(
    State(state): State<AppState>,
    Query(params): Query<BuildingParams>,
) -> Json<NextView> {
    Json(state.views.next(building_filter(&params.building)))
}

async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Room>, AppError> {
    let room = state.views.room(id).ok_or(AppError::NotFound)?;
    Ok(Json(room))
}

async fn room_schedule_grid(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ScheduleGrid>, AppError> {
    let grid = state.views.schedule_grid(id).ok_or(AppError::NotFound)?;
    Ok(Json(grid))
}

async fn room_lessons(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<LessonOccupancy>>, AppError> {
    let lessons = state.views.lessons_for_room(id).ok_or(AppError::NotFound)?;
    Ok(Json(lessons))
}

async fn room_schedule_by_day(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<DaySchedule>>, AppError> {
    let days = state.views.schedule_by_day(id).ok_or(AppError::NotFound)?;
    Ok(Json(days))
}

async fn room_is_free(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(params): Query<FreeParams>,
) -> Result<Json<FreeResponse>, AppError> {
    state.views.room(id).ok_or(AppError::NotFound)?;
    let day = parse_day(params.day)?;
    let time = parse_time(&params.time)?;
    let free = state.views.service().is_room_free(id, day, time);
    Ok(Json(FreeResponse {
        room_id: id,
        day,
        time,
        free,
    }))
}
