use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use fitcoach_service::{
	AddNoteRequest, AddNoteResponse, AskRequest, AskResponse, DeleteNotesRequest,
	DeleteNotesResponse, ListNotesRequest, ListNotesResponse, ProfileResponse, ServiceError,
	UpdateProfileRequest,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/profile", get(get_profile).put(update_profile))
		.route("/v1/notes/add", post(add_note))
		.route("/v1/notes/list", get(list_notes))
		.route("/v1/notes/delete", post(delete_notes))
		.route("/v1/ask", post(ask))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn get_profile(State(state): State<AppState>) -> Result<Json<ProfileResponse>, ApiError> {
	let response = state.service.get_profile()?;

	Ok(Json(response))
}

async fn update_profile(
	State(state): State<AppState>,
	Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
	let response = state.service.update_profile(payload)?;

	Ok(Json(response))
}

async fn add_note(
	State(state): State<AppState>,
	Json(payload): Json<AddNoteRequest>,
) -> Result<Json<AddNoteResponse>, ApiError> {
	let response = state.service.add_note(payload).await?;

	Ok(Json(response))
}

async fn list_notes(
	State(state): State<AppState>,
	Query(payload): Query<ListNotesRequest>,
) -> Result<Json<ListNotesResponse>, ApiError> {
	let response = state.service.list_notes(payload).await?;

	Ok(Json(response))
}

async fn delete_notes(
	State(state): State<AppState>,
	Json(payload): Json<DeleteNotesRequest>,
) -> Result<Json<DeleteNotesResponse>, ApiError> {
	let response = state.service.delete_notes(payload).await?;

	Ok(Json(response))
}

async fn ask(
	State(state): State<AppState>,
	Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
	let response = state.service.ask(payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: &'static str,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let (status, error_code) = match &err {
			ServiceError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "invalid_request"),
			ServiceError::Provider { .. } => (StatusCode::BAD_GATEWAY, "provider_error"),
			ServiceError::Storage { .. } => (StatusCode::BAD_GATEWAY, "storage_error"),
		};

		Self { status, error_code, message: err.to_string() }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code.to_string(), message: self.message };

		(self.status, Json(body)).into_response()
	}
}
