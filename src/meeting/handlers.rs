use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::MeetingService,
    types::{CreateMeetingRequest, CreateMeetingResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for creating a new meeting
///
/// POST /create_meeting
/// Returns the generated meeting code
#[instrument(name = "create_meeting", skip(state, payload))]
pub async fn create_meeting(
    State(state): State<AppState>,
    payload: Result<Json<CreateMeetingRequest>, JsonRejection>,
) -> Result<Json<CreateMeetingResponse>, AppError> {
    let Json(request) = payload?;

    let service = MeetingService::new(
        Arc::clone(&state.meeting_repository),
        Arc::clone(&state.code_generator),
    );
    let meeting = service.create_meeting(request).await?;

    info!(code = %meeting.code, "Meeting registered");

    Ok(Json(CreateMeetingResponse::success(meeting.code)))
}
