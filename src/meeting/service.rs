use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    generators::CodeGenerator,
    models::{MeetingModel, NewMeeting},
    repository::MeetingRepository,
    types::CreateMeetingRequest,
};
use crate::shared::AppError;

/// Service for handling meeting registry business logic
pub struct MeetingService {
    repository: Arc<dyn MeetingRepository + Send + Sync>,
    code_generator: Arc<dyn CodeGenerator>,
}

impl MeetingService {
    pub fn new(
        repository: Arc<dyn MeetingRepository + Send + Sync>,
        code_generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        Self {
            repository,
            code_generator,
        }
    }

    /// Registers a meeting under a freshly generated code
    ///
    /// A code collision is retried exactly once with a new candidate. If the
    /// second candidate collides as well, the failure surfaces as a database
    /// error. Uniqueness is enforced by the store alone; no lock is held
    /// between generating a code and inserting it.
    #[instrument(skip(self, request))]
    pub async fn create_meeting(
        &self,
        request: CreateMeetingRequest,
    ) -> Result<MeetingModel, AppError> {
        let title = request.title.unwrap_or_default();
        if title.is_empty() {
            return Err(AppError::ValidationError(
                "Meeting title is required".to_string(),
            ));
        }

        let meeting = NewMeeting::new(
            self.code_generator.generate(),
            &title,
            request.start.as_deref().unwrap_or_default(),
            request.end.as_deref().unwrap_or_default(),
        );
        debug!(code = %meeting.code, "Generated meeting code");

        let created = match self.repository.insert_meeting(&meeting).await {
            Err(AppError::DuplicateCode(code)) => {
                let retry = meeting.with_code(self.code_generator.generate());
                warn!(
                    collided = %code,
                    retry_code = %retry.code,
                    "Meeting code collision, retrying once"
                );

                match self.repository.insert_meeting(&retry).await {
                    Err(AppError::DuplicateCode(code)) => {
                        warn!(collided = %code, "Meeting code collided again, giving up");
                        return Err(AppError::DatabaseError(format!(
                            "meeting code {} already exists after retry",
                            code
                        )));
                    }
                    other => other?,
                }
            }
            other => other?,
        };

        info!(
            id = created.id,
            code = %created.code,
            title = %created.title,
            "Meeting created successfully"
        );

        Ok(created)
    }
}
