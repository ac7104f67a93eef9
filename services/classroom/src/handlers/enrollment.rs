use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use uuid::Uuid;

use campus_core::identity::IdentityHeaders;

use crate::domain::types::Enrollment;
use crate::error::ClassroomServiceError;
use crate::handlers::actor;
use crate::state::AppState;
use crate::usecase::enrollment::EnrollStudentUseCase;

#[derive(Serialize)]
pub struct EnrollmentResponse {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id.to_string(),
            student_id: enrollment.student_id.to_string(),
            course_id: enrollment.course_id.to_string(),
            enrolled_at: enrollment.enrolled_at,
        }
    }
}

// ── POST /courses/{id}/enrollments ───────────────────────────────────────────

pub async fn enroll(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), ClassroomServiceError> {
    let usecase = EnrollStudentUseCase {
        courses: state.course_repo(),
        enrollments: state.enrollment_repo(),
    };
    let enrollment = usecase.execute(&actor(identity), course_id).await?;
    Ok((StatusCode::CREATED, Json(enrollment.into())))
}
