use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_core::identity::IdentityHeaders;

use crate::domain::types::Submission;
use crate::error::ClassroomServiceError;
use crate::handlers::{actor, page_from_query};
use crate::state::AppState;
use crate::usecase::submission::{
    GradeSubmissionInput, GradeSubmissionUseCase, ListSubmissionsUseCase, SubmitAssignmentInput,
    SubmitAssignmentUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    pub file_path: Option<String>,
    pub content: String,
    pub grade: Option<f32>,
    pub feedback: Option<String>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "campus_core::serde::opt_to_rfc3339_ms")]
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id.to_string(),
            assignment_id: submission.assignment_id.to_string(),
            student_id: submission.student_id.to_string(),
            file_path: submission.file_path,
            content: submission.content,
            grade: submission.grade,
            feedback: submission.feedback,
            submitted_at: submission.submitted_at,
            graded_at: submission.graded_at,
        }
    }
}

// ── POST /assignments/{id}/submissions ───────────────────────────────────────

#[derive(Deserialize)]
pub struct SubmitAssignmentRequest {
    #[serde(default)]
    pub content: String,
    /// Path the upload layer stored the submission file under, if any.
    pub file_path: Option<String>,
}

pub async fn submit_assignment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(assignment_id): Path<Uuid>,
    Json(body): Json<SubmitAssignmentRequest>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ClassroomServiceError> {
    let usecase = SubmitAssignmentUseCase {
        assignments: state.assignment_repo(),
        enrollments: state.enrollment_repo(),
        submissions: state.submission_repo(),
    };
    let submission = usecase
        .execute(
            &actor(identity),
            assignment_id,
            SubmitAssignmentInput {
                content: body.content,
                file_path: body.file_path,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(submission.into())))
}

// ── GET /assignments/{id}/submissions ────────────────────────────────────────

pub async fn get_submissions(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(assignment_id): Path<Uuid>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<SubmissionResponse>>, ClassroomServiceError> {
    let page = page_from_query(raw_query.as_deref())?;
    let usecase = ListSubmissionsUseCase {
        submissions: state.submission_repo(),
        assignments: state.assignment_repo(),
        courses: state.course_repo(),
    };
    let submissions = usecase
        .execute(&actor(identity), assignment_id, page)
        .await?;
    Ok(Json(
        submissions
            .into_iter()
            .map(SubmissionResponse::from)
            .collect(),
    ))
}

// ── POST /submissions/{id}/grade ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GradeSubmissionRequest {
    pub grade: f32,
    pub feedback: Option<String>,
}

pub async fn grade_submission(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(submission_id): Path<Uuid>,
    Json(body): Json<GradeSubmissionRequest>,
) -> Result<StatusCode, ClassroomServiceError> {
    let usecase = GradeSubmissionUseCase {
        submissions: state.submission_repo(),
        assignments: state.assignment_repo(),
        courses: state.course_repo(),
    };
    usecase
        .execute(
            &actor(identity),
            submission_id,
            GradeSubmissionInput {
                grade: body.grade,
                feedback: body.feedback,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
