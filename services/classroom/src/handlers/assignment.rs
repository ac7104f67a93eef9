use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_core::identity::IdentityHeaders;
use campus_domain::pagination::PageRequest;

use crate::domain::types::{Assignment, AssignmentSortBy};
use crate::error::ClassroomServiceError;
use crate::handlers::actor;
use crate::state::AppState;
use crate::usecase::assignment::{
    DeleteAssignmentUseCase, GetAssignmentUseCase, ListAssignmentsUseCase, PostAssignmentInput,
    PostAssignmentUseCase, UpdateAssignmentInput, UpdateAssignmentUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AssignmentResponse {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "campus_core::serde::opt_to_rfc3339_ms")]
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub instruction_file: Option<String>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Assignment> for AssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            id: assignment.id.to_string(),
            course_id: assignment.course_id.to_string(),
            title: assignment.title,
            description: assignment.description,
            due_date: assignment.due_date,
            instruction_file: assignment.instruction_file,
            created_at: assignment.created_at,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AssignmentListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub sort_by: Option<String>,
}

// ── POST /courses/{id}/assignments ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct PostAssignmentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Path the upload layer stored the instruction file under, if any.
    pub instruction_file: Option<String>,
}

pub async fn create_assignment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(body): Json<PostAssignmentRequest>,
) -> Result<(StatusCode, Json<AssignmentResponse>), ClassroomServiceError> {
    let usecase = PostAssignmentUseCase {
        courses: state.course_repo(),
        assignments: state.assignment_repo(),
    };
    let assignment = usecase
        .execute(
            &actor(identity),
            course_id,
            PostAssignmentInput {
                title: body.title,
                description: body.description,
                due_date: body.due_date,
                instruction_file: body.instruction_file,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(assignment.into())))
}

// ── GET /courses/{id}/assignments ────────────────────────────────────────────

pub async fn get_assignments(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<AssignmentResponse>>, ClassroomServiceError> {
    let query: AssignmentListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ClassroomServiceError::MissingData)?
        .unwrap_or_default();

    let sort_by = query
        .sort_by
        .as_deref()
        .and_then(AssignmentSortBy::from_kebab_case)
        .unwrap_or_default();
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListAssignmentsUseCase {
        assignments: state.assignment_repo(),
    };
    let assignments = usecase.execute(course_id, sort_by, page).await?;
    Ok(Json(
        assignments
            .into_iter()
            .map(AssignmentResponse::from)
            .collect(),
    ))
}

// ── GET /assignments/{id} ────────────────────────────────────────────────────

pub async fn get_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<Uuid>,
) -> Result<Json<AssignmentResponse>, ClassroomServiceError> {
    let usecase = GetAssignmentUseCase {
        assignments: state.assignment_repo(),
    };
    let assignment = usecase.execute(assignment_id).await?;
    Ok(Json(assignment.into()))
}

// ── PUT /assignments/{id} ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAssignmentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    /// New stored instruction file path, when the file was replaced.
    pub instruction_file: Option<String>,
}

pub async fn update_assignment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(assignment_id): Path<Uuid>,
    Json(body): Json<UpdateAssignmentRequest>,
) -> Result<StatusCode, ClassroomServiceError> {
    let usecase = UpdateAssignmentUseCase {
        courses: state.course_repo(),
        assignments: state.assignment_repo(),
    };
    usecase
        .execute(
            &actor(identity),
            assignment_id,
            UpdateAssignmentInput {
                title: body.title,
                description: body.description,
                due_date: body.due_date,
                instruction_file: body.instruction_file,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /assignments/{id} ─────────────────────────────────────────────────

pub async fn delete_assignment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(assignment_id): Path<Uuid>,
) -> Result<StatusCode, ClassroomServiceError> {
    let usecase = DeleteAssignmentUseCase {
        courses: state.course_repo(),
        assignments: state.assignment_repo(),
    };
    usecase.execute(&actor(identity), assignment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
