use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_core::identity::IdentityHeaders;
use campus_domain::role::Role;

use crate::domain::types::Course;
use crate::error::ClassroomServiceError;
use crate::handlers::{actor, page_from_query};
use crate::state::AppState;
use crate::usecase::course::{
    CreateCourseInput, CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase,
    ListCoursesUseCase, ListEnrolledCoursesUseCase, ListInstructorCoursesUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor_id: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.to_string(),
            title: course.title,
            description: course.description,
            instructor_id: course.instructor_id.to_string(),
            created_at: course.created_at,
        }
    }
}

// ── POST /courses ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

pub async fn create_course(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ClassroomServiceError> {
    let usecase = CreateCourseUseCase {
        courses: state.course_repo(),
    };
    let course = usecase
        .execute(
            &actor(identity),
            CreateCourseInput {
                title: body.title,
                description: body.description,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

// ── GET /courses ─────────────────────────────────────────────────────────────

pub async fn get_courses(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<CourseResponse>>, ClassroomServiceError> {
    let page = page_from_query(raw_query.as_deref())?;
    let usecase = ListCoursesUseCase {
        courses: state.course_repo(),
    };
    let courses = usecase.execute(page).await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

// ── GET /courses/{id} ────────────────────────────────────────────────────────

pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<CourseResponse>, ClassroomServiceError> {
    let usecase = GetCourseUseCase {
        courses: state.course_repo(),
    };
    let course = usecase.execute(course_id).await?;
    Ok(Json(course.into()))
}

// ── GET /users/@me/courses ───────────────────────────────────────────────────

/// Instructors see the courses they teach; students the courses they are
/// enrolled in.
pub async fn get_my_courses(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<CourseResponse>>, ClassroomServiceError> {
    let page = page_from_query(raw_query.as_deref())?;
    let courses = match identity.role {
        Role::Instructor => {
            let usecase = ListInstructorCoursesUseCase {
                courses: state.course_repo(),
            };
            usecase.execute(identity.user_id).await?
        }
        Role::Student => {
            let usecase = ListEnrolledCoursesUseCase {
                courses: state.course_repo(),
            };
            usecase.execute(identity.user_id, page).await?
        }
    };
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

// ── DELETE /courses/{id} ─────────────────────────────────────────────────────

pub async fn delete_course(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<StatusCode, ClassroomServiceError> {
    let usecase = DeleteCourseUseCase {
        courses: state.course_repo(),
    };
    usecase.execute(&actor(identity), course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
