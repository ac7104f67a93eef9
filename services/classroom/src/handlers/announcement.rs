use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_core::identity::IdentityHeaders;

use crate::domain::types::Announcement;
use crate::error::ClassroomServiceError;
use crate::handlers::{actor, page_from_query};
use crate::state::AppState;
use crate::usecase::announcement::{
    DeleteAnnouncementUseCase, GetAnnouncementUseCase, ListAnnouncementsUseCase,
    PostAnnouncementInput, PostAnnouncementUseCase, UpdateAnnouncementUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AnnouncementResponse {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub content: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(announcement: Announcement) -> Self {
        Self {
            id: announcement.id.to_string(),
            course_id: announcement.course_id.to_string(),
            title: announcement.title,
            content: announcement.content,
            created_at: announcement.created_at,
        }
    }
}

// ── POST /courses/{id}/announcements ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct PostAnnouncementRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

pub async fn create_announcement(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(body): Json<PostAnnouncementRequest>,
) -> Result<(StatusCode, Json<AnnouncementResponse>), ClassroomServiceError> {
    let usecase = PostAnnouncementUseCase {
        courses: state.course_repo(),
        announcements: state.announcement_repo(),
    };
    let announcement = usecase
        .execute(
            &actor(identity),
            course_id,
            PostAnnouncementInput {
                title: body.title,
                content: body.content,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(announcement.into())))
}

// ── GET /courses/{id}/announcements ──────────────────────────────────────────

pub async fn get_announcements(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<AnnouncementResponse>>, ClassroomServiceError> {
    let page = page_from_query(raw_query.as_deref())?;
    let usecase = ListAnnouncementsUseCase {
        announcements: state.announcement_repo(),
    };
    let announcements = usecase.execute(course_id, page).await?;
    Ok(Json(
        announcements
            .into_iter()
            .map(AnnouncementResponse::from)
            .collect(),
    ))
}

// ── GET /announcements/{id} ──────────────────────────────────────────────────

pub async fn get_announcement(
    State(state): State<AppState>,
    Path(announcement_id): Path<Uuid>,
) -> Result<Json<AnnouncementResponse>, ClassroomServiceError> {
    let usecase = GetAnnouncementUseCase {
        announcements: state.announcement_repo(),
    };
    let announcement = usecase.execute(announcement_id).await?;
    Ok(Json(announcement.into()))
}

// ── PUT /announcements/{id} ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAnnouncementRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

pub async fn update_announcement(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(announcement_id): Path<Uuid>,
    Json(body): Json<UpdateAnnouncementRequest>,
) -> Result<StatusCode, ClassroomServiceError> {
    let usecase = UpdateAnnouncementUseCase {
        courses: state.course_repo(),
        announcements: state.announcement_repo(),
    };
    usecase
        .execute(&actor(identity), announcement_id, body.title, body.content)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /announcements/{id} ───────────────────────────────────────────────

pub async fn delete_announcement(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(announcement_id): Path<Uuid>,
) -> Result<StatusCode, ClassroomServiceError> {
    let usecase = DeleteAnnouncementUseCase {
        courses: state.course_repo(),
        announcements: state.announcement_repo(),
    };
    usecase.execute(&actor(identity), announcement_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
