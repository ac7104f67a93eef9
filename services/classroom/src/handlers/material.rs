use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_core::identity::IdentityHeaders;

use crate::domain::types::Material;
use crate::error::ClassroomServiceError;
use crate::handlers::{actor, page_from_query};
use crate::state::AppState;
use crate::usecase::material::{
    DeleteMaterialUseCase, GetMaterialUseCase, ListMaterialsUseCase, PostMaterialInput,
    PostMaterialUseCase, UpdateMaterialInput, UpdateMaterialUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MaterialResponse {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub file_path: String,
    pub file_type: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

impl From<Material> for MaterialResponse {
    fn from(material: Material) -> Self {
        Self {
            id: material.id.to_string(),
            course_id: material.course_id.to_string(),
            title: material.title,
            file_path: material.file_path,
            file_type: material.file_type.as_str().to_owned(),
            uploaded_at: material.uploaded_at,
        }
    }
}

// ── POST /courses/{id}/materials ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PostMaterialRequest {
    pub title: String,
    /// Path the upload layer stored the file under.
    pub file_path: String,
}

pub async fn create_material(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(body): Json<PostMaterialRequest>,
) -> Result<(StatusCode, Json<MaterialResponse>), ClassroomServiceError> {
    let usecase = PostMaterialUseCase {
        courses: state.course_repo(),
        materials: state.material_repo(),
    };
    let material = usecase
        .execute(
            &actor(identity),
            course_id,
            PostMaterialInput {
                title: body.title,
                file_path: body.file_path,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(material.into())))
}

// ── GET /courses/{id}/materials ──────────────────────────────────────────────

pub async fn get_materials(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<MaterialResponse>>, ClassroomServiceError> {
    let page = page_from_query(raw_query.as_deref())?;
    let usecase = ListMaterialsUseCase {
        materials: state.material_repo(),
    };
    let materials = usecase.execute(course_id, page).await?;
    Ok(Json(
        materials.into_iter().map(MaterialResponse::from).collect(),
    ))
}

// ── GET /materials/{id} ──────────────────────────────────────────────────────

pub async fn get_material(
    State(state): State<AppState>,
    Path(material_id): Path<Uuid>,
) -> Result<Json<MaterialResponse>, ClassroomServiceError> {
    let usecase = GetMaterialUseCase {
        materials: state.material_repo(),
    };
    let material = usecase.execute(material_id).await?;
    Ok(Json(material.into()))
}

// ── PUT /materials/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMaterialRequest {
    pub title: String,
    /// New stored file path, when the file was replaced.
    pub file_path: Option<String>,
}

pub async fn update_material(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(material_id): Path<Uuid>,
    Json(body): Json<UpdateMaterialRequest>,
) -> Result<StatusCode, ClassroomServiceError> {
    let usecase = UpdateMaterialUseCase {
        courses: state.course_repo(),
        materials: state.material_repo(),
    };
    usecase
        .execute(
            &actor(identity),
            material_id,
            UpdateMaterialInput {
                title: body.title,
                file_path: body.file_path,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /materials/{id} ───────────────────────────────────────────────────

pub async fn delete_material(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(material_id): Path<Uuid>,
) -> Result<StatusCode, ClassroomServiceError> {
    let usecase = DeleteMaterialUseCase {
        courses: state.course_repo(),
        materials: state.material_repo(),
    };
    usecase.execute(&actor(identity), material_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
