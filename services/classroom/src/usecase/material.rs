use chrono::Utc;
use uuid::Uuid;

use campus_domain::pagination::PageRequest;

use crate::domain::policy::{Action, authorize};
use crate::domain::repository::{CourseRepository, MaterialRepository};
use crate::domain::types::{Actor, FileType, Material};
use crate::error::ClassroomServiceError;

// ── PostMaterial ─────────────────────────────────────────────────────────────

pub struct PostMaterialInput {
    pub title: String,
    /// Path the upload layer stored the file under; the file type is derived
    /// from its extension.
    pub file_path: String,
}

pub struct PostMaterialUseCase<C: CourseRepository, M: MaterialRepository> {
    pub courses: C,
    pub materials: M,
}

impl<C: CourseRepository, M: MaterialRepository> PostMaterialUseCase<C, M> {
    pub async fn execute(
        &self,
        actor: &Actor,
        course_id: Uuid,
        input: PostMaterialInput,
    ) -> Result<Material, ClassroomServiceError> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::ManageCourse { course: &course })?;
        if input.title.is_empty() || input.file_path.is_empty() {
            return Err(ClassroomServiceError::MissingData);
        }
        let material = Material {
            id: Uuid::now_v7(),
            course_id,
            title: input.title,
            file_type: FileType::from_file_name(&input.file_path),
            file_path: input.file_path,
            uploaded_at: Utc::now(),
        };
        self.materials.create(&material).await?;
        Ok(material)
    }
}

// ── GetMaterial ──────────────────────────────────────────────────────────────

pub struct GetMaterialUseCase<M: MaterialRepository> {
    pub materials: M,
}

impl<M: MaterialRepository> GetMaterialUseCase<M> {
    pub async fn execute(&self, material_id: Uuid) -> Result<Material, ClassroomServiceError> {
        self.materials
            .find_by_id(material_id)
            .await?
            .ok_or(ClassroomServiceError::MaterialNotFound)
    }
}

// ── ListMaterials ────────────────────────────────────────────────────────────

pub struct ListMaterialsUseCase<M: MaterialRepository> {
    pub materials: M,
}

impl<M: MaterialRepository> ListMaterialsUseCase<M> {
    pub async fn execute(
        &self,
        course_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Material>, ClassroomServiceError> {
        self.materials.list_by_course(course_id, page).await
    }
}

// ── UpdateMaterial ───────────────────────────────────────────────────────────

pub struct UpdateMaterialInput {
    pub title: String,
    /// New stored file path, when the file was replaced.
    pub file_path: Option<String>,
}

pub struct UpdateMaterialUseCase<C: CourseRepository, M: MaterialRepository> {
    pub courses: C,
    pub materials: M,
}

impl<C: CourseRepository, M: MaterialRepository> UpdateMaterialUseCase<C, M> {
    pub async fn execute(
        &self,
        actor: &Actor,
        material_id: Uuid,
        input: UpdateMaterialInput,
    ) -> Result<(), ClassroomServiceError> {
        let material = self
            .materials
            .find_by_id(material_id)
            .await?
            .ok_or(ClassroomServiceError::MaterialNotFound)?;
        let course = self
            .courses
            .find_by_id(material.course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::ManageCourse { course: &course })?;
        if input.title.is_empty() {
            return Err(ClassroomServiceError::MissingData);
        }
        let file = input
            .file_path
            .as_deref()
            .map(|path| (path, FileType::from_file_name(path)));
        self.materials.update(material_id, &input.title, file).await
    }
}

// ── DeleteMaterial ───────────────────────────────────────────────────────────

pub struct DeleteMaterialUseCase<C: CourseRepository, M: MaterialRepository> {
    pub courses: C,
    pub materials: M,
}

impl<C: CourseRepository, M: MaterialRepository> DeleteMaterialUseCase<C, M> {
    pub async fn execute(
        &self,
        actor: &Actor,
        material_id: Uuid,
    ) -> Result<(), ClassroomServiceError> {
        let material = self
            .materials
            .find_by_id(material_id)
            .await?
            .ok_or(ClassroomServiceError::MaterialNotFound)?;
        let course = self
            .courses
            .find_by_id(material.course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::ManageCourse { course: &course })?;
        let deleted = self.materials.delete(material_id).await?;
        if !deleted {
            return Err(ClassroomServiceError::MaterialNotFound);
        }
        Ok(())
    }
}
