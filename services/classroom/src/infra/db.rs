//! Sea-orm implementations of the repository ports.
//!
//! Store-level constraint failures are translated to domain errors here;
//! raw `DbErr` never crosses this boundary.

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use campus_domain::pagination::{PageRequest, Sort};
use campus_domain::role::Role;
use campus_classroom_schema::{
    announcements, assignments, courses, enrollments, materials, submissions, users,
};

use crate::domain::lifecycle::{CascadePlan, CascadeTable, CourseDependents};
use crate::domain::repository::{
    AnnouncementRepository, AssignmentRepository, CourseRepository, EnrollmentRepository,
    MaterialRepository, SubmissionRepository, UserRepository,
};
use crate::domain::types::{
    Announcement, Assignment, AssignmentSortBy, Course, Enrollment, FileType, Material,
    Submission, User,
};
use crate::error::ClassroomServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ClassroomServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ClassroomServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &User) -> Result<(), ClassroomServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            full_name: Set(user.full_name.clone()),
            role: Set(user.role.as_str().to_owned()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ClassroomServiceError::EmailAlreadyExists
            }
            _ => anyhow::Error::from(e).context("create user").into(),
        })?;
        Ok(())
    }

    async fn update_full_name(
        &self,
        id: Uuid,
        full_name: &str,
    ) -> Result<(), ClassroomServiceError> {
        users::ActiveModel {
            id: Set(id),
            full_name: Set(full_name.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user full name")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> Result<User, ClassroomServiceError> {
    // A role string outside the closed set means the row was written by
    // something other than this service.
    let role = Role::from_str_opt(&model.role)
        .ok_or_else(|| anyhow::anyhow!("unknown role {:?} for user {}", model.role, model.id))?;
    Ok(User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        full_name: model.full_name,
        role,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Course repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseRepository {
    pub db: DatabaseConnection,
}

impl CourseRepository for DbCourseRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, ClassroomServiceError> {
        let model = courses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find course by id")?;
        Ok(model.map(course_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Course>, ClassroomServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = courses::Entity::find()
            .order_by_desc(courses::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list courses")?;
        Ok(models.into_iter().map(course_from_model).collect())
    }

    async fn list_by_instructor(
        &self,
        instructor_id: Uuid,
    ) -> Result<Vec<Course>, ClassroomServiceError> {
        let models = courses::Entity::find()
            .filter(courses::Column::InstructorId.eq(instructor_id))
            .order_by_desc(courses::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list courses by instructor")?;
        Ok(models.into_iter().map(course_from_model).collect())
    }

    async fn list_enrolled(
        &self,
        student_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Course>, ClassroomServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = courses::Entity::find()
            .join(JoinType::InnerJoin, courses::Relation::Enrollments.def())
            .filter(enrollments::Column::StudentId.eq(student_id))
            .order_by_desc(enrollments::Column::EnrolledAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list enrolled courses")?;
        Ok(models.into_iter().map(course_from_model).collect())
    }

    async fn create(&self, course: &Course) -> Result<(), ClassroomServiceError> {
        courses::ActiveModel {
            id: Set(course.id),
            title: Set(course.title.clone()),
            description: Set(course.description.clone()),
            instructor_id: Set(course.instructor_id),
            created_at: Set(course.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ClassroomServiceError::ConstraintViolation
            }
            _ => anyhow::Error::from(e).context("create course").into(),
        })?;
        Ok(())
    }

    async fn dependents(
        &self,
        course_id: Uuid,
    ) -> Result<CourseDependents, ClassroomServiceError> {
        let assignment_ids: Vec<Uuid> = assignments::Entity::find()
            .filter(assignments::Column::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .context("load course assignments")?
            .into_iter()
            .map(|m| m.id)
            .collect();

        let submission_ids: Vec<Uuid> = if assignment_ids.is_empty() {
            vec![]
        } else {
            submissions::Entity::find()
                .filter(submissions::Column::AssignmentId.is_in(assignment_ids.iter().copied()))
                .all(&self.db)
                .await
                .context("load course submissions")?
                .into_iter()
                .map(|m| m.id)
                .collect()
        };

        let material_ids: Vec<Uuid> = materials::Entity::find()
            .filter(materials::Column::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .context("load course materials")?
            .into_iter()
            .map(|m| m.id)
            .collect();

        let announcement_ids: Vec<Uuid> = announcements::Entity::find()
            .filter(announcements::Column::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .context("load course announcements")?
            .into_iter()
            .map(|m| m.id)
            .collect();

        let enrollment_ids: Vec<Uuid> = enrollments::Entity::find()
            .filter(enrollments::Column::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .context("load course enrollments")?
            .into_iter()
            .map(|m| m.id)
            .collect();

        Ok(CourseDependents {
            submission_ids,
            assignment_ids,
            material_ids,
            announcement_ids,
            enrollment_ids,
        })
    }

    async fn delete_cascade(&self, plan: &CascadePlan) -> Result<(), ClassroomServiceError> {
        let plan = plan.clone();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    for step in plan.steps() {
                        if step.ids.is_empty() {
                            continue;
                        }
                        let ids = step.ids.iter().copied();
                        match step.table {
                            CascadeTable::Submissions => {
                                submissions::Entity::delete_many()
                                    .filter(submissions::Column::Id.is_in(ids))
                                    .exec(txn)
                                    .await?;
                            }
                            CascadeTable::Assignments => {
                                assignments::Entity::delete_many()
                                    .filter(assignments::Column::Id.is_in(ids))
                                    .exec(txn)
                                    .await?;
                            }
                            CascadeTable::Materials => {
                                materials::Entity::delete_many()
                                    .filter(materials::Column::Id.is_in(ids))
                                    .exec(txn)
                                    .await?;
                            }
                            CascadeTable::Announcements => {
                                announcements::Entity::delete_many()
                                    .filter(announcements::Column::Id.is_in(ids))
                                    .exec(txn)
                                    .await?;
                            }
                            CascadeTable::Enrollments => {
                                enrollments::Entity::delete_many()
                                    .filter(enrollments::Column::Id.is_in(ids))
                                    .exec(txn)
                                    .await?;
                            }
                            CascadeTable::Courses => {
                                courses::Entity::delete_many()
                                    .filter(courses::Column::Id.is_in(ids))
                                    .exec(txn)
                                    .await?;
                            }
                        }
                    }
                    Ok(())
                })
            })
            .await
            .context("cascade delete course")?;
        Ok(())
    }
}

fn course_from_model(model: courses::Model) -> Course {
    Course {
        id: model.id,
        title: model.title,
        description: model.description,
        instructor_id: model.instructor_id,
        created_at: model.created_at,
    }
}

// ── Enrollment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEnrollmentRepository {
    pub db: DatabaseConnection,
}

impl EnrollmentRepository for DbEnrollmentRepository {
    async fn find_by_student_and_course(
        &self,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Enrollment>, ClassroomServiceError> {
        let model = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .filter(enrollments::Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .context("find enrollment")?;
        Ok(model.map(enrollment_from_model))
    }

    async fn create(&self, enrollment: &Enrollment) -> Result<(), ClassroomServiceError> {
        enrollments::ActiveModel {
            id: Set(enrollment.id),
            student_id: Set(enrollment.student_id),
            course_id: Set(enrollment.course_id),
            enrolled_at: Set(enrollment.enrolled_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // The losing side of a concurrent double-enroll lands here.
            Some(SqlErr::UniqueConstraintViolation(_)) => ClassroomServiceError::AlreadyEnrolled,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ClassroomServiceError::ConstraintViolation
            }
            _ => anyhow::Error::from(e).context("create enrollment").into(),
        })?;
        Ok(())
    }
}

fn enrollment_from_model(model: enrollments::Model) -> Enrollment {
    Enrollment {
        id: model.id,
        student_id: model.student_id,
        course_id: model.course_id,
        enrolled_at: model.enrolled_at,
    }
}

// ── Material repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMaterialRepository {
    pub db: DatabaseConnection,
}

impl MaterialRepository for DbMaterialRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Material>, ClassroomServiceError> {
        let model = materials::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find material by id")?;
        Ok(model.map(material_from_model))
    }

    async fn list_by_course(
        &self,
        course_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Material>, ClassroomServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = materials::Entity::find()
            .filter(materials::Column::CourseId.eq(course_id))
            .order_by_desc(materials::Column::UploadedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list materials")?;
        Ok(models.into_iter().map(material_from_model).collect())
    }

    async fn create(&self, material: &Material) -> Result<(), ClassroomServiceError> {
        materials::ActiveModel {
            id: Set(material.id),
            course_id: Set(material.course_id),
            title: Set(material.title.clone()),
            file_path: Set(material.file_path.clone()),
            file_type: Set(material.file_type.as_str().to_owned()),
            uploaded_at: Set(material.uploaded_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ClassroomServiceError::ConstraintViolation
            }
            _ => anyhow::Error::from(e).context("create material").into(),
        })?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        file: Option<(&str, FileType)>,
    ) -> Result<(), ClassroomServiceError> {
        let mut am = materials::ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            ..Default::default()
        };
        if let Some((file_path, file_type)) = file {
            am.file_path = Set(file_path.to_owned());
            am.file_type = Set(file_type.as_str().to_owned());
        }
        am.update(&self.db).await.context("update material")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ClassroomServiceError> {
        let result = materials::Entity::delete_many()
            .filter(materials::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete material")?;
        Ok(result.rows_affected > 0)
    }
}

fn material_from_model(model: materials::Model) -> Material {
    Material {
        id: model.id,
        course_id: model.course_id,
        title: model.title,
        file_path: model.file_path,
        // Unknown strings default to Other rather than failing the read.
        file_type: FileType::from_str_opt(&model.file_type).unwrap_or(FileType::Other),
        uploaded_at: model.uploaded_at,
    }
}

// ── Announcement repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAnnouncementRepository {
    pub db: DatabaseConnection,
}

impl AnnouncementRepository for DbAnnouncementRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>, ClassroomServiceError> {
        let model = announcements::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find announcement by id")?;
        Ok(model.map(announcement_from_model))
    }

    async fn list_by_course(
        &self,
        course_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Announcement>, ClassroomServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = announcements::Entity::find()
            .filter(announcements::Column::CourseId.eq(course_id))
            .order_by_desc(announcements::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list announcements")?;
        Ok(models.into_iter().map(announcement_from_model).collect())
    }

    async fn create(&self, announcement: &Announcement) -> Result<(), ClassroomServiceError> {
        announcements::ActiveModel {
            id: Set(announcement.id),
            course_id: Set(announcement.course_id),
            title: Set(announcement.title.clone()),
            content: Set(announcement.content.clone()),
            created_at: Set(announcement.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ClassroomServiceError::ConstraintViolation
            }
            _ => anyhow::Error::from(e).context("create announcement").into(),
        })?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<(), ClassroomServiceError> {
        announcements::ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            content: Set(content.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update announcement")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ClassroomServiceError> {
        let result = announcements::Entity::delete_many()
            .filter(announcements::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete announcement")?;
        Ok(result.rows_affected > 0)
    }
}

fn announcement_from_model(model: announcements::Model) -> Announcement {
    Announcement {
        id: model.id,
        course_id: model.course_id,
        title: model.title,
        content: model.content,
        created_at: model.created_at,
    }
}

// ── Assignment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAssignmentRepository {
    pub db: DatabaseConnection,
}

impl AssignmentRepository for DbAssignmentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, ClassroomServiceError> {
        let model = assignments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find assignment by id")?;
        Ok(model.map(assignment_from_model))
    }

    async fn list_by_course(
        &self,
        course_id: Uuid,
        sort_by: AssignmentSortBy,
        page: PageRequest,
    ) -> Result<Vec<Assignment>, ClassroomServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let mut query =
            assignments::Entity::find().filter(assignments::Column::CourseId.eq(course_id));
        query = match sort_by {
            AssignmentSortBy::DueDate(Sort::Asc) => {
                query.order_by_asc(assignments::Column::DueDate)
            }
            AssignmentSortBy::DueDate(Sort::Desc) => {
                query.order_by_desc(assignments::Column::DueDate)
            }
            AssignmentSortBy::CreatedAt(Sort::Asc) => {
                query.order_by_asc(assignments::Column::CreatedAt)
            }
            AssignmentSortBy::CreatedAt(Sort::Desc) => {
                query.order_by_desc(assignments::Column::CreatedAt)
            }
        };
        let models = query
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list assignments")?;
        Ok(models.into_iter().map(assignment_from_model).collect())
    }

    async fn create(&self, assignment: &Assignment) -> Result<(), ClassroomServiceError> {
        assignments::ActiveModel {
            id: Set(assignment.id),
            course_id: Set(assignment.course_id),
            title: Set(assignment.title.clone()),
            description: Set(assignment.description.clone()),
            due_date: Set(assignment.due_date),
            instruction_file: Set(assignment.instruction_file.clone()),
            created_at: Set(assignment.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ClassroomServiceError::ConstraintViolation
            }
            _ => anyhow::Error::from(e).context("create assignment").into(),
        })?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
        due_date: Option<DateTime<Utc>>,
        instruction_file: Option<&str>,
    ) -> Result<(), ClassroomServiceError> {
        let mut am = assignments::ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            due_date: Set(due_date),
            ..Default::default()
        };
        if let Some(path) = instruction_file {
            am.instruction_file = Set(Some(path.to_owned()));
        }
        am.update(&self.db).await.context("update assignment")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ClassroomServiceError> {
        let result = assignments::Entity::delete_many()
            .filter(assignments::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete assignment")?;
        Ok(result.rows_affected > 0)
    }
}

fn assignment_from_model(model: assignments::Model) -> Assignment {
    Assignment {
        id: model.id,
        course_id: model.course_id,
        title: model.title,
        description: model.description,
        due_date: model.due_date,
        instruction_file: model.instruction_file,
        created_at: model.created_at,
    }
}

// ── Submission repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSubmissionRepository {
    pub db: DatabaseConnection,
}

impl SubmissionRepository for DbSubmissionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, ClassroomServiceError> {
        let model = submissions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find submission by id")?;
        Ok(model.map(submission_from_model))
    }

    async fn find_by_assignment_and_student(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<Submission>, ClassroomServiceError> {
        let model = submissions::Entity::find()
            .filter(submissions::Column::AssignmentId.eq(assignment_id))
            .filter(submissions::Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .context("find submission by assignment and student")?;
        Ok(model.map(submission_from_model))
    }

    async fn list_by_assignment(
        &self,
        assignment_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Submission>, ClassroomServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = submissions::Entity::find()
            .filter(submissions::Column::AssignmentId.eq(assignment_id))
            .order_by_desc(submissions::Column::SubmittedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list submissions")?;
        Ok(models.into_iter().map(submission_from_model).collect())
    }

    async fn create(&self, submission: &Submission) -> Result<(), ClassroomServiceError> {
        submissions::ActiveModel {
            id: Set(submission.id),
            assignment_id: Set(submission.assignment_id),
            student_id: Set(submission.student_id),
            file_path: Set(submission.file_path.clone()),
            content: Set(submission.content.clone()),
            grade: Set(submission.grade),
            feedback: Set(submission.feedback.clone()),
            submitted_at: Set(submission.submitted_at),
            graded_at: Set(submission.graded_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // The losing side of a concurrent double-submit lands here.
            Some(SqlErr::UniqueConstraintViolation(_)) => ClassroomServiceError::AlreadySubmitted,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ClassroomServiceError::ConstraintViolation
            }
            _ => anyhow::Error::from(e).context("create submission").into(),
        })?;
        Ok(())
    }

    async fn set_grade(
        &self,
        id: Uuid,
        grade: f32,
        feedback: Option<&str>,
        graded_at: DateTime<Utc>,
    ) -> Result<(), ClassroomServiceError> {
        submissions::ActiveModel {
            id: Set(id),
            grade: Set(Some(grade)),
            feedback: Set(feedback.map(str::to_owned)),
            graded_at: Set(Some(graded_at)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set submission grade")?;
        Ok(())
    }
}

fn submission_from_model(model: submissions::Model) -> Submission {
    Submission {
        id: model.id,
        assignment_id: model.assignment_id,
        student_id: model.student_id,
        file_path: model.file_path,
        content: model.content,
        grade: model.grade,
        feedback: model.feedback,
        submitted_at: model.submitted_at,
        graded_at: model.graded_at,
    }
}
