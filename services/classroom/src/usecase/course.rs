use chrono::Utc;
use uuid::Uuid;

use campus_domain::pagination::PageRequest;

use crate::domain::lifecycle::plan_course_cascade;
use crate::domain::policy::{Action, authorize};
use crate::domain::repository::CourseRepository;
use crate::domain::types::{Actor, Course};
use crate::error::ClassroomServiceError;

// ── CreateCourse ─────────────────────────────────────────────────────────────

pub struct CreateCourseInput {
    pub title: String,
    pub description: String,
}

pub struct CreateCourseUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> CreateCourseUseCase<C> {
    pub async fn execute(
        &self,
        actor: &Actor,
        input: CreateCourseInput,
    ) -> Result<Course, ClassroomServiceError> {
        authorize(actor, Action::CreateCourse)?;
        if input.title.is_empty() {
            return Err(ClassroomServiceError::MissingData);
        }
        // Ownership is fixed to the actor; there is no way to create a course
        // on another instructor's behalf.
        let course = Course {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            instructor_id: actor.id,
            created_at: Utc::now(),
        };
        self.courses.create(&course).await?;
        Ok(course)
    }
}

// ── GetCourse ────────────────────────────────────────────────────────────────

pub struct GetCourseUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> GetCourseUseCase<C> {
    pub async fn execute(&self, course_id: Uuid) -> Result<Course, ClassroomServiceError> {
        self.courses
            .find_by_id(course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)
    }
}

// ── ListCourses ──────────────────────────────────────────────────────────────

pub struct ListCoursesUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> ListCoursesUseCase<C> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Course>, ClassroomServiceError> {
        self.courses.list(page).await
    }
}

// ── ListInstructorCourses ────────────────────────────────────────────────────

pub struct ListInstructorCoursesUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> ListInstructorCoursesUseCase<C> {
    pub async fn execute(
        &self,
        instructor_id: Uuid,
    ) -> Result<Vec<Course>, ClassroomServiceError> {
        self.courses.list_by_instructor(instructor_id).await
    }
}

// ── ListEnrolledCourses ──────────────────────────────────────────────────────

pub struct ListEnrolledCoursesUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> ListEnrolledCoursesUseCase<C> {
    pub async fn execute(
        &self,
        student_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Course>, ClassroomServiceError> {
        self.courses.list_enrolled(student_id, page).await
    }
}

// ── DeleteCourse ─────────────────────────────────────────────────────────────

pub struct DeleteCourseUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> DeleteCourseUseCase<C> {
    /// Owner-only. Removes the course and every dependent row atomically,
    /// following the leaf-first cascade plan.
    pub async fn execute(&self, actor: &Actor, course_id: Uuid) -> Result<(), ClassroomServiceError> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::ManageCourse { course: &course })?;

        let dependents = self.courses.dependents(course_id).await?;
        let plan = plan_course_cascade(course_id, dependents);
        tracing::info!(
            course_id = %course_id,
            rows = plan.row_count(),
            "deleting course with dependents"
        );
        self.courses.delete_cascade(&plan).await
    }
}
