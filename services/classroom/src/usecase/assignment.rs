use chrono::{DateTime, Utc};
use uuid::Uuid;

use campus_domain::pagination::PageRequest;

use crate::domain::policy::{Action, authorize};
use crate::domain::repository::{AssignmentRepository, CourseRepository};
use crate::domain::types::{Actor, Assignment, AssignmentSortBy};
use crate::error::ClassroomServiceError;

// ── PostAssignment ───────────────────────────────────────────────────────────

pub struct PostAssignmentInput {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub instruction_file: Option<String>,
}

pub struct PostAssignmentUseCase<C: CourseRepository, A: AssignmentRepository> {
    pub courses: C,
    pub assignments: A,
}

impl<C: CourseRepository, A: AssignmentRepository> PostAssignmentUseCase<C, A> {
    pub async fn execute(
        &self,
        actor: &Actor,
        course_id: Uuid,
        input: PostAssignmentInput,
    ) -> Result<Assignment, ClassroomServiceError> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::ManageCourse { course: &course })?;
        if input.title.is_empty() {
            return Err(ClassroomServiceError::MissingData);
        }
        let assignment = Assignment {
            id: Uuid::now_v7(),
            course_id,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            instruction_file: input.instruction_file,
            created_at: Utc::now(),
        };
        self.assignments.create(&assignment).await?;
        Ok(assignment)
    }
}

// ── GetAssignment ────────────────────────────────────────────────────────────

pub struct GetAssignmentUseCase<A: AssignmentRepository> {
    pub assignments: A,
}

impl<A: AssignmentRepository> GetAssignmentUseCase<A> {
    pub async fn execute(&self, assignment_id: Uuid) -> Result<Assignment, ClassroomServiceError> {
        self.assignments
            .find_by_id(assignment_id)
            .await?
            .ok_or(ClassroomServiceError::AssignmentNotFound)
    }
}

// ── ListAssignments ──────────────────────────────────────────────────────────

pub struct ListAssignmentsUseCase<A: AssignmentRepository> {
    pub assignments: A,
}

impl<A: AssignmentRepository> ListAssignmentsUseCase<A> {
    pub async fn execute(
        &self,
        course_id: Uuid,
        sort_by: AssignmentSortBy,
        page: PageRequest,
    ) -> Result<Vec<Assignment>, ClassroomServiceError> {
        self.assignments.list_by_course(course_id, sort_by, page).await
    }
}

// ── UpdateAssignment ─────────────────────────────────────────────────────────

pub struct UpdateAssignmentInput {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    /// New stored instruction file path, when the file was replaced.
    pub instruction_file: Option<String>,
}

pub struct UpdateAssignmentUseCase<C: CourseRepository, A: AssignmentRepository> {
    pub courses: C,
    pub assignments: A,
}

impl<C: CourseRepository, A: AssignmentRepository> UpdateAssignmentUseCase<C, A> {
    pub async fn execute(
        &self,
        actor: &Actor,
        assignment_id: Uuid,
        input: UpdateAssignmentInput,
    ) -> Result<(), ClassroomServiceError> {
        let assignment = self
            .assignments
            .find_by_id(assignment_id)
            .await?
            .ok_or(ClassroomServiceError::AssignmentNotFound)?;
        let course = self
            .courses
            .find_by_id(assignment.course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::ManageCourse { course: &course })?;
        if input.title.is_empty() {
            return Err(ClassroomServiceError::MissingData);
        }
        self.assignments
            .update(
                assignment_id,
                &input.title,
                &input.description,
                input.due_date,
                input.instruction_file.as_deref(),
            )
            .await
    }
}

// ── DeleteAssignment ─────────────────────────────────────────────────────────

pub struct DeleteAssignmentUseCase<C: CourseRepository, A: AssignmentRepository> {
    pub courses: C,
    pub assignments: A,
}

impl<C: CourseRepository, A: AssignmentRepository> DeleteAssignmentUseCase<C, A> {
    pub async fn execute(
        &self,
        actor: &Actor,
        assignment_id: Uuid,
    ) -> Result<(), ClassroomServiceError> {
        let assignment = self
            .assignments
            .find_by_id(assignment_id)
            .await?
            .ok_or(ClassroomServiceError::AssignmentNotFound)?;
        let course = self
            .courses
            .find_by_id(assignment.course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::ManageCourse { course: &course })?;
        let deleted = self.assignments.delete(assignment_id).await?;
        if !deleted {
            return Err(ClassroomServiceError::AssignmentNotFound);
        }
        Ok(())
    }
}
