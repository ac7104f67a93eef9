use chrono::Utc;
use uuid::Uuid;

use campus_domain::grading::validate_grade;
use campus_domain::pagination::PageRequest;

use crate::domain::policy::{Action, authorize};
use crate::domain::repository::{
    AssignmentRepository, CourseRepository, EnrollmentRepository, SubmissionRepository,
};
use crate::domain::types::{Actor, Submission};
use crate::error::ClassroomServiceError;

// ── SubmitAssignment ─────────────────────────────────────────────────────────

pub struct SubmitAssignmentInput {
    pub content: String,
    pub file_path: Option<String>,
}

pub struct SubmitAssignmentUseCase<
    A: AssignmentRepository,
    E: EnrollmentRepository,
    S: SubmissionRepository,
> {
    pub assignments: A,
    pub enrollments: E,
    pub submissions: S,
}

impl<A: AssignmentRepository, E: EnrollmentRepository, S: SubmissionRepository>
    SubmitAssignmentUseCase<A, E, S>
{
    /// Requires enrollment in the assignment's course; one submission per
    /// student per assignment. The new submission starts ungraded. The
    /// duplicate pre-check races a concurrent submit benignly — the store's
    /// unique index decides the loser.
    pub async fn execute(
        &self,
        actor: &Actor,
        assignment_id: Uuid,
        input: SubmitAssignmentInput,
    ) -> Result<Submission, ClassroomServiceError> {
        let assignment = self
            .assignments
            .find_by_id(assignment_id)
            .await?
            .ok_or(ClassroomServiceError::AssignmentNotFound)?;
        let enrolled = self
            .enrollments
            .find_by_student_and_course(actor.id, assignment.course_id)
            .await?
            .is_some();
        authorize(actor, Action::Submit { enrolled })?;
        if self
            .submissions
            .find_by_assignment_and_student(assignment_id, actor.id)
            .await?
            .is_some()
        {
            return Err(ClassroomServiceError::AlreadySubmitted);
        }
        let submission = Submission {
            id: Uuid::now_v7(),
            assignment_id,
            student_id: actor.id,
            file_path: input.file_path,
            content: input.content,
            grade: None,
            feedback: None,
            submitted_at: Utc::now(),
            graded_at: None,
        };
        self.submissions.create(&submission).await?;
        Ok(submission)
    }
}

// ── GradeSubmission ──────────────────────────────────────────────────────────

pub struct GradeSubmissionInput {
    pub grade: f32,
    pub feedback: Option<String>,
}

pub struct GradeSubmissionUseCase<
    S: SubmissionRepository,
    A: AssignmentRepository,
    C: CourseRepository,
> {
    pub submissions: S,
    pub assignments: A,
    pub courses: C,
}

impl<S: SubmissionRepository, A: AssignmentRepository, C: CourseRepository>
    GradeSubmissionUseCase<S, A, C>
{
    /// Owner-only. Sets grade, feedback, and graded_at together so the graded
    /// state is never half-applied. Re-grading is allowed and refreshes
    /// graded_at.
    pub async fn execute(
        &self,
        actor: &Actor,
        submission_id: Uuid,
        input: GradeSubmissionInput,
    ) -> Result<(), ClassroomServiceError> {
        let submission = self
            .submissions
            .find_by_id(submission_id)
            .await?
            .ok_or(ClassroomServiceError::SubmissionNotFound)?;
        let assignment = self
            .assignments
            .find_by_id(submission.assignment_id)
            .await?
            .ok_or(ClassroomServiceError::AssignmentNotFound)?;
        let course = self
            .courses
            .find_by_id(assignment.course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::GradeSubmission { course: &course })?;
        if !validate_grade(input.grade) {
            return Err(ClassroomServiceError::InvalidGrade);
        }
        self.submissions
            .set_grade(
                submission_id,
                input.grade,
                input.feedback.as_deref(),
                Utc::now(),
            )
            .await
    }
}

// ── ListSubmissions ──────────────────────────────────────────────────────────

pub struct ListSubmissionsUseCase<
    S: SubmissionRepository,
    A: AssignmentRepository,
    C: CourseRepository,
> {
    pub submissions: S,
    pub assignments: A,
    pub courses: C,
}

impl<S: SubmissionRepository, A: AssignmentRepository, C: CourseRepository>
    ListSubmissionsUseCase<S, A, C>
{
    /// Owner-only: submissions carry grades and feedback for the whole class.
    pub async fn execute(
        &self,
        actor: &Actor,
        assignment_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Submission>, ClassroomServiceError> {
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
        self.submissions.list_by_assignment(assignment_id, page).await
    }
}
