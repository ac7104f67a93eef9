use chrono::Utc;
use uuid::Uuid;

use crate::domain::policy::{Action, authorize};
use crate::domain::repository::{CourseRepository, EnrollmentRepository};
use crate::domain::types::{Actor, Enrollment};
use crate::error::ClassroomServiceError;

// ── EnrollStudent ────────────────────────────────────────────────────────────

pub struct EnrollStudentUseCase<C: CourseRepository, E: EnrollmentRepository> {
    pub courses: C,
    pub enrollments: E,
}

impl<C: CourseRepository, E: EnrollmentRepository> EnrollStudentUseCase<C, E> {
    /// Students enroll themselves; enrolling twice in the same course fails
    /// with `AlreadyEnrolled`. The pre-check below races a concurrent enroll
    /// benignly — the store's unique index decides the loser.
    pub async fn execute(
        &self,
        actor: &Actor,
        course_id: Uuid,
    ) -> Result<Enrollment, ClassroomServiceError> {
        authorize(
            actor,
            Action::Enroll {
                student_id: actor.id,
            },
        )?;
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(ClassroomServiceError::CourseNotFound);
        }
        if self
            .enrollments
            .find_by_student_and_course(actor.id, course_id)
            .await?
            .is_some()
        {
            return Err(ClassroomServiceError::AlreadyEnrolled);
        }
        let enrollment = Enrollment {
            id: Uuid::now_v7(),
            student_id: actor.id,
            course_id,
            enrolled_at: Utc::now(),
        };
        self.enrollments.create(&enrollment).await?;
        Ok(enrollment)
    }
}
