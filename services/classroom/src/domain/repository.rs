#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use campus_domain::pagination::PageRequest;

use crate::domain::lifecycle::{CascadePlan, CourseDependents};
use crate::domain::types::{
    Announcement, Assignment, AssignmentSortBy, Course, Enrollment, FileType, Material, Submission,
    User,
};
use crate::error::ClassroomServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ClassroomServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ClassroomServiceError>;

    /// Insert a new user. A duplicate email surfaces as `EmailAlreadyExists`.
    async fn create(&self, user: &User) -> Result<(), ClassroomServiceError>;

    /// Update the profile name. Role and email are immutable after creation.
    async fn update_full_name(
        &self,
        id: Uuid,
        full_name: &str,
    ) -> Result<(), ClassroomServiceError>;
}

/// Repository for courses, including the transactional cascade delete.
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, ClassroomServiceError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<Course>, ClassroomServiceError>;
    async fn list_by_instructor(
        &self,
        instructor_id: Uuid,
    ) -> Result<Vec<Course>, ClassroomServiceError>;
    async fn list_enrolled(
        &self,
        student_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Course>, ClassroomServiceError>;
    async fn create(&self, course: &Course) -> Result<(), ClassroomServiceError>;

    /// Snapshot the ids of every row that depends on the course, for cascade
    /// planning.
    async fn dependents(
        &self,
        course_id: Uuid,
    ) -> Result<CourseDependents, ClassroomServiceError>;

    /// Execute a cascade plan in a single transaction: all dependent rows and
    /// the course itself are removed atomically, leaf-first.
    async fn delete_cascade(&self, plan: &CascadePlan) -> Result<(), ClassroomServiceError>;
}

/// Repository for enrollments.
pub trait EnrollmentRepository: Send + Sync {
    async fn find_by_student_and_course(
        &self,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Enrollment>, ClassroomServiceError>;

    /// Insert a new enrollment. A `(student_id, course_id)` duplicate — even
    /// one racing a concurrent insert — surfaces as `AlreadyEnrolled`.
    async fn create(&self, enrollment: &Enrollment) -> Result<(), ClassroomServiceError>;
}

/// Repository for course materials.
pub trait MaterialRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Material>, ClassroomServiceError>;
    async fn list_by_course(
        &self,
        course_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Material>, ClassroomServiceError>;
    async fn create(&self, material: &Material) -> Result<(), ClassroomServiceError>;

    /// Update the title, and the file path/type when a new file was uploaded.
    async fn update(
        &self,
        id: Uuid,
        title: &str,
        file: Option<(&str, FileType)>,
    ) -> Result<(), ClassroomServiceError>;

    /// Delete a material. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ClassroomServiceError>;
}

/// Repository for course announcements.
pub trait AnnouncementRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>, ClassroomServiceError>;
    async fn list_by_course(
        &self,
        course_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Announcement>, ClassroomServiceError>;
    async fn create(&self, announcement: &Announcement) -> Result<(), ClassroomServiceError>;
    async fn update(
        &self,
        id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<(), ClassroomServiceError>;

    /// Delete an announcement. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ClassroomServiceError>;
}

/// Repository for course assignments.
pub trait AssignmentRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, ClassroomServiceError>;
    async fn list_by_course(
        &self,
        course_id: Uuid,
        sort_by: AssignmentSortBy,
        page: PageRequest,
    ) -> Result<Vec<Assignment>, ClassroomServiceError>;
    async fn create(&self, assignment: &Assignment) -> Result<(), ClassroomServiceError>;

    /// Update title, description, and due date; `instruction_file` only when
    /// a new file was uploaded.
    async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
        due_date: Option<DateTime<Utc>>,
        instruction_file: Option<&str>,
    ) -> Result<(), ClassroomServiceError>;

    /// Delete an assignment (its submissions fall with it). Returns `true`
    /// if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ClassroomServiceError>;
}

/// Repository for assignment submissions.
pub trait SubmissionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, ClassroomServiceError>;
    async fn find_by_assignment_and_student(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<Submission>, ClassroomServiceError>;
    async fn list_by_assignment(
        &self,
        assignment_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Submission>, ClassroomServiceError>;

    /// Insert a new submission. An `(assignment_id, student_id)` duplicate —
    /// even one racing a concurrent insert — surfaces as `AlreadySubmitted`.
    async fn create(&self, submission: &Submission) -> Result<(), ClassroomServiceError>;

    /// Record a grade: sets grade, feedback, and graded_at together.
    async fn set_grade(
        &self,
        id: Uuid,
        grade: f32,
        feedback: Option<&str>,
        graded_at: DateTime<Utc>,
    ) -> Result<(), ClassroomServiceError>;
}
