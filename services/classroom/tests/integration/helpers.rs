use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use campus_domain::pagination::PageRequest;
use campus_domain::role::Role;

use campus_classroom::domain::lifecycle::{CascadePlan, CascadeTable, CourseDependents};
use campus_classroom::domain::repository::{
    AnnouncementRepository, AssignmentRepository, CourseRepository, EnrollmentRepository,
    MaterialRepository, SubmissionRepository, UserRepository,
};
use campus_classroom::domain::types::{
    Actor, Announcement, Assignment, AssignmentSortBy, Course, Enrollment, FileType, Material,
    Submission, User,
};
use campus_classroom::error::ClassroomServiceError;
use campus_classroom::usecase::user::hash_password;

// ── In-memory store ──────────────────────────────────────────────────────────

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    materials: Vec<Material>,
    announcements: Vec<Announcement>,
    assignments: Vec<Assignment>,
    submissions: Vec<Submission>,
}

/// Shared in-memory store implementing every repository trait, with the same
/// uniqueness semantics the real store's indexes enforce. Clones share state,
/// so one store can back all the repo fields of a usecase.
#[derive(Clone, Default)]
pub struct MemStore {
    tables: Arc<Mutex<Tables>>,
}

#[allow(dead_code)]
impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user: User) {
        self.tables.lock().unwrap().users.push(user);
    }

    pub fn add_course(&self, course: Course) {
        self.tables.lock().unwrap().courses.push(course);
    }

    pub fn add_enrollment(&self, enrollment: Enrollment) {
        self.tables.lock().unwrap().enrollments.push(enrollment);
    }

    pub fn add_material(&self, material: Material) {
        self.tables.lock().unwrap().materials.push(material);
    }

    pub fn add_announcement(&self, announcement: Announcement) {
        self.tables.lock().unwrap().announcements.push(announcement);
    }

    pub fn add_assignment(&self, assignment: Assignment) {
        self.tables.lock().unwrap().assignments.push(assignment);
    }

    pub fn add_submission(&self, submission: Submission) {
        self.tables.lock().unwrap().submissions.push(submission);
    }

    pub fn course_count(&self) -> usize {
        self.tables.lock().unwrap().courses.len()
    }

    pub fn enrollment_count(&self) -> usize {
        self.tables.lock().unwrap().enrollments.len()
    }

    pub fn material_count(&self) -> usize {
        self.tables.lock().unwrap().materials.len()
    }

    pub fn announcement_count(&self) -> usize {
        self.tables.lock().unwrap().announcements.len()
    }

    pub fn assignment_count(&self) -> usize {
        self.tables.lock().unwrap().assignments.len()
    }

    pub fn submission_count(&self) -> usize {
        self.tables.lock().unwrap().submissions.len()
    }

    pub fn submission(&self, id: Uuid) -> Option<Submission> {
        self.tables
            .lock()
            .unwrap()
            .submissions
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }
}

fn paginate<T>(items: Vec<T>, page: PageRequest) -> Vec<T> {
    let page = page.clamped();
    items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.per_page as usize)
        .collect()
}

// ── Repository implementations ───────────────────────────────────────────────

impl UserRepository for MemStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ClassroomServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ClassroomServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(ClassroomServiceError::EmailAlreadyExists);
        }
        tables.users.push(user.clone());
        Ok(())
    }

    async fn update_full_name(
        &self,
        id: Uuid,
        full_name: &str,
    ) -> Result<(), ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(user) = tables.users.iter_mut().find(|u| u.id == id) {
            user.full_name = full_name.to_owned();
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

impl CourseRepository for MemStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, ClassroomServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .courses
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Course>, ClassroomServiceError> {
        Ok(paginate(
            self.tables.lock().unwrap().courses.clone(),
            page,
        ))
    }

    async fn list_by_instructor(
        &self,
        instructor_id: Uuid,
    ) -> Result<Vec<Course>, ClassroomServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .courses
            .iter()
            .filter(|c| c.instructor_id == instructor_id)
            .cloned()
            .collect())
    }

    async fn list_enrolled(
        &self,
        student_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Course>, ClassroomServiceError> {
        let tables = self.tables.lock().unwrap();
        let enrolled: Vec<Course> = tables
            .courses
            .iter()
            .filter(|c| {
                tables
                    .enrollments
                    .iter()
                    .any(|e| e.student_id == student_id && e.course_id == c.id)
            })
            .cloned()
            .collect();
        Ok(paginate(enrolled, page))
    }

    async fn create(&self, course: &Course) -> Result<(), ClassroomServiceError> {
        self.tables.lock().unwrap().courses.push(course.clone());
        Ok(())
    }

    async fn dependents(
        &self,
        course_id: Uuid,
    ) -> Result<CourseDependents, ClassroomServiceError> {
        let tables = self.tables.lock().unwrap();
        let assignment_ids: Vec<Uuid> = tables
            .assignments
            .iter()
            .filter(|a| a.course_id == course_id)
            .map(|a| a.id)
            .collect();
        Ok(CourseDependents {
            submission_ids: tables
                .submissions
                .iter()
                .filter(|s| assignment_ids.contains(&s.assignment_id))
                .map(|s| s.id)
                .collect(),
            assignment_ids,
            material_ids: tables
                .materials
                .iter()
                .filter(|m| m.course_id == course_id)
                .map(|m| m.id)
                .collect(),
            announcement_ids: tables
                .announcements
                .iter()
                .filter(|a| a.course_id == course_id)
                .map(|a| a.id)
                .collect(),
            enrollment_ids: tables
                .enrollments
                .iter()
                .filter(|e| e.course_id == course_id)
                .map(|e| e.id)
                .collect(),
        })
    }

    async fn delete_cascade(&self, plan: &CascadePlan) -> Result<(), ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        for step in plan.steps() {
            match step.table {
                CascadeTable::Submissions => {
                    tables.submissions.retain(|s| !step.ids.contains(&s.id))
                }
                CascadeTable::Assignments => {
                    tables.assignments.retain(|a| !step.ids.contains(&a.id))
                }
                CascadeTable::Materials => {
                    tables.materials.retain(|m| !step.ids.contains(&m.id))
                }
                CascadeTable::Announcements => {
                    tables.announcements.retain(|a| !step.ids.contains(&a.id))
                }
                CascadeTable::Enrollments => {
                    tables.enrollments.retain(|e| !step.ids.contains(&e.id))
                }
                CascadeTable::Courses => tables.courses.retain(|c| !step.ids.contains(&c.id)),
            }
        }
        Ok(())
    }
}

impl EnrollmentRepository for MemStore {
    async fn find_by_student_and_course(
        &self,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Enrollment>, ClassroomServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .enrollments
            .iter()
            .find(|e| e.student_id == student_id && e.course_id == course_id)
            .cloned())
    }

    async fn create(&self, enrollment: &Enrollment) -> Result<(), ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        // Same semantics as the unique (student_id, course_id) index.
        if tables
            .enrollments
            .iter()
            .any(|e| e.student_id == enrollment.student_id && e.course_id == enrollment.course_id)
        {
            return Err(ClassroomServiceError::AlreadyEnrolled);
        }
        tables.enrollments.push(enrollment.clone());
        Ok(())
    }
}

impl MaterialRepository for MemStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Material>, ClassroomServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .materials
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn list_by_course(
        &self,
        course_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Material>, ClassroomServiceError> {
        let materials: Vec<Material> = self
            .tables
            .lock()
            .unwrap()
            .materials
            .iter()
            .filter(|m| m.course_id == course_id)
            .cloned()
            .collect();
        Ok(paginate(materials, page))
    }

    async fn create(&self, material: &Material) -> Result<(), ClassroomServiceError> {
        self.tables.lock().unwrap().materials.push(material.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        file: Option<(&str, FileType)>,
    ) -> Result<(), ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(material) = tables.materials.iter_mut().find(|m| m.id == id) {
            material.title = title.to_owned();
            if let Some((file_path, file_type)) = file {
                material.file_path = file_path.to_owned();
                material.file_type = file_type;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.materials.len();
        tables.materials.retain(|m| m.id != id);
        Ok(tables.materials.len() < before)
    }
}

impl AnnouncementRepository for MemStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>, ClassroomServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .announcements
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_by_course(
        &self,
        course_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Announcement>, ClassroomServiceError> {
        let announcements: Vec<Announcement> = self
            .tables
            .lock()
            .unwrap()
            .announcements
            .iter()
            .filter(|a| a.course_id == course_id)
            .cloned()
            .collect();
        Ok(paginate(announcements, page))
    }

    async fn create(&self, announcement: &Announcement) -> Result<(), ClassroomServiceError> {
        self.tables
            .lock()
            .unwrap()
            .announcements
            .push(announcement.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<(), ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(announcement) = tables.announcements.iter_mut().find(|a| a.id == id) {
            announcement.title = title.to_owned();
            announcement.content = content.to_owned();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.announcements.len();
        tables.announcements.retain(|a| a.id != id);
        Ok(tables.announcements.len() < before)
    }
}

impl AssignmentRepository for MemStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, ClassroomServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .assignments
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_by_course(
        &self,
        course_id: Uuid,
        _sort_by: AssignmentSortBy,
        page: PageRequest,
    ) -> Result<Vec<Assignment>, ClassroomServiceError> {
        let assignments: Vec<Assignment> = self
            .tables
            .lock()
            .unwrap()
            .assignments
            .iter()
            .filter(|a| a.course_id == course_id)
            .cloned()
            .collect();
        Ok(paginate(assignments, page))
    }

    async fn create(&self, assignment: &Assignment) -> Result<(), ClassroomServiceError> {
        self.tables
            .lock()
            .unwrap()
            .assignments
            .push(assignment.clone());
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
        let mut tables = self.tables.lock().unwrap();
        if let Some(assignment) = tables.assignments.iter_mut().find(|a| a.id == id) {
            assignment.title = title.to_owned();
            assignment.description = description.to_owned();
            assignment.due_date = due_date;
            if let Some(path) = instruction_file {
                assignment.instruction_file = Some(path.to_owned());
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.assignments.len();
        tables.assignments.retain(|a| a.id != id);
        Ok(tables.assignments.len() < before)
    }
}

impl SubmissionRepository for MemStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, ClassroomServiceError> {
        Ok(self.submission(id))
    }

    async fn find_by_assignment_and_student(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<Submission>, ClassroomServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .submissions
            .iter()
            .find(|s| s.assignment_id == assignment_id && s.student_id == student_id)
            .cloned())
    }

    async fn list_by_assignment(
        &self,
        assignment_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Submission>, ClassroomServiceError> {
        let submissions: Vec<Submission> = self
            .tables
            .lock()
            .unwrap()
            .submissions
            .iter()
            .filter(|s| s.assignment_id == assignment_id)
            .cloned()
            .collect();
        Ok(paginate(submissions, page))
    }

    async fn create(&self, submission: &Submission) -> Result<(), ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        // Same semantics as the unique (assignment_id, student_id) index.
        if tables.submissions.iter().any(|s| {
            s.assignment_id == submission.assignment_id && s.student_id == submission.student_id
        }) {
            return Err(ClassroomServiceError::AlreadySubmitted);
        }
        tables.submissions.push(submission.clone());
        Ok(())
    }

    async fn set_grade(
        &self,
        id: Uuid,
        grade: f32,
        feedback: Option<&str>,
        graded_at: DateTime<Utc>,
    ) -> Result<(), ClassroomServiceError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(submission) = tables.submissions.iter_mut().find(|s| s.id == id) {
            submission.grade = Some(grade);
            submission.feedback = feedback.map(str::to_owned);
            submission.graded_at = Some(graded_at);
        }
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

#[allow(dead_code)]
pub fn instructor_actor() -> Actor {
    Actor {
        id: Uuid::now_v7(),
        role: Role::Instructor,
    }
}

#[allow(dead_code)]
pub fn student_actor() -> Actor {
    Actor {
        id: Uuid::now_v7(),
        role: Role::Student,
    }
}

#[allow(dead_code)]
pub fn test_user(actor: Actor, email: &str) -> User {
    let now = Utc::now();
    User {
        id: actor.id,
        email: email.to_owned(),
        password_hash: hash_password("hunter2"),
        full_name: "Test User".to_owned(),
        role: actor.role,
        created_at: now,
        updated_at: now,
    }
}

#[allow(dead_code)]
pub fn test_course(instructor_id: Uuid) -> Course {
    Course {
        id: Uuid::now_v7(),
        title: "Systems Programming".to_owned(),
        description: "Low-level fundamentals".to_owned(),
        instructor_id,
        created_at: Utc::now(),
    }
}

#[allow(dead_code)]
pub fn test_assignment(course_id: Uuid) -> Assignment {
    Assignment {
        id: Uuid::now_v7(),
        course_id,
        title: "Lab 1".to_owned(),
        description: "Implement a shell".to_owned(),
        due_date: None,
        instruction_file: None,
        created_at: Utc::now(),
    }
}

#[allow(dead_code)]
pub fn test_enrollment(student_id: Uuid, course_id: Uuid) -> Enrollment {
    Enrollment {
        id: Uuid::now_v7(),
        student_id,
        course_id,
        enrolled_at: Utc::now(),
    }
}
