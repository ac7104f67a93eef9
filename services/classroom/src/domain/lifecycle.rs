//! Lifecycle rules: cascade deletion planning and grading state transitions.
//!
//! The cascade is computed here as a pure, inspectable plan and executed by
//! the store inside one transaction. The `ON DELETE CASCADE` clauses in the
//! migrations remain only as a storage-level safety net.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use campus_domain::grading::validate_grade;

/// Ids of every row that depends on a course, as loaded from the store.
///
/// `submission_ids` holds the submissions of all the course's assignments.
#[derive(Debug, Clone, Default)]
pub struct CourseDependents {
    pub submission_ids: Vec<Uuid>,
    pub assignment_ids: Vec<Uuid>,
    pub material_ids: Vec<Uuid>,
    pub announcement_ids: Vec<Uuid>,
    pub enrollment_ids: Vec<Uuid>,
}

/// Table a cascade step deletes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeTable {
    Submissions,
    Assignments,
    Materials,
    Announcements,
    Enrollments,
    Courses,
}

/// One deletion step of a cascade plan.
#[derive(Debug, Clone)]
pub struct CascadeStep {
    pub table: CascadeTable,
    pub ids: Vec<Uuid>,
}

/// Ordered deletion plan for removing a course and everything under it.
///
/// Steps are leaf-first: submissions fall before their assignments, and the
/// course row itself is always last, so no step ever orphans a row that a
/// later step still references.
#[derive(Debug, Clone)]
pub struct CascadePlan {
    pub course_id: Uuid,
    steps: Vec<CascadeStep>,
}

impl CascadePlan {
    pub fn steps(&self) -> &[CascadeStep] {
        &self.steps
    }

    /// Total number of rows the plan removes, the course included.
    pub fn row_count(&self) -> usize {
        self.steps.iter().map(|step| step.ids.len()).sum()
    }
}

/// Compute the leaf-first deletion plan for a course.
pub fn plan_course_cascade(course_id: Uuid, dependents: CourseDependents) -> CascadePlan {
    let steps = vec![
        CascadeStep {
            table: CascadeTable::Submissions,
            ids: dependents.submission_ids,
        },
        CascadeStep {
            table: CascadeTable::Assignments,
            ids: dependents.assignment_ids,
        },
        CascadeStep {
            table: CascadeTable::Materials,
            ids: dependents.material_ids,
        },
        CascadeStep {
            table: CascadeTable::Announcements,
            ids: dependents.announcement_ids,
        },
        CascadeStep {
            table: CascadeTable::Enrollments,
            ids: dependents.enrollment_ids,
        },
        CascadeStep {
            table: CascadeTable::Courses,
            ids: vec![course_id],
        },
    ];
    CascadePlan { course_id, steps }
}

/// Check the grading invariant: `graded_at` is set iff `grade` is set, and a
/// set grade is within bounds.
pub fn grading_state_valid(grade: Option<f32>, graded_at: Option<DateTime<Utc>>) -> bool {
    match (grade, graded_at) {
        (None, None) => true,
        (Some(grade), Some(_)) => validate_grade(grade),
        _ => false,
    }
}
