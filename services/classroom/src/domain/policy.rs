//! Authorization policy: maps (actor, action) to allow or a typed denial.
//!
//! Pure functions only — callers load the target entities and pass the facts
//! in, so every rule is unit-testable without a store.

use uuid::Uuid;

use campus_domain::role::Role;

use crate::domain::types::{Actor, Course};
use crate::error::ClassroomServiceError;

/// Why an action was denied. Distinguishable by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// Actor's role does not permit the action at all.
    Unauthorized,
    /// Actor is an instructor but does not own the target course.
    NotOwner,
    /// Actor is a student but is not enrolled in the target course.
    NotEnrolled,
}

impl From<Denial> for ClassroomServiceError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Unauthorized => Self::Unauthorized,
            Denial::NotOwner => Self::NotOwner,
            Denial::NotEnrolled => Self::NotEnrolled,
        }
    }
}

/// An action an actor wants to perform, with the facts the rule needs.
#[derive(Debug, Clone, Copy)]
pub enum Action<'a> {
    /// Create a course owned by the actor.
    CreateCourse,
    /// Create, update, or delete a course's materials, announcements, or
    /// assignments; delete the course itself.
    ManageCourse { course: &'a Course },
    /// Grade a submission belonging to the course.
    GradeSubmission { course: &'a Course },
    /// Enroll `student_id` in a course.
    Enroll { student_id: Uuid },
    /// Create or update the actor's own submission; `enrolled` is whether the
    /// actor holds an enrollment in the assignment's course.
    Submit { enrolled: bool },
}

/// Decide whether `actor` may perform `action`.
pub fn authorize(actor: &Actor, action: Action<'_>) -> Result<(), Denial> {
    match action {
        Action::CreateCourse => match actor.role {
            Role::Instructor => Ok(()),
            Role::Student => Err(Denial::Unauthorized),
        },
        Action::ManageCourse { course } | Action::GradeSubmission { course } => {
            match actor.role {
                Role::Instructor if course.instructor_id == actor.id => Ok(()),
                Role::Instructor => Err(Denial::NotOwner),
                Role::Student => Err(Denial::Unauthorized),
            }
        }
        Action::Enroll { student_id } => match actor.role {
            Role::Student if student_id == actor.id => Ok(()),
            Role::Student => Err(Denial::Unauthorized),
            Role::Instructor => Err(Denial::Unauthorized),
        },
        Action::Submit { enrolled } => match actor.role {
            Role::Student if enrolled => Ok(()),
            Role::Student => Err(Denial::NotEnrolled),
            Role::Instructor => Err(Denial::Unauthorized),
        },
    }
}
