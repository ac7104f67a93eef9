use chrono::{DateTime, Utc};
use uuid::Uuid;

use campus_domain::pagination::Sort;
use campus_domain::role::Role;

/// The authenticated caller of a domain operation.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

/// Account record (instructor or student).
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Course owned by one instructor.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub instructor_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A student's registration in a course.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
}

/// Kind of a course material file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Video,
    Other,
}

impl FileType {
    /// Classify by the file name's extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Self::Pdf,
            "mp4" | "avi" | "mov" | "wmv" => Self::Video,
            _ => Self::Other,
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pdf" => Some(Self::Pdf),
            "video" => Some(Self::Video),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Video => "video",
            Self::Other => "other",
        }
    }
}

/// Material posted under a course.
#[derive(Debug, Clone)]
pub struct Material {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub file_path: String,
    pub file_type: FileType,
    pub uploaded_at: DateTime<Utc>,
}

/// Announcement posted under a course.
#[derive(Debug, Clone)]
pub struct Announcement {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Assignment posted under a course.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub instruction_file: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A student's deliverable for an assignment.
///
/// Ungraded: `grade` and `graded_at` both `None`. Graded: both set.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: Uuid,
    pub file_path: Option<String>,
    pub content: String,
    pub grade: Option<f32>,
    pub feedback: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub graded_at: Option<DateTime<Utc>>,
}

/// Sort options for assignment list queries.
#[derive(Debug, Clone, Copy)]
pub enum AssignmentSortBy {
    DueDate(Sort),
    CreatedAt(Sort),
}

impl Default for AssignmentSortBy {
    fn default() -> Self {
        Self::DueDate(Sort::Asc)
    }
}

impl AssignmentSortBy {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "due-date-asc" => Some(Self::DueDate(Sort::Asc)),
            "due-date-desc" => Some(Self::DueDate(Sort::Desc)),
            "created-at-asc" => Some(Self::CreatedAt(Sort::Asc)),
            "created-at-desc" => Some(Self::CreatedAt(Sort::Desc)),
            _ => None,
        }
    }
}

/// Minimal email shape check: one `@` with non-empty local and domain parts.
pub fn validate_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && domain.contains('.')
        }
        None => false,
    }
}
