use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Classroom service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ClassroomServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("course not found")]
    CourseNotFound,
    #[error("enrollment not found")]
    EnrollmentNotFound,
    #[error("material not found")]
    MaterialNotFound,
    #[error("announcement not found")]
    AnnouncementNotFound,
    #[error("assignment not found")]
    AssignmentNotFound,
    #[error("submission not found")]
    SubmissionNotFound,
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("already enrolled")]
    AlreadyEnrolled,
    #[error("already submitted")]
    AlreadySubmitted,
    #[error("invalid role")]
    InvalidRole,
    #[error("invalid grade")]
    InvalidGrade,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("missing data")]
    MissingData,
    #[error("constraint violation")]
    ConstraintViolation,
    #[error("unauthorized")]
    Unauthorized,
    #[error("not the course owner")]
    NotOwner,
    #[error("not enrolled in course")]
    NotEnrolled,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ClassroomServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::EnrollmentNotFound => "ENROLLMENT_NOT_FOUND",
            Self::MaterialNotFound => "MATERIAL_NOT_FOUND",
            Self::AnnouncementNotFound => "ANNOUNCEMENT_NOT_FOUND",
            Self::AssignmentNotFound => "ASSIGNMENT_NOT_FOUND",
            Self::SubmissionNotFound => "SUBMISSION_NOT_FOUND",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyEnrolled => "ALREADY_ENROLLED",
            Self::AlreadySubmitted => "ALREADY_SUBMITTED",
            Self::InvalidRole => "INVALID_ROLE",
            Self::InvalidGrade => "INVALID_GRADE",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingData => "MISSING_DATA",
            Self::ConstraintViolation => "CONSTRAINT_VIOLATION",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotOwner => "NOT_OWNER",
            Self::NotEnrolled => "NOT_ENROLLED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ClassroomServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::CourseNotFound
            | Self::EnrollmentNotFound
            | Self::MaterialNotFound
            | Self::AnnouncementNotFound
            | Self::AssignmentNotFound
            | Self::SubmissionNotFound => StatusCode::NOT_FOUND,
            Self::EmailAlreadyExists
            | Self::AlreadyEnrolled
            | Self::AlreadySubmitted
            | Self::ConstraintViolation => StatusCode::CONFLICT,
            Self::InvalidRole | Self::InvalidGrade | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotOwner | Self::NotEnrolled => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — the TraceLayer already records method/uri/status for
        // all requests, and 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
