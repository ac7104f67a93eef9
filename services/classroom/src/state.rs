use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAnnouncementRepository, DbAssignmentRepository, DbCourseRepository, DbEnrollmentRepository,
    DbMaterialRepository, DbSubmissionRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn course_repo(&self) -> DbCourseRepository {
        DbCourseRepository {
            db: self.db.clone(),
        }
    }

    pub fn enrollment_repo(&self) -> DbEnrollmentRepository {
        DbEnrollmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn material_repo(&self) -> DbMaterialRepository {
        DbMaterialRepository {
            db: self.db.clone(),
        }
    }

    pub fn announcement_repo(&self) -> DbAnnouncementRepository {
        DbAnnouncementRepository {
            db: self.db.clone(),
        }
    }

    pub fn assignment_repo(&self) -> DbAssignmentRepository {
        DbAssignmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn submission_repo(&self) -> DbSubmissionRepository {
        DbSubmissionRepository {
            db: self.db.clone(),
        }
    }
}
