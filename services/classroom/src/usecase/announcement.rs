use chrono::Utc;
use uuid::Uuid;

use campus_domain::pagination::PageRequest;

use crate::domain::policy::{Action, authorize};
use crate::domain::repository::{AnnouncementRepository, CourseRepository};
use crate::domain::types::{Actor, Announcement};
use crate::error::ClassroomServiceError;

// ── PostAnnouncement ─────────────────────────────────────────────────────────

pub struct PostAnnouncementInput {
    pub title: String,
    pub content: String,
}

pub struct PostAnnouncementUseCase<C: CourseRepository, A: AnnouncementRepository> {
    pub courses: C,
    pub announcements: A,
}

impl<C: CourseRepository, A: AnnouncementRepository> PostAnnouncementUseCase<C, A> {
    pub async fn execute(
        &self,
        actor: &Actor,
        course_id: Uuid,
        input: PostAnnouncementInput,
    ) -> Result<Announcement, ClassroomServiceError> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::ManageCourse { course: &course })?;
        if input.title.is_empty() {
            return Err(ClassroomServiceError::MissingData);
        }
        let announcement = Announcement {
            id: Uuid::now_v7(),
            course_id,
            title: input.title,
            content: input.content,
            created_at: Utc::now(),
        };
        self.announcements.create(&announcement).await?;
        Ok(announcement)
    }
}

// ── GetAnnouncement ──────────────────────────────────────────────────────────

pub struct GetAnnouncementUseCase<A: AnnouncementRepository> {
    pub announcements: A,
}

impl<A: AnnouncementRepository> GetAnnouncementUseCase<A> {
    pub async fn execute(
        &self,
        announcement_id: Uuid,
    ) -> Result<Announcement, ClassroomServiceError> {
        self.announcements
            .find_by_id(announcement_id)
            .await?
            .ok_or(ClassroomServiceError::AnnouncementNotFound)
    }
}

// ── ListAnnouncements ────────────────────────────────────────────────────────

pub struct ListAnnouncementsUseCase<A: AnnouncementRepository> {
    pub announcements: A,
}

impl<A: AnnouncementRepository> ListAnnouncementsUseCase<A> {
    pub async fn execute(
        &self,
        course_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Announcement>, ClassroomServiceError> {
        self.announcements.list_by_course(course_id, page).await
    }
}

// ── UpdateAnnouncement ───────────────────────────────────────────────────────

pub struct UpdateAnnouncementUseCase<C: CourseRepository, A: AnnouncementRepository> {
    pub courses: C,
    pub announcements: A,
}

impl<C: CourseRepository, A: AnnouncementRepository> UpdateAnnouncementUseCase<C, A> {
    pub async fn execute(
        &self,
        actor: &Actor,
        announcement_id: Uuid,
        title: String,
        content: String,
    ) -> Result<(), ClassroomServiceError> {
        let announcement = self
            .announcements
            .find_by_id(announcement_id)
            .await?
            .ok_or(ClassroomServiceError::AnnouncementNotFound)?;
        let course = self
            .courses
            .find_by_id(announcement.course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::ManageCourse { course: &course })?;
        if title.is_empty() {
            return Err(ClassroomServiceError::MissingData);
        }
        self.announcements
            .update(announcement_id, &title, &content)
            .await
    }
}

// ── DeleteAnnouncement ───────────────────────────────────────────────────────

pub struct DeleteAnnouncementUseCase<C: CourseRepository, A: AnnouncementRepository> {
    pub courses: C,
    pub announcements: A,
}

impl<C: CourseRepository, A: AnnouncementRepository> DeleteAnnouncementUseCase<C, A> {
    pub async fn execute(
        &self,
        actor: &Actor,
        announcement_id: Uuid,
    ) -> Result<(), ClassroomServiceError> {
        let announcement = self
            .announcements
            .find_by_id(announcement_id)
            .await?
            .ok_or(ClassroomServiceError::AnnouncementNotFound)?;
        let course = self
            .courses
            .find_by_id(announcement.course_id)
            .await?
            .ok_or(ClassroomServiceError::CourseNotFound)?;
        authorize(actor, Action::ManageCourse { course: &course })?;
        let deleted = self.announcements.delete(announcement_id).await?;
        if !deleted {
            return Err(ClassroomServiceError::AnnouncementNotFound);
        }
        Ok(())
    }
}
