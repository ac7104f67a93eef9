//! Sea-orm entities for the classroom service schema.

pub mod announcements;
pub mod assignments;
pub mod courses;
pub mod enrollments;
pub mod materials;
pub mod submissions;
pub mod users;
