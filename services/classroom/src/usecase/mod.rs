pub mod announcement;
pub mod assignment;
pub mod course;
pub mod enrollment;
pub mod material;
pub mod submission;
pub mod user;
