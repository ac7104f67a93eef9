pub mod lifecycle;
pub mod policy;
pub mod repository;
pub mod types;
