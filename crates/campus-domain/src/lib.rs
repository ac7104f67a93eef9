//! Domain types shared across Campus services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod grading;
pub mod pagination;
pub mod role;
