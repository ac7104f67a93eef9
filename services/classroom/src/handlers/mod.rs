pub mod announcement;
pub mod assignment;
pub mod course;
pub mod enrollment;
pub mod material;
pub mod submission;
pub mod user;

use campus_core::identity::IdentityHeaders;
use campus_domain::pagination::PageRequest;

use crate::domain::types::Actor;
use crate::error::ClassroomServiceError;

pub(crate) fn actor(identity: IdentityHeaders) -> Actor {
    Actor {
        id: identity.user_id,
        role: identity.role,
    }
}

/// Parse `per-page` / `page` pagination from a raw query string, falling
/// back to defaults when absent.
pub(crate) fn page_from_query(
    raw_query: Option<&str>,
) -> Result<PageRequest, ClassroomServiceError> {
    raw_query
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ClassroomServiceError::MissingData)
        .map(Option::unwrap_or_default)
}
