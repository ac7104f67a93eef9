use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use campus_core::health::{healthz, readyz};
use campus_core::middleware::request_id_layer;

use crate::handlers::{
    announcement::{
        create_announcement, delete_announcement, get_announcement, get_announcements,
        update_announcement,
    },
    assignment::{
        create_assignment, delete_assignment, get_assignment, get_assignments, update_assignment,
    },
    course::{create_course, delete_course, get_course, get_courses, get_my_courses},
    enrollment::enroll,
    material::{create_material, delete_material, get_material, get_materials, update_material},
    submission::{get_submissions, grade_submission, submit_assignment},
    user::{get_me, login, register_user, update_me},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", post(register_user))
        .route("/auth/login", post(login))
        .route("/users/@me", get(get_me))
        .route("/users/@me", patch(update_me))
        .route("/users/@me/courses", get(get_my_courses))
        // Courses
        .route("/courses", post(create_course))
        .route("/courses", get(get_courses))
        .route("/courses/{id}", get(get_course))
        .route("/courses/{id}", delete(delete_course))
        // Enrollments
        .route("/courses/{id}/enrollments", post(enroll))
        // Materials
        .route("/courses/{id}/materials", post(create_material))
        .route("/courses/{id}/materials", get(get_materials))
        .route("/materials/{id}", get(get_material))
        .route("/materials/{id}", put(update_material))
        .route("/materials/{id}", delete(delete_material))
        // Announcements
        .route("/courses/{id}/announcements", post(create_announcement))
        .route("/courses/{id}/announcements", get(get_announcements))
        .route("/announcements/{id}", get(get_announcement))
        .route("/announcements/{id}", put(update_announcement))
        .route("/announcements/{id}", delete(delete_announcement))
        // Assignments
        .route("/courses/{id}/assignments", post(create_assignment))
        .route("/courses/{id}/assignments", get(get_assignments))
        .route("/assignments/{id}", get(get_assignment))
        .route("/assignments/{id}", put(update_assignment))
        .route("/assignments/{id}", delete(delete_assignment))
        // Submissions
        .route("/assignments/{id}/submissions", post(submit_assignment))
        .route("/assignments/{id}/submissions", get(get_submissions))
        .route("/submissions/{id}/grade", post(grade_submission))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
