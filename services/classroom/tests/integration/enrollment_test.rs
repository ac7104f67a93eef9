use campus_classroom::error::ClassroomServiceError;
use campus_classroom::usecase::enrollment::EnrollStudentUseCase;

use crate::helpers::{MemStore, instructor_actor, student_actor, test_course};

#[tokio::test]
async fn should_create_exactly_one_row_on_double_enroll() {
    let store = MemStore::new();
    let student = student_actor();
    let course = test_course(instructor_actor().id);
    store.add_course(course.clone());

    let uc = EnrollStudentUseCase {
        courses: store.clone(),
        enrollments: store.clone(),
    };

    uc.execute(&student, course.id).await.unwrap();
    let second = uc.execute(&student, course.id).await;

    assert!(
        matches!(second, Err(ClassroomServiceError::AlreadyEnrolled)),
        "expected AlreadyEnrolled, got {second:?}"
    );
    assert_eq!(store.enrollment_count(), 1, "exactly one row must exist");
}

#[tokio::test]
async fn should_reject_enrollment_in_unknown_course() {
    let store = MemStore::new();
    let student = student_actor();

    let uc = EnrollStudentUseCase {
        courses: store.clone(),
        enrollments: store.clone(),
    };

    let result = uc.execute(&student, uuid::Uuid::now_v7()).await;
    assert!(matches!(result, Err(ClassroomServiceError::CourseNotFound)));
}

#[tokio::test]
async fn should_reject_instructor_enrollment() {
    let store = MemStore::new();
    let instructor = instructor_actor();
    let course = test_course(instructor.id);
    store.add_course(course.clone());

    let uc = EnrollStudentUseCase {
        courses: store.clone(),
        enrollments: store.clone(),
    };

    let result = uc.execute(&instructor, course.id).await;
    assert!(
        matches!(result, Err(ClassroomServiceError::Unauthorized)),
        "instructors cannot enroll as students, got {result:?}"
    );
    assert_eq!(store.enrollment_count(), 0);
}
