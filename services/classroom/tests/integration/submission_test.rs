use campus_classroom::domain::lifecycle::grading_state_valid;
use campus_classroom::error::ClassroomServiceError;
use campus_classroom::usecase::submission::{
    GradeSubmissionInput, GradeSubmissionUseCase, SubmitAssignmentInput, SubmitAssignmentUseCase,
};

use crate::helpers::{
    MemStore, instructor_actor, student_actor, test_assignment, test_course, test_enrollment,
};

fn submit_uc(store: &MemStore) -> SubmitAssignmentUseCase<MemStore, MemStore, MemStore> {
    SubmitAssignmentUseCase {
        assignments: store.clone(),
        enrollments: store.clone(),
        submissions: store.clone(),
    }
}

fn grade_uc(store: &MemStore) -> GradeSubmissionUseCase<MemStore, MemStore, MemStore> {
    GradeSubmissionUseCase {
        submissions: store.clone(),
        assignments: store.clone(),
        courses: store.clone(),
    }
}

#[tokio::test]
async fn should_reject_submission_without_enrollment() {
    let store = MemStore::new();
    let student = student_actor();
    let course = test_course(instructor_actor().id);
    let assignment = test_assignment(course.id);
    store.add_course(course);
    store.add_assignment(assignment.clone());

    // Valid assignment id, but the student never enrolled.
    let result = submit_uc(&store)
        .execute(
            &student,
            assignment.id,
            SubmitAssignmentInput {
                content: "answer".to_owned(),
                file_path: None,
            },
        )
        .await;

    assert!(
        matches!(result, Err(ClassroomServiceError::NotEnrolled)),
        "expected NotEnrolled, got {result:?}"
    );
    assert_eq!(store.submission_count(), 0);
}

#[tokio::test]
async fn should_create_exactly_one_row_on_double_submit() {
    let store = MemStore::new();
    let student = student_actor();
    let course = test_course(instructor_actor().id);
    let assignment = test_assignment(course.id);
    store.add_enrollment(test_enrollment(student.id, course.id));
    store.add_course(course);
    store.add_assignment(assignment.clone());

    let uc = submit_uc(&store);
    let input = || SubmitAssignmentInput {
        content: "answer".to_owned(),
        file_path: None,
    };
    uc.execute(&student, assignment.id, input()).await.unwrap();
    let second = uc.execute(&student, assignment.id, input()).await;

    assert!(
        matches!(second, Err(ClassroomServiceError::AlreadySubmitted)),
        "expected AlreadySubmitted, got {second:?}"
    );
    assert_eq!(store.submission_count(), 1);
}

#[tokio::test]
async fn should_start_submission_ungraded() {
    let store = MemStore::new();
    let student = student_actor();
    let course = test_course(instructor_actor().id);
    let assignment = test_assignment(course.id);
    store.add_enrollment(test_enrollment(student.id, course.id));
    store.add_course(course);
    store.add_assignment(assignment.clone());

    let submission = submit_uc(&store)
        .execute(
            &student,
            assignment.id,
            SubmitAssignmentInput {
                content: "answer".to_owned(),
                file_path: Some("uploads/answer.pdf".to_owned()),
            },
        )
        .await
        .unwrap();

    assert!(submission.grade.is_none());
    assert!(submission.graded_at.is_none());
    assert!(grading_state_valid(submission.grade, submission.graded_at));
}

#[tokio::test]
async fn should_set_grade_and_graded_at_together() {
    let store = MemStore::new();
    let instructor = instructor_actor();
    let student = student_actor();
    let course = test_course(instructor.id);
    let assignment = test_assignment(course.id);
    store.add_enrollment(test_enrollment(student.id, course.id));
    store.add_course(course);
    store.add_assignment(assignment.clone());

    let submission = submit_uc(&store)
        .execute(
            &student,
            assignment.id,
            SubmitAssignmentInput {
                content: "answer".to_owned(),
                file_path: None,
            },
        )
        .await
        .unwrap();

    grade_uc(&store)
        .execute(
            &instructor,
            submission.id,
            GradeSubmissionInput {
                grade: 85.0,
                feedback: Some("Good work".to_owned()),
            },
        )
        .await
        .unwrap();

    let graded = store.submission(submission.id).unwrap();
    assert_eq!(graded.grade, Some(85.0));
    assert_eq!(graded.feedback.as_deref(), Some("Good work"));
    assert!(graded.graded_at.is_some(), "graded_at set iff grade set");
    assert!(grading_state_valid(graded.grade, graded.graded_at));
}

#[tokio::test]
async fn should_reject_out_of_bounds_or_non_finite_grades() {
    let store = MemStore::new();
    let instructor = instructor_actor();
    let student = student_actor();
    let course = test_course(instructor.id);
    let assignment = test_assignment(course.id);
    store.add_enrollment(test_enrollment(student.id, course.id));
    store.add_course(course);
    store.add_assignment(assignment.clone());

    let submission = submit_uc(&store)
        .execute(
            &student,
            assignment.id,
            SubmitAssignmentInput {
                content: "answer".to_owned(),
                file_path: None,
            },
        )
        .await
        .unwrap();

    for bad in [-0.5_f32, 100.5, f32::NAN, f32::INFINITY] {
        let result = grade_uc(&store)
            .execute(
                &instructor,
                submission.id,
                GradeSubmissionInput {
                    grade: bad,
                    feedback: None,
                },
            )
            .await;
        assert!(
            matches!(result, Err(ClassroomServiceError::InvalidGrade)),
            "grade {bad} should be rejected, got {result:?}"
        );
    }

    let unchanged = store.submission(submission.id).unwrap();
    assert!(unchanged.grade.is_none());
    assert!(unchanged.graded_at.is_none());
}

#[tokio::test]
async fn should_deny_grading_by_non_owner() {
    let store = MemStore::new();
    let owner = instructor_actor();
    let intruder = instructor_actor();
    let student = student_actor();
    let course = test_course(owner.id);
    let assignment = test_assignment(course.id);
    store.add_enrollment(test_enrollment(student.id, course.id));
    store.add_course(course);
    store.add_assignment(assignment.clone());

    let submission = submit_uc(&store)
        .execute(
            &student,
            assignment.id,
            SubmitAssignmentInput {
                content: "answer".to_owned(),
                file_path: None,
            },
        )
        .await
        .unwrap();

    let result = grade_uc(&store)
        .execute(
            &intruder,
            submission.id,
            GradeSubmissionInput {
                grade: 50.0,
                feedback: None,
            },
        )
        .await;

    assert!(matches!(result, Err(ClassroomServiceError::NotOwner)));
    assert!(store.submission(submission.id).unwrap().grade.is_none());
}

#[tokio::test]
async fn should_allow_regrade_and_refresh_graded_at() {
    let store = MemStore::new();
    let instructor = instructor_actor();
    let student = student_actor();
    let course = test_course(instructor.id);
    let assignment = test_assignment(course.id);
    store.add_enrollment(test_enrollment(student.id, course.id));
    store.add_course(course);
    store.add_assignment(assignment.clone());

    let submission = submit_uc(&store)
        .execute(
            &student,
            assignment.id,
            SubmitAssignmentInput {
                content: "answer".to_owned(),
                file_path: None,
            },
        )
        .await
        .unwrap();

    let uc = grade_uc(&store);
    uc.execute(
        &instructor,
        submission.id,
        GradeSubmissionInput {
            grade: 60.0,
            feedback: None,
        },
    )
    .await
    .unwrap();
    let first = store.submission(submission.id).unwrap();

    uc.execute(
        &instructor,
        submission.id,
        GradeSubmissionInput {
            grade: 75.0,
            feedback: Some("Regraded after appeal".to_owned()),
        },
    )
    .await
    .unwrap();
    let second = store.submission(submission.id).unwrap();

    assert_eq!(second.grade, Some(75.0));
    assert!(second.graded_at.unwrap() >= first.graded_at.unwrap());
}
