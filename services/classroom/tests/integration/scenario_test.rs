//! End-to-end walkthrough of a full course lifecycle against the in-memory
//! store: register → create course → enroll → assignment → submit → grade →
//! delete course.

use campus_domain::role::Role;

use campus_classroom::domain::types::Actor;
use campus_classroom::error::ClassroomServiceError;
use campus_classroom::usecase::assignment::{PostAssignmentInput, PostAssignmentUseCase};
use campus_classroom::usecase::course::{
    CreateCourseInput, CreateCourseUseCase, DeleteCourseUseCase, ListEnrolledCoursesUseCase,
};
use campus_classroom::usecase::enrollment::EnrollStudentUseCase;
use campus_classroom::usecase::submission::{
    GradeSubmissionInput, GradeSubmissionUseCase, ListSubmissionsUseCase, SubmitAssignmentInput,
    SubmitAssignmentUseCase,
};
use campus_classroom::usecase::user::{RegisterUserInput, RegisterUserUseCase};

use crate::helpers::MemStore;

#[tokio::test]
async fn full_course_lifecycle() {
    let store = MemStore::new();

    // Register an instructor and a student.
    let register = RegisterUserUseCase {
        repo: store.clone(),
    };
    let instructor = register
        .execute(RegisterUserInput {
            email: "prof@example.com".to_owned(),
            password: "hunter2".to_owned(),
            full_name: "Prof. Rivera".to_owned(),
            role: "instructor".to_owned(),
        })
        .await
        .unwrap();
    let student = register
        .execute(RegisterUserInput {
            email: "sam@example.com".to_owned(),
            password: "hunter2".to_owned(),
            full_name: "Sam Park".to_owned(),
            role: "student".to_owned(),
        })
        .await
        .unwrap();

    // Registering the same email again fails.
    let dup = register
        .execute(RegisterUserInput {
            email: "sam@example.com".to_owned(),
            password: "other".to_owned(),
            full_name: "Someone Else".to_owned(),
            role: "student".to_owned(),
        })
        .await;
    assert!(matches!(dup, Err(ClassroomServiceError::EmailAlreadyExists)));

    let instructor = Actor {
        id: instructor.id,
        role: Role::Instructor,
    };
    let student = Actor {
        id: student.id,
        role: Role::Student,
    };

    // Instructor creates a course.
    let course = CreateCourseUseCase {
        courses: store.clone(),
    }
    .execute(
        &instructor,
        CreateCourseInput {
            title: "Operating Systems".to_owned(),
            description: "Processes, memory, filesystems".to_owned(),
        },
    )
    .await
    .unwrap();

    // Student enrolls; a second attempt fails with exactly one row kept.
    let enroll = EnrollStudentUseCase {
        courses: store.clone(),
        enrollments: store.clone(),
    };
    enroll.execute(&student, course.id).await.unwrap();
    assert!(matches!(
        enroll.execute(&student, course.id).await,
        Err(ClassroomServiceError::AlreadyEnrolled)
    ));
    assert_eq!(store.enrollment_count(), 1);

    // The course shows up in the student's enrolled list.
    let enrolled = ListEnrolledCoursesUseCase {
        courses: store.clone(),
    }
    .execute(student.id, Default::default())
    .await
    .unwrap();
    assert_eq!(enrolled.len(), 1);
    assert_eq!(enrolled[0].id, course.id);

    // Instructor posts an assignment.
    let assignment = PostAssignmentUseCase {
        courses: store.clone(),
        assignments: store.clone(),
    }
    .execute(
        &instructor,
        course.id,
        PostAssignmentInput {
            title: "Scheduler lab".to_owned(),
            description: "Implement round-robin".to_owned(),
            due_date: None,
            instruction_file: Some("uploads/lab2.pdf".to_owned()),
        },
    )
    .await
    .unwrap();

    // Student submits once; the duplicate fails.
    let submit = SubmitAssignmentUseCase {
        assignments: store.clone(),
        enrollments: store.clone(),
        submissions: store.clone(),
    };
    let submission = submit
        .execute(
            &student,
            assignment.id,
            SubmitAssignmentInput {
                content: "scheduler.rs attached".to_owned(),
                file_path: Some("uploads/scheduler.rs".to_owned()),
            },
        )
        .await
        .unwrap();
    assert!(submission.grade.is_none());
    assert!(matches!(
        submit
            .execute(
                &student,
                assignment.id,
                SubmitAssignmentInput {
                    content: "again".to_owned(),
                    file_path: None,
                },
            )
            .await,
        Err(ClassroomServiceError::AlreadySubmitted)
    ));
    assert_eq!(store.submission_count(), 1);

    // Instructor grades it 85.
    GradeSubmissionUseCase {
        submissions: store.clone(),
        assignments: store.clone(),
        courses: store.clone(),
    }
    .execute(
        &instructor,
        submission.id,
        GradeSubmissionInput {
            grade: 85.0,
            feedback: Some("Solid round-robin".to_owned()),
        },
    )
    .await
    .unwrap();

    // The instructor sees the graded submission in the list; the student may not.
    let list = ListSubmissionsUseCase {
        submissions: store.clone(),
        assignments: store.clone(),
        courses: store.clone(),
    };
    let submissions = list
        .execute(&instructor, assignment.id, Default::default())
        .await
        .unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].grade, Some(85.0));
    assert!(submissions[0].graded_at.is_some());
    assert!(matches!(
        list.execute(&student, assignment.id, Default::default())
            .await,
        Err(ClassroomServiceError::Unauthorized)
    ));

    // Deleting the course takes everything under it along.
    DeleteCourseUseCase {
        courses: store.clone(),
    }
    .execute(&instructor, course.id)
    .await
    .unwrap();

    assert_eq!(store.course_count(), 0);
    assert_eq!(store.enrollment_count(), 0);
    assert_eq!(store.assignment_count(), 0);
    assert_eq!(store.submission_count(), 0);
}
