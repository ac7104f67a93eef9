mod helpers;

mod enrollment_test;
mod scenario_test;
mod submission_test;
