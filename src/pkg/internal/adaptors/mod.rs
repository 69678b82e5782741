pub mod applications;
pub mod contacts;
pub mod employers;
pub mod enrollments;
pub mod jobs;
pub mod students;
