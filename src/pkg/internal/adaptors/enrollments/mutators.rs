use sqlx::PgConnection;

use crate::pkg::internal::adaptors::enrollments::spec::EnrollmentRecord;
use crate::pkg::server::handlers::enrollments::NewEnrollment;
use crate::prelude::Result;

pub struct EnrollmentMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EnrollmentMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EnrollmentMutator { pool }
    }

    pub async fn create(&mut self, enrollment: &NewEnrollment) -> Result<EnrollmentRecord> {
        let row = sqlx::query_as::<_, EnrollmentRecord>(
            r#"
            INSERT INTO enrollments (course_name, training_mode, duration, custom_duration, requirements, first_name, last_name, email, phone, education, location, preferred_days, time_slot, custom_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id, course_name, training_mode, duration, custom_duration, requirements, first_name, last_name, email, phone, education, location, preferred_days, time_slot, custom_time, created_at
            "#,
        )
        .bind(&enrollment.course_name)
        .bind(&enrollment.training_mode)
        .bind(&enrollment.duration)
        .bind(enrollment.custom_duration)
        .bind(&enrollment.requirements)
        .bind(&enrollment.first_name)
        .bind(&enrollment.last_name)
        .bind(&enrollment.email)
        .bind(&enrollment.phone)
        .bind(&enrollment.education)
        .bind(&enrollment.location)
        .bind(&enrollment.preferred_days)
        .bind(&enrollment.time_slot)
        .bind(&enrollment.custom_time)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
