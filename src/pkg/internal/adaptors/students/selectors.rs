use sqlx::PgConnection;

use crate::pkg::internal::adaptors::students::spec::StudentRecord;
use crate::prelude::Result;

pub struct StudentSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> StudentSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        StudentSelector { pool }
    }

    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<StudentRecord>> {
        let row = sqlx::query_as::<_, StudentRecord>(
            "SELECT student_id, full_name, email, phone, password, receive_updates, dateofbirth, address, ssc, intermediate, ug, pg, experience, profile, resume, created_at
             FROM students WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_id(&mut self, student_id: &str) -> Result<Option<StudentRecord>> {
        let row = sqlx::query_as::<_, StudentRecord>(
            "SELECT student_id, full_name, email, phone, password, receive_updates, dateofbirth, address, ssc, intermediate, ug, pg, experience, profile, resume, created_at
             FROM students WHERE student_id = $1",
        )
        .bind(student_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
