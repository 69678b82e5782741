use sqlx::PgConnection;

use crate::pkg::internal::adaptors::students::spec::StudentRecord;
use crate::pkg::server::handlers::students::{NewStudent, UpdateStudent};
use crate::prelude::Result;

pub struct StudentMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> StudentMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        StudentMutator { pool }
    }

    pub async fn create(&mut self, student: &NewStudent) -> Result<StudentRecord> {
        let row = sqlx::query_as::<_, StudentRecord>(
            r#"
            INSERT INTO students (student_id, full_name, email, phone, password, receive_updates)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING student_id, full_name, email, phone, password, receive_updates, dateofbirth, address, ssc, intermediate, ug, pg, experience, profile, resume, created_at
            "#,
        )
        .bind(&student.student_id)
        .bind(&student.full_name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(&student.password)
        .bind(student.receive_updates)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        &mut self,
        student_id: &str,
        student: &UpdateStudent,
    ) -> Result<Option<StudentRecord>> {
        let mut query = String::from(
            "UPDATE students SET full_name = $2, email = $3, phone = $4, receive_updates = $5",
        );
        let mut param_count = 5;

        let optionals = [
            ("password", &student.password),
            ("dateofbirth", &student.dateofbirth),
            ("address", &student.address),
            ("ssc", &student.ssc),
            ("intermediate", &student.intermediate),
            ("ug", &student.ug),
            ("pg", &student.pg),
            ("experience", &student.experience),
            ("profile", &student.profile),
            ("resume", &student.resume),
        ];
        for (column, value) in optionals {
            if value.is_some() {
                param_count += 1;
                query.push_str(&format!(", {} = ${}", column, param_count));
            }
        }

        query.push_str(" WHERE student_id = $1 RETURNING student_id, full_name, email, phone, password, receive_updates, dateofbirth, address, ssc, intermediate, ug, pg, experience, profile, resume, created_at");

        let mut q = sqlx::query_as::<_, StudentRecord>(&query)
            .bind(student_id)
            .bind(&student.full_name)
            .bind(&student.email)
            .bind(&student.phone)
            .bind(student.receive_updates);
        for (_, value) in optionals {
            if let Some(value) = value {
                q = q.bind(value);
            }
        }
        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }

    pub async fn delete(&mut self, student_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(student_id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
