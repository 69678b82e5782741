use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applications::spec::ApplicationRecord;
use crate::prelude::Result;

pub struct ApplicationSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationSelector { pool }
    }

    pub async fn get_by_job(&mut self, job_id: i32) -> Result<Vec<ApplicationRecord>> {
        let rows = sqlx::query_as::<_, ApplicationRecord>(
            "SELECT id, job_id, full_name, email, phone, dob, gender, location, linkedin_url, naukri_url, portfolio_url, highest_education, education, experience, total_experience, cover_letter, resume_path, agree_terms, created_at
             FROM job_applications WHERE job_id = $1 ORDER BY created_at DESC",
        )
        .bind(job_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
