use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobRecord;
use crate::pkg::server::handlers::jobs::NewJob;
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: &NewJob) -> Result<JobRecord> {
        let row = sqlx::query_as::<_, JobRecord>(
            r#"
            INSERT INTO jobs (job_title, company_name, country, state, city, posted_by, experience, salary, work_mode, education, job_type, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, job_title, company_name, country, state, city, posted_by, experience, salary, work_mode, education, job_type, description, created_at, updated_at
            "#,
        )
        .bind(&job.job_title)
        .bind(&job.company_name)
        .bind(&job.country)
        .bind(&job.state)
        .bind(&job.city)
        .bind(&job.posted_by)
        .bind(&job.experience)
        .bind(&job.salary)
        .bind(serde_json::to_string(&job.work_mode)?)
        .bind(serde_json::to_string(&job.education)?)
        .bind(serde_json::to_string(&job.job_type)?)
        .bind(&job.description)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: i32, job: &NewJob) -> Result<Option<JobRecord>> {
        let row = sqlx::query_as::<_, JobRecord>(
            r#"
            UPDATE jobs
            SET job_title = $2, company_name = $3, country = $4, state = $5, city = $6,
                posted_by = $7, experience = $8, salary = $9, work_mode = $10,
                education = $11, job_type = $12, description = $13,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING id, job_title, company_name, country, state, city, posted_by, experience, salary, work_mode, education, job_type, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&job.job_title)
        .bind(&job.company_name)
        .bind(&job.country)
        .bind(&job.state)
        .bind(&job.city)
        .bind(&job.posted_by)
        .bind(&job.experience)
        .bind(&job.salary)
        .bind(serde_json::to_string(&job.work_mode)?)
        .bind(serde_json::to_string(&job.education)?)
        .bind(serde_json::to_string(&job.job_type)?)
        .bind(&job.description)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
