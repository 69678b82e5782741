use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applications::spec::ApplicationRecord;
use crate::pkg::server::handlers::applications::NewApplication;
use crate::prelude::Result;

pub struct ApplicationMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationMutator { pool }
    }

    pub async fn create(&mut self, application: &NewApplication) -> Result<ApplicationRecord> {
        let row = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            INSERT INTO job_applications
            (job_id, full_name, email, phone, dob, gender, location,
             linkedin_url, naukri_url, portfolio_url, highest_education,
             education, experience, total_experience, cover_letter, resume_path, agree_terms)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING id, job_id, full_name, email, phone, dob, gender, location, linkedin_url, naukri_url, portfolio_url, highest_education, education, experience, total_experience, cover_letter, resume_path, agree_terms, created_at
            "#,
        )
        .bind(application.job_id)
        .bind(&application.full_name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(&application.dob)
        .bind(&application.gender)
        .bind(&application.location)
        .bind(&application.linkedin_url)
        .bind(&application.naukri_url)
        .bind(&application.portfolio_url)
        .bind(&application.highest_education)
        .bind(serde_json::to_string(&application.education)?)
        .bind(serde_json::to_string(&application.experience)?)
        .bind(application.total_experience)
        .bind(&application.cover_letter)
        .bind(&application.resume_path)
        .bind(application.agree_terms)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
