use sqlx::PgConnection;

use crate::pkg::internal::adaptors::employers::spec::EmployerRecord;
use crate::prelude::Result;

pub struct EmployerSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EmployerSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EmployerSelector { pool }
    }

    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<EmployerRecord>> {
        let row = sqlx::query_as::<_, EmployerRecord>(
            "SELECT id, company_name, employer_name, email, phone, password, username, industry, location, designation, experience, companytype, summary, aboutus, created_at
             FROM employers WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<EmployerRecord>> {
        let row = sqlx::query_as::<_, EmployerRecord>(
            "SELECT id, company_name, employer_name, email, phone, password, username, industry, location, designation, experience, companytype, summary, aboutus, created_at
             FROM employers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
