use sqlx::PgConnection;

use crate::pkg::internal::adaptors::employers::spec::EmployerRecord;
use crate::pkg::server::handlers::employers::{NewEmployer, UpdateEmployer};
use crate::prelude::Result;

pub struct EmployerMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EmployerMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EmployerMutator { pool }
    }

    pub async fn create(&mut self, employer: &NewEmployer) -> Result<EmployerRecord> {
        let row = sqlx::query_as::<_, EmployerRecord>(
            r#"
            INSERT INTO employers (company_name, employer_name, email, phone, password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, company_name, employer_name, email, phone, password, username, industry, location, designation, experience, companytype, summary, aboutus, created_at
            "#,
        )
        .bind(&employer.company_name)
        .bind(&employer.employer_name)
        .bind(&employer.email)
        .bind(&employer.phone)
        .bind(&employer.password)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        &mut self,
        id: i32,
        employer: &UpdateEmployer,
    ) -> Result<Option<EmployerRecord>> {
        let mut query = String::from(
            "UPDATE employers SET company_name = $2, employer_name = $3, email = $4, phone = $5",
        );
        let mut param_count = 5;

        let optionals = [
            ("password", &employer.password),
            ("username", &employer.username),
            ("industry", &employer.industry),
            ("location", &employer.location),
            ("designation", &employer.designation),
            ("experience", &employer.experience),
            ("companytype", &employer.companytype),
            ("summary", &employer.summary),
            ("aboutus", &employer.aboutus),
        ];
        for (column, value) in optionals {
            if value.is_some() {
                param_count += 1;
                query.push_str(&format!(", {} = ${}", column, param_count));
            }
        }

        query.push_str(" WHERE id = $1 RETURNING id, company_name, employer_name, email, phone, password, username, industry, location, designation, experience, companytype, summary, aboutus, created_at");

        let mut q = sqlx::query_as::<_, EmployerRecord>(&query)
            .bind(id)
            .bind(&employer.company_name)
            .bind(&employer.employer_name)
            .bind(&employer.email)
            .bind(&employer.phone);
        for (_, value) in optionals {
            if let Some(value) = value {
                q = q.bind(value);
            }
        }
        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employers WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
