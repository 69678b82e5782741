use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::{filters::JobSearchFilter, spec::JobRecord};
use crate::prelude::Result;

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<JobRecord>> {
        let row = sqlx::query_as::<_, JobRecord>(
            "SELECT id, job_title, company_name, country, state, city, posted_by, experience, salary, work_mode, education, job_type, description, created_at, updated_at
             FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    // result order is store-defined; the filter adds no ORDER BY
    pub async fn search(&mut self, filter: &JobSearchFilter) -> Result<Vec<JobRecord>> {
        let (sql, params) = filter.build();
        let mut query = sqlx::query_as::<_, JobRecord>(&sql);
        for param in &params {
            query = query.bind(param);
        }
        Ok(query.fetch_all(&mut *self.pool).await?)
    }
}
