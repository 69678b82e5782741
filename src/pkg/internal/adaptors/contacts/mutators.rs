use sqlx::PgConnection;

use crate::pkg::internal::adaptors::contacts::spec::ContactRecord;
use crate::prelude::Result;

pub struct ContactMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ContactMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ContactMutator { pool }
    }

    pub async fn create(&mut self, name: &str, email: &str) -> Result<ContactRecord> {
        let row = sqlx::query_as::<_, ContactRecord>(
            r#"
            INSERT INTO contacts (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
