use crate::{conf::settings, prelude::Result};
use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn apply() -> Result<()> {
    let pool = PgPoolOptions::new().connect(&settings.database_url).await?;
    tracing::debug!("connected to db");
    apply_on(&pool).await?;
    println!("Migrations applied successfully");
    Ok(())
}

// idempotent; also run at server startup so the schema exists before the
// first request lands
pub async fn apply_on(pool: &PgPool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("migrations up to date");
    Ok(())
}
