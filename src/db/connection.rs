use sqlx::postgres::{PgPool, PgPoolOptions};

/// Create the connection pool and verify it with a probe query.
pub async fn establish_connection(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    // Run a simple query to ensure the database is reachable
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
