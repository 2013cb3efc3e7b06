use crate::db::table_name;
use crate::models::AccountRow;
use sqlx::PgConnection;

/// Create the program's account snapshot table if it does not exist yet.
pub async fn ensure_table(conn: &mut PgConnection, program_id: &str) -> Result<(), sqlx::Error> {
    let table = table_name("accounts", program_id);

    let ddl = format!(
        r#"CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            pubkey TEXT UNIQUE NOT NULL,
            owner TEXT,
            lamports BIGINT,
            executable BOOLEAN,
            rent_epoch BIGINT,
            data BYTEA,
            space BIGINT
        )"#,
        table
    );

    sqlx::query(&ddl).execute(&mut *conn).await?;
    Ok(())
}

/// Merge the snapshot into the table keyed on pubkey: every non-key column
/// is overwritten with the incoming value, so replaying an unchanged
/// snapshot leaves the table observably untouched.
pub async fn upsert_accounts(
    conn: &mut PgConnection,
    program_id: &str,
    rows: &[AccountRow],
) -> Result<usize, sqlx::Error> {
    let table = table_name("accounts", program_id);

    let stmt = format!(
        "INSERT INTO {} (pubkey, owner, lamports, executable, rent_epoch, data, space)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT (pubkey)
         DO UPDATE SET
            owner = EXCLUDED.owner,
            lamports = EXCLUDED.lamports,
            executable = EXCLUDED.executable,
            rent_epoch = EXCLUDED.rent_epoch,
            data = EXCLUDED.data,
            space = EXCLUDED.space",
        table
    );

    let mut written = 0;
    for row in rows {
        sqlx::query(&stmt)
            .bind(&row.pubkey)
            .bind(&row.owner)
            .bind(row.lamports)
            .bind(row.executable)
            .bind(row.rent_epoch)
            .bind(&row.data)
            .bind(row.space)
            .execute(&mut *conn)
            .await?;
        written += 1;
    }

    Ok(written)
}
