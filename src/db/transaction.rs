use crate::db::table_name;
use crate::models::InstructionRow;
use sqlx::PgConnection;

/// Create the program's transaction table if it does not exist yet.
/// Provisioning is idempotent and runs before every insert batch.
pub async fn ensure_table(conn: &mut PgConnection, program_id: &str) -> Result<(), sqlx::Error> {
    let table = table_name("txn", program_id);

    let ddl = format!(
        r#"CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            txn_sig TEXT NOT NULL,
            ixn_data JSONB,
            fee_payer TEXT,
            name TEXT,
            accounts TEXT[]
        )"#,
        table
    );

    sqlx::query(&ddl).execute(&mut *conn).await?;
    Ok(())
}

/// Insert one row per instruction, each tagged with the owning signature.
///
/// The table defines no uniqueness constraint, so the conflict clause never
/// fires and re-running the pipeline for the same signature appends
/// duplicate rows.
pub async fn add_instruction_rows(
    conn: &mut PgConnection,
    program_id: &str,
    signature: &str,
    rows: &[InstructionRow],
) -> Result<usize, sqlx::Error> {
    let table = table_name("txn", program_id);

    let stmt = format!(
        "INSERT INTO {} (txn_sig, ixn_data, fee_payer, name, accounts)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT DO NOTHING",
        table
    );

    let mut written = 0;
    for row in rows {
        sqlx::query(&stmt)
            .bind(signature)
            .bind(&row.data)
            .bind(&row.fee_payer)
            .bind(&row.name)
            .bind(&row.accounts)
            .execute(&mut *conn)
            .await?;
        written += 1;
    }

    Ok(written)
}
