use crate::db;
use crate::ingest::IngestError;
use crate::models::InstructionRow;
use crate::rpc::client::RpcClient;
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::info;

/// Fetch one transaction by signature and persist a row per instruction
/// into the program's transaction table.
///
/// Returns the number of rows written. A transaction with no instructions
/// is not an error: the pipeline logs and returns without touching storage.
pub async fn ingest_transaction(
    client: &RpcClient,
    pool: &PgPool,
    program_id: &str,
    signature: &str,
) -> Result<usize, IngestError> {
    let result = client
        .call(
            "getTransaction",
            json!([signature, {
                "encoding": "json",
                "maxSupportedTransactionVersion": 0,
                "commitment": "finalized",
            }]),
        )
        .await?;

    let rows = extract_instruction_rows(&result)?;
    if rows.is_empty() {
        info!(
            "transaction {} carries no instructions, nothing to store",
            signature
        );
        return Ok(0);
    }

    // One connection for the whole pipeline, released on every exit path.
    let mut conn = pool.acquire().await?;
    db::transaction::ensure_table(&mut conn, program_id).await?;
    let written =
        db::transaction::add_instruction_rows(&mut conn, program_id, signature, &rows).await?;

    info!(
        "stored {} instruction rows for transaction {}",
        written, signature
    );
    Ok(written)
}

/// Normalize a raw `getTransaction` result into instruction rows.
///
/// Shape is checked once up front, fail fast; after that each instruction
/// resolves its program name and account list independently against the
/// transaction's own `accountKeys`.
pub fn extract_instruction_rows(result: &Value) -> Result<Vec<InstructionRow>, IngestError> {
    let transaction = result
        .get("transaction")
        .and_then(Value::as_object)
        .ok_or(IngestError::MalformedTransaction(
            "result carries no transaction object",
        ))?;

    let message = transaction
        .get("message")
        .and_then(Value::as_object)
        .ok_or(IngestError::MalformedTransaction("transaction has no message"))?;

    let instructions = message
        .get("instructions")
        .and_then(Value::as_array)
        .ok_or(IngestError::MalformedTransaction(
            "message.instructions is not an array",
        ))?;

    let account_keys = message
        .get("accountKeys")
        .and_then(Value::as_array)
        .ok_or(IngestError::MalformedTransaction(
            "message.accountKeys is not an array",
        ))?;

    // Fee payer is by convention the first account key.
    let fee_payer = account_keys
        .first()
        .and_then(Value::as_str)
        .map(str::to_string);

    let rows = instructions
        .iter()
        .map(|ixn| InstructionRow {
            data: ixn.clone(),
            fee_payer: fee_payer.clone(),
            name: resolve_program_name(ixn, account_keys),
            accounts: resolve_accounts(ixn, account_keys),
        })
        .collect();

    Ok(rows)
}

/// Address at `accountKeys[programIdIndex]`, or None when the index is
/// missing, not numeric, or out of range.
fn resolve_program_name(ixn: &Value, account_keys: &[Value]) -> Option<String> {
    let index = ixn.get("programIdIndex").and_then(Value::as_u64)? as usize;
    account_keys
        .get(index)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Resolve the instruction's account indices in order. An index that does
/// not resolve is dropped, not replaced with a placeholder.
fn resolve_accounts(ixn: &Value, account_keys: &[Value]) -> Vec<String> {
    ixn.get("accounts")
        .and_then(Value::as_array)
        .map(|indices| {
            indices
                .iter()
                .filter_map(Value::as_u64)
                .filter_map(|i| account_keys.get(i as usize))
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
