use crate::db;
use crate::ingest::IngestError;
use crate::models::{AccountRow, ParsedAccount, RawProgramAccount};
use crate::rpc::client::RpcClient;
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::{debug, info};

/// Hard cap on accounts fetched per snapshot. No pagination by design.
pub const ACCOUNT_FETCH_CAP: usize = 10;

const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Fetch the program's owned accounts and upsert them into the program's
/// account table. Returns the number of rows written.
pub async fn ingest_accounts(
    client: &RpcClient,
    pool: &PgPool,
    program_id: &str,
) -> Result<usize, IngestError> {
    let raw = fetch_program_accounts(client, program_id).await?;
    if raw.is_empty() {
        info!("program {} owns no accounts, nothing to store", program_id);
        return Ok(0);
    }

    for parsed in raw.iter().map(parse_account) {
        debug!(
            "account {} owned by {} holds {} SOL",
            parsed.address, parsed.owner, parsed.sol_balance
        );
    }

    let rows: Vec<AccountRow> = raw.iter().map(account_row).collect();

    // One connection for the whole pipeline, released on every exit path.
    let mut conn = pool.acquire().await?;
    db::account::ensure_table(&mut conn, program_id).await?;
    let written = db::account::upsert_accounts(&mut conn, program_id, &rows).await?;

    info!("stored {} account rows for program {}", written, program_id);
    Ok(written)
}

/// Request the program's owned accounts with base64-encoded data.
pub async fn fetch_program_accounts(
    client: &RpcClient,
    program_id: &str,
) -> Result<Vec<RawProgramAccount>, IngestError> {
    let result = client
        .call(
            "getProgramAccounts",
            json!([program_id, {
                "encoding": "base64",
                "limit": ACCOUNT_FETCH_CAP,
            }]),
        )
        .await?;

    parse_program_accounts(result)
}

/// Deserialize the raw account list, truncating to the fetch cap in case the
/// node ignored the limit option.
pub fn parse_program_accounts(result: Value) -> Result<Vec<RawProgramAccount>, IngestError> {
    let mut accounts: Vec<RawProgramAccount> = serde_json::from_value(result)?;
    if accounts.len() > ACCOUNT_FETCH_CAP {
        debug!(
            "node returned {} accounts, keeping the first {}",
            accounts.len(),
            ACCOUNT_FETCH_CAP
        );
        accounts.truncate(ACCOUNT_FETCH_CAP);
    }
    Ok(accounts)
}

/// Decode the balance into SOL, keeping the data payload opaque.
pub fn parse_account(raw: &RawProgramAccount) -> ParsedAccount {
    ParsedAccount {
        address: raw.pubkey.clone(),
        owner: raw.account.owner.clone(),
        data: raw.account.data.clone(),
        sol_balance: raw.account.lamports as f64 / LAMPORTS_PER_SOL,
    }
}

/// Build the storage-bound row, decoding the data buffer to bytes.
pub fn account_row(raw: &RawProgramAccount) -> AccountRow {
    AccountRow {
        pubkey: raw.pubkey.clone(),
        owner: raw.account.owner.clone(),
        lamports: raw.account.lamports as i64,
        executable: raw.account.executable,
        rent_epoch: raw.account.rent_epoch as i64,
        data: decode_account_data(&raw.account.data),
        space: raw.account.space as i64,
    }
}

/// On-wire account data is a `[payload, encoding]` pair. Only an explicit
/// "base64" tag is decoded; any other tag or shape yields an empty buffer.
pub fn decode_account_data(data: &Value) -> Vec<u8> {
    match data.as_array() {
        Some(parts) if parts.len() == 2 && parts[1].as_str() == Some("base64") => parts[0]
            .as_str()
            .and_then(|payload| base64::decode(payload).ok())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}
