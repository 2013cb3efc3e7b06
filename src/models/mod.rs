use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One normalized instruction from a fetched transaction.
///
/// `data` is the raw instruction payload kept opaque; `fee_payer` is the
/// transaction's first account key; `name` is the program address the
/// instruction targets, when its index resolves; `accounts` are the resolved
/// addresses the instruction touches, in instruction order.
#[derive(Debug, Clone, Serialize)]
pub struct InstructionRow {
    pub data: Value,
    pub fee_payer: Option<String>,
    pub name: Option<String>,
    pub accounts: Vec<String>,
}

/// One `getProgramAccounts` entry as the node returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProgramAccount {
    pub pubkey: String,
    pub account: RawAccountState,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAccountState {
    pub lamports: u64,
    pub owner: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub executable: bool,
    #[serde(default)]
    pub rent_epoch: u64,
    #[serde(default)]
    pub space: u64,
}

/// Human-facing view of a program account with the balance in SOL.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedAccount {
    pub address: String,
    pub owner: String,
    pub data: Value,
    pub sol_balance: f64,
}

/// Storage-bound program account row.
#[derive(Debug, Clone)]
pub struct AccountRow {
    pub pubkey: String,
    pub owner: String,
    pub lamports: i64,
    pub executable: bool,
    pub rent_epoch: i64,
    pub data: Vec<u8>,
    pub space: i64,
}
