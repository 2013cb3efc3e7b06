pub mod account;
pub mod transaction;

use crate::rpc::client::RpcError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("malformed transaction: {0}")]
    MalformedTransaction(&'static str),

    #[error("malformed account payload: {0}")]
    MalformedAccounts(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
}
