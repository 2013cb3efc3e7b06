pub mod config;
pub mod db;
pub mod ingest;
pub mod models;
pub mod rpc;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use db::connection;
pub use db::table_name;
pub use ingest::account::{ingest_accounts, parse_program_accounts};
pub use ingest::transaction::{extract_instruction_rows, ingest_transaction};
pub use ingest::IngestError;
pub use models::{AccountRow, InstructionRow, ParsedAccount, RawProgramAccount};
pub use rpc::client::{RpcClient, RpcError};
pub use validation::{validate_program_id, validate_signature};
