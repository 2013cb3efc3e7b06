use dotenv::dotenv;
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable(s): {0}")]
    MissingVars(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub solana_rpc_url: String,
}

impl Config {
    /// Load configuration from the environment, reading `.env` when present.
    ///
    /// Both variables are required and have no defaults; every missing name
    /// is reported in one error so the operator can fix them all at once.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok();
        let solana_rpc_url = env::var("SOLANA_RPC_URL").ok();

        let mut missing = Vec::new();
        if database_url.is_none() {
            missing.push("DATABASE_URL");
        }
        if solana_rpc_url.is_none() {
            missing.push("SOLANA_RPC_URL");
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing.join(", ")));
        }

        Ok(Self {
            database_url: database_url.unwrap_or_default(),
            solana_rpc_url: solana_rpc_url.unwrap_or_default(),
        })
    }
}
