use bs58;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid program address format: {0}")]
    InvalidProgramId(String),

    #[error("Invalid transaction signature format: {0}")]
    InvalidSignature(String),
}

pub fn validate_program_id(address: &str) -> Result<(), ValidationError> {
    // Check if address is empty
    if address.trim().is_empty() {
        return Err(ValidationError::MissingParameter("program id".to_string()));
    }

    // Decode base58 string
    let decoded = match bs58::decode(address).into_vec() {
        Ok(bytes) => bytes,
        Err(_) => return Err(ValidationError::InvalidProgramId(address.to_string())),
    };

    // Validate length (Solana addresses are 32 bytes)
    if decoded.len() != 32 {
        return Err(ValidationError::InvalidProgramId(address.to_string()));
    }

    Ok(())
}

pub fn validate_signature(signature: &str) -> Result<(), ValidationError> {
    if signature.trim().is_empty() {
        return Err(ValidationError::MissingParameter(
            "transaction signature".to_string(),
        ));
    }

    // Decode base58 string
    let decoded = match bs58::decode(signature).into_vec() {
        Ok(bytes) => bytes,
        Err(_) => return Err(ValidationError::InvalidSignature(signature.to_string())),
    };

    // Validate length (Solana signatures are 64 bytes)
    if decoded.len() != 64 {
        return Err(ValidationError::InvalidSignature(signature.to_string()));
    }

    Ok(())
}
