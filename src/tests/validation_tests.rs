//! tests/validation_tests.rs - CLI argument validation coverage

#[cfg(test)]
mod tests {
    use crate::validation::{validate_program_id, validate_signature, ValidationError};

    #[test]
    fn well_formed_program_id_is_accepted() {
        let address = bs58::encode(&[7u8; 32]).into_string();
        assert!(validate_program_id(&address).is_ok());
    }

    #[test]
    fn well_formed_signature_is_accepted() {
        let signature = bs58::encode(&[9u8; 64]).into_string();
        assert!(validate_signature(&signature).is_ok());
    }

    #[test]
    fn empty_program_id_is_a_missing_parameter() {
        match validate_program_id("  ") {
            Err(ValidationError::MissingParameter(_)) => {}
            other => panic!("expected MissingParameter, got {:?}", other),
        }
    }

    #[test]
    fn non_base58_program_id_is_rejected() {
        assert!(validate_program_id("not base58 0OIl").is_err());
    }

    #[test]
    fn wrong_length_program_id_is_rejected() {
        // Decodes fine but to fewer than 32 bytes
        let short = bs58::encode(&[1u8; 16]).into_string();
        assert!(validate_program_id(&short).is_err());
    }

    #[test]
    fn wrong_length_signature_is_rejected() {
        // A 32-byte value is a pubkey, not a signature
        let pubkey_sized = bs58::encode(&[1u8; 32]).into_string();
        assert!(validate_signature(&pubkey_sized).is_err());
    }
}
