use soroban_sdk::String;

use crate::types::ContractError;

// Opaque carriers may hold ciphertext envelopes, so the cap is generous.
const MAX_TEXT_LEN: u32 = 2048;

/// Largest value an encoded schedule field may hold (one byte on the wire).
pub const MAX_ENCODED: u32 = 255;

/// Validate a free-text or opaque-carrier field: non-empty, bounded size.
pub fn validate_text(text: &String) -> Result<(), ContractError> {
    let len = text.len();
    if len == 0 || len > MAX_TEXT_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// An expiry is only acceptable strictly in the future.
pub fn validate_expiry(now: u64, expires_at: u64) -> Result<(), ContractError> {
    if expires_at <= now {
        return Err(ContractError::InvalidExpiry);
    }
    Ok(())
}

/// Validate an encoded schedule value fits in a byte.
///
/// No entrypoint feeds schedule values yet: `create_prescription` stores the
/// dosage fields as zero because the encoding step lives outside the vault.
/// This check is the range contract for whatever supplies them later.
pub fn validate_encoded(value: u32) -> Result<(), ContractError> {
    if value > MAX_ENCODED {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_validate_text() {
        let env = Env::default();
        assert_eq!(validate_text(&String::from_str(&env, "Lisinopril 10mg")), Ok(()));
        assert_eq!(
            validate_text(&String::from_str(&env, "")),
            Err(ContractError::InvalidInput)
        );
    }

    #[test]
    fn test_validate_expiry() {
        assert_eq!(validate_expiry(100, 101), Ok(()));
        assert_eq!(validate_expiry(100, 100), Err(ContractError::InvalidExpiry));
        assert_eq!(validate_expiry(100, 99), Err(ContractError::InvalidExpiry));
    }

    #[test]
    fn test_validate_encoded() {
        assert_eq!(validate_encoded(0), Ok(()));
        assert_eq!(validate_encoded(255), Ok(()));
        assert_eq!(validate_encoded(256), Err(ContractError::InvalidInput));
    }
}
