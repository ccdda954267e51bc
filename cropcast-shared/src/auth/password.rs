/// Password hashing using Argon2id
///
/// One-way hashing with a verify counterpart. The plaintext never reaches
/// the store; handlers hash before writing and verify against the stored
/// PHC string at login.
///
/// # Parameters
///
/// - **Algorithm**: Argon2id
/// - **Memory**: 64 MB (65536 KB)
/// - **Iterations**: 3 passes
/// - **Parallelism**: 4 lanes
/// - **Output**: 32-byte hash
///
/// # Example
///
/// ```
/// use cropcast_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("garden-gate-42")?;
/// assert!(verify_password("garden-gate-42", &hash)?);
/// assert!(!verify_password("wrong", &hash)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder, Version,
};

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a password with Argon2id and a fresh random salt.
///
/// Returns a PHC string (algorithm, parameters, salt and hash in one value),
/// e.g. `$argon2id$v=19$m=65536,t=3,p=4$...`.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let params = ParamsBuilder::new()
        .m_cost(65536)
        .t_cost(3)
        .p_cost(4)
        .output_len(32)
        .build()
        .map_err(|e| PasswordError::HashError(format!("Invalid parameters: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash.
///
/// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch. The comparison
/// is constant-time.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the stored hash cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Failed to parse hash: {}", e)))?;

    // Parameters are embedded in the hash itself
    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(format!(
            "Verification failed: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_format() {
        let hash = hash_password("field-notes-7").expect("Hash should succeed");

        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("v=19"));
        assert!(hash.contains("m=65536"));
        assert!(hash.contains("t=3"));
        assert!(hash.contains("p=4"));
    }

    #[test]
    fn test_hash_password_produces_different_salts() {
        let password = "same_password";

        let hash1 = hash_password(password).expect("Hash 1 should succeed");
        let hash2 = hash_password(password).expect("Hash 2 should succeed");

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password_correct() {
        let password = "correct_password";
        let hash = hash_password(password).expect("Hash should succeed");

        let result = verify_password(password, &hash).expect("Verify should succeed");
        assert!(result, "Correct password should verify");
    }

    #[test]
    fn test_verify_password_incorrect() {
        let password = "correct_password";
        let hash = hash_password(password).expect("Hash should succeed");

        let result = verify_password("wrong_password", &hash).expect("Verify should succeed");
        assert!(!result, "Wrong password should not verify");
    }

    #[test]
    fn test_verify_password_empty() {
        let hash = hash_password("password").expect("Hash should succeed");

        let result = verify_password("", &hash).expect("Verify should succeed");
        assert!(!result, "Empty password should not verify");
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        let result = verify_password("password", "not-a-phc-string");
        assert!(result.is_err(), "Invalid hash should return error");
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let passwords = vec![
            "simple",
            "with spaces",
            "with-special-chars!@#$%",
            "unicode-密码-パスワード",
        ];

        for password in passwords {
            let hash = hash_password(password).expect("Hash should succeed");
            let verified = verify_password(password, &hash).expect("Verify should succeed");
            assert!(verified, "Password '{}' should verify", password);
        }
    }
}
